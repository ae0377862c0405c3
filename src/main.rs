// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use internationalize::app_config::{self, Config, ConfigOverrides};
use internationalize::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for internationalize
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// internationalize - generate one document per language from placeholder templates
#[derive(Parser, Debug)]
#[command(name = "internationalize")]
#[command(version)]
#[command(about = "Internationalize a static document with per-language JSON translation keys")]
#[command(long_about = "internationalize reads a source document, replaces every {{key}} placeholder with the
value found in <input-directory>/<lang>.json and writes one file per language.

EXAMPLES:
    internationalize --lang=en                          # index.html -> dist/index_en.html
    internationalize -l en,fr,de                        # one output per language
    internationalize -l fr -f about.html -i ./i18n      # custom source and translation directory
    internationalize -l fr -t '[[,]]'                   # placeholders written as [[key]]
    internationalize -l fr -o public -n index.html      # explicit output directory and name
    internationalize -l en -d                           # delete the source after reading it
    internationalize completions bash > internationalize.bash

CONFIGURATION:
    Options can also be stored in a JSON file passed with --config. Command line
    values take precedence over the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// [required] Languages to apply, separated with commas
    #[arg(short, long, value_name = "LANGS")]
    lang: Option<String>,

    /// Source file to read (default is 'index.html')
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Delete the source file after reading it
    #[arg(short, long, visible_alias = "unlink")]
    delete: bool,

    /// Translation keys directory (default is './lang')
    #[arg(short, long, value_name = "DIR")]
    input_directory: Option<String>,

    /// Opening and closing placeholder tags, separated with a comma (default is '{{,}}')
    #[arg(short, long, value_name = "OPEN,CLOSE", allow_hyphen_values = true)]
    tags: Option<String>,

    /// Directory for the generated files (default is './dist')
    #[arg(short, long, value_name = "DIR")]
    output_directory: Option<PathBuf>,

    /// Output file name used for every language (default is '<file>_<lang>.html')
    #[arg(short = 'n', long, value_name = "NAME")]
    output_name: Option<String>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

impl CommandLineOptions {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            languages: self.lang.clone(),
            source_file: self.file.clone(),
            delete_source: self.delete,
            input_directory: self.input_directory.clone(),
            tags: self.tags.clone(),
            output_directory: self.output_directory.clone(),
            output_name: self.output_name.clone(),
            log_level: self.log_level.clone().map(Into::into),
        }
    }
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌",
            Level::Warn => "🚧",
            Level::Info => "✅",
            Level::Debug => "🔍",
            Level::Trace => "📋",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(record.level()),
                now,
                Self::get_emoji_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "internationalize", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::resolve(cli.config_path.as_deref(), cli.overrides()).context(
        "Invalid configuration. Use `internationalize --help` for the list of options",
    )?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let summary = controller
        .run()
        .await
        .context("Aborted before any language was processed")?;

    if !summary.all_succeeded() {
        return Err(anyhow!(
            "{} of {} language(s) could not be internationalized",
            summary.failed(),
            summary.outcomes.len()
        ));
    }

    Ok(())
}
