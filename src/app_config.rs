//! Application configuration module
//!
//! This module resolves command line options and an optional JSON config file
//! into one immutable, validated configuration used by the controller.

use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::language_utils;

/// Represents the resolved run configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Languages to generate, in request order
    #[serde(default)]
    pub languages: Vec<String>,

    /// Source document to internationalize
    #[serde(default = "default_source_file")]
    pub source_file: PathBuf,

    /// Delete the source document once it has been read
    #[serde(default)]
    pub delete_source: bool,

    /// Directory holding one `<lang>.json` file per language
    #[serde(default = "default_input_directory")]
    pub input_directory: PathBuf,

    /// Placeholder delimiters
    #[serde(default, rename = "tags")]
    pub delimiters: DelimiterPair,

    /// Directory receiving the generated files
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Output file naming rule
    #[serde(default)]
    pub output_name: OutputName,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Opening and closing strings that bracket a placeholder key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DelimiterPair {
    pub open: String,
    pub close: String,
}

impl DelimiterPair {
    /// Create a delimiter pair from its two components
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Parse the comma separated `open,close` form used by the tags option
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = value.split(',').collect();
        if parts.len() != 2 {
            return Err(ConfigError::InvalidDelimiters {
                value: value.to_string(),
                reason: format!(
                    "expected exactly an opening and a closing tag separated by a comma, found {} part(s)",
                    parts.len()
                ),
            });
        }

        let pair = Self::new(parts[0], parts[1]);
        pair.validate()?;
        Ok(pair)
    }

    /// Check the pair can bracket a key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.open.is_empty() && self.close.is_empty() {
            return Err(ConfigError::InvalidDelimiters {
                value: self.to_string(),
                reason: "opening and closing tags cannot both be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self::new("{{", "}}")
    }
}

impl fmt::Display for DelimiterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.open, self.close)
    }
}

impl TryFrom<String> for DelimiterPair {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DelimiterPair> for String {
    fn from(pair: DelimiterPair) -> Self {
        pair.to_string()
    }
}

/// How each language's output file is named
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum OutputName {
    /// `<source stem>_<lang>.html`
    #[default]
    Derived,
    /// The same explicit name for every language
    Fixed(String),
}

impl OutputName {
    /// File name used for the given source document and language
    pub fn file_name(&self, source_file: &Path, language: &str) -> String {
        match self {
            Self::Derived => {
                let stem = source_file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
                    .unwrap_or_else(|| "index".to_string());
                format!("{}_{}.html", stem, language)
            }
            Self::Fixed(name) => name.clone(),
        }
    }

    /// Whether every language shares one output file name
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<Option<String>> for OutputName {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(name) => Self::Fixed(name),
            None => Self::Derived,
        }
    }
}

impl From<OutputName> for Option<String> {
    fn from(value: OutputName) -> Self {
        match value {
            OutputName::Derived => None,
            OutputName::Fixed(name) => Some(name),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Raw option values collected from the command line.
///
/// Every field is optional so that values from a config file survive unless
/// explicitly overridden.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Comma separated language list
    pub languages: Option<String>,
    /// Source document path
    pub source_file: Option<PathBuf>,
    /// Delete the source after reading it
    pub delete_source: bool,
    /// Translation directory as typed by the user
    pub input_directory: Option<String>,
    /// Comma separated delimiter pair
    pub tags: Option<String>,
    /// Output directory
    pub output_directory: Option<PathBuf>,
    /// Explicit output file name
    pub output_name: Option<String>,
    /// Log level
    pub log_level: Option<LogLevel>,
}

fn default_source_file() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_input_directory() -> PathBuf {
    PathBuf::from("./lang")
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("./dist")
}

/// Strip trailing slashes from a directory option.
///
/// The root directory is kept as `/`, and an empty value means the current
/// directory.
pub fn normalize_input_directory(raw: &str) -> PathBuf {
    if raw.is_empty() {
        return PathBuf::from(".");
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(trimmed)
    }
}

impl Config {
    /// Resolve the final configuration from an optional config file and the
    /// command line overrides.
    ///
    /// Option values are checked before the config file is touched, so a
    /// malformed tags value fails without any file I/O.
    pub fn resolve(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let delimiters = overrides
            .tags
            .as_deref()
            .map(DelimiterPair::parse)
            .transpose()?;
        let languages = overrides
            .languages
            .as_deref()
            .map(language_utils::parse_language_list)
            .transpose()?;

        let mut config = match config_file {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };

        if let Some(languages) = languages {
            config.languages = languages;
        }
        if let Some(source_file) = overrides.source_file {
            config.source_file = source_file;
        }
        config.delete_source |= overrides.delete_source;
        if let Some(input_directory) = overrides.input_directory {
            config.input_directory = normalize_input_directory(&input_directory);
        }
        if let Some(delimiters) = delimiters {
            config.delimiters = delimiters;
        }
        if let Some(output_directory) = overrides.output_directory {
            config.output_directory = output_directory;
        }
        if let Some(output_name) = overrides.output_name {
            config.output_name = OutputName::Fixed(output_name);
        }
        if let Some(log_level) = overrides.log_level {
            config.log_level = log_level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, normalizing its directory and language values
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_json::from_slice(&content).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })?;

        config.input_directory = normalize_input_directory(&config.input_directory.to_string_lossy());
        config.languages = config
            .languages
            .iter()
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty())
            .collect();
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::MissingLanguages);
        }
        for language in &self.languages {
            language_utils::validate_language_identifier(language)?;
        }

        self.delimiters.validate()?;

        if let OutputName::Fixed(name) = &self.output_name {
            if name.trim().is_empty() || name == "." || name == ".." {
                return Err(ConfigError::InvalidOutputName(name.clone()));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            source_file: default_source_file(),
            delete_source: false,
            input_directory: default_input_directory(),
            delimiters: DelimiterPair::default(),
            output_directory: default_output_directory(),
            output_name: OutputName::default(),
            log_level: LogLevel::default(),
        }
    }
}
