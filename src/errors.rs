/*!
 * Error types for the internationalize application.
 *
 * Errors are split by scope: configuration and source errors abort the whole
 * run before any language is processed, while loader, substitution and write
 * errors only fail the job of the language they belong to.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving the run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No language was requested
    #[error("you must provide at least a language argument (e.g. --lang=en,fr)")]
    MissingLanguages,

    /// A language identifier cannot be used to build a file name
    #[error("invalid language identifier '{0}'")]
    InvalidLanguage(String),

    /// The tags option did not resolve to an (open, close) pair
    #[error("invalid tags '{value}': {reason}")]
    InvalidDelimiters {
        /// Raw option value
        value: String,
        /// What is wrong with it
        reason: String,
    },

    /// The explicit output name is unusable
    #[error("invalid output name '{0}'")]
    InvalidOutputName(String),

    /// A config file could not be read
    #[error("failed to read config file {path:?}: {source}")]
    FileRead {
        /// Config file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid JSON for the configuration schema
    #[error("failed to parse config file {path:?}: {source}")]
    FileParse {
        /// Config file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while reading (and optionally deleting) the source document
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source file does not exist
    #[error("internationalize tried to read {path:?} but it does not exist")]
    NotFound {
        /// Source path
        path: PathBuf,
    },

    /// Any other read failure
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Source path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The source was read but could not be deleted afterwards
    #[error("failed to delete {path:?} after reading it: {source}")]
    Delete {
        /// Source path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading a language's translation table
#[derive(Error, Debug)]
pub enum LoadError {
    /// The translation file for the language does not exist
    #[error("the {language} language is not yet supported! Check if {path:?} file exists")]
    LanguageNotSupported {
        /// Requested language
        language: String,
        /// Path that was probed
        path: PathBuf,
    },

    /// The translation file is not a flat JSON object
    #[error("failed to parse {path:?}: {source}")]
    Malformed {
        /// Translation file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: TableError,
    },

    /// Any other read failure
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Translation file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while parsing a translation table document
#[derive(Error, Debug)]
pub enum TableError {
    /// The document is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top level value is not an object
    #[error("expected a JSON object of key/value pairs")]
    NotAnObject,

    /// A value is an array or an object
    #[error("value for key '{key}' is not a string")]
    NotFlat {
        /// Offending key
        key: String,
    },
}

/// Errors raised while building the placeholder matcher
#[derive(Error, Debug)]
pub enum SubstitutionError {
    /// The combined placeholder pattern failed to compile
    #[error("failed to build placeholder matcher: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors raised while writing a language's output
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output directory could not be created
    #[error("failed to create output directory {path:?}: {source}")]
    CreateDir {
        /// Output directory
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("failed to write {path:?}: {source}")]
    File {
        /// Output file
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single language job
#[derive(Error, Debug)]
pub enum JobError {
    /// Loading the translation table failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Building the matcher failed
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),

    /// Writing the output failed
    #[error(transparent)]
    Write(#[from] WriteError),

    /// The job task ended without producing an outcome
    #[error("job aborted: {0}")]
    Aborted(String),
}

impl JobError {
    /// Whether the failure means the language has no translation file
    pub fn is_language_not_supported(&self) -> bool {
        matches!(self, Self::Load(LoadError::LanguageNotSupported { .. }))
    }
}

/// Main application error type for failures that abort the whole run
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Source document could not be read
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
