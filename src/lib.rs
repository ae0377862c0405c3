/*!
 * # internationalize - static document internationalization
 *
 * A Rust library and CLI that turns one templated text document (usually
 * HTML) into one document per language by replacing delimited placeholders
 * such as `{{title}}` with values from per-language JSON files.
 *
 * ## Features
 *
 * - Configurable placeholder delimiters, matched literally
 * - Case-insensitive placeholder matching with longest-key-first resolution
 * - Concurrent per-language jobs whose failures stay isolated
 * - Optional deletion of the source document after reading it
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration resolution and validation
 * - `translation`: Translation tables and placeholder substitution:
 *   - `translation::table`: Loading `<lang>.json` translation tables
 *   - `translation::substitution`: Matcher construction and replacement
 * - `file_utils`: File system access and output naming
 * - `app_controller`: Per-language job orchestration
 * - `language_utils`: Language list parsing and ISO language names
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{Config, ConfigOverrides, DelimiterPair, LogLevel, OutputName};
pub use app_controller::{Controller, JobOutcome, JobState, LanguageJob, RunSummary};
pub use errors::{AppError, ConfigError, JobError, LoadError, SourceError, SubstitutionError, TableError, WriteError};
pub use file_utils::{LocalFileStore, ResourceStore};
pub use translation::{Substitutor, TranslationLoader, TranslationTable};
