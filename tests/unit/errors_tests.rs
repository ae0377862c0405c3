/*!
 * Tests for error types and conversions
 */

use std::io;
use std::path::PathBuf;
use internationalize::errors::{AppError, ConfigError, JobError, LoadError, SourceError, WriteError};

#[test]
fn test_configError_invalidDelimiters_shouldDisplayValueAndReason() {
    let error = ConfigError::InvalidDelimiters {
        value: "{{".to_string(),
        reason: "expected two parts".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("{{"));
    assert!(display.contains("expected two parts"));
}

#[test]
fn test_sourceError_notFound_shouldNameFile() {
    let error = SourceError::NotFound { path: PathBuf::from("index.html") };
    let display = format!("{}", error);
    assert!(display.contains("index.html"));
    assert!(display.contains("does not exist"));
}

#[test]
fn test_loadError_languageNotSupported_shouldNameLanguageAndPath() {
    let error = LoadError::LanguageNotSupported {
        language: "fr".to_string(),
        path: PathBuf::from("./lang/fr.json"),
    };
    let display = format!("{}", error);
    assert!(display.contains("fr language is not yet supported"));
    assert!(display.contains("./lang/fr.json"));
}

#[test]
fn test_jobError_fromWriteError_shouldKeepMessage() {
    let error: JobError = WriteError::File {
        path: PathBuf::from("dist/index_fr.html"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
    }
    .into();
    let display = format!("{}", error);
    assert!(display.contains("dist/index_fr.html"));
    assert!(display.contains("read-only"));
}

#[test]
fn test_jobError_isLanguageNotSupported_shouldOnlyMatchMissingFile() {
    let missing: JobError = LoadError::LanguageNotSupported {
        language: "fr".to_string(),
        path: PathBuf::from("fr.json"),
    }
    .into();
    let aborted = JobError::Aborted("panic".to_string());
    assert!(missing.is_language_not_supported());
    assert!(!aborted.is_language_not_supported());
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let app_error: AppError = ConfigError::MissingLanguages.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("at least a language"));
}
