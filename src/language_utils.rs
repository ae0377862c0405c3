//! Language utilities for the requested language list
//!
//! This module splits and validates the comma separated language option and
//! provides human readable names for ISO 639 codes in log output.

use isolang::Language;
use std::collections::HashSet;

use crate::errors::ConfigError;

/// Split a comma separated language list, dropping blank entries
pub fn parse_language_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let languages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect();

    if languages.is_empty() {
        return Err(ConfigError::MissingLanguages);
    }

    for language in &languages {
        validate_language_identifier(language)?;
    }

    Ok(languages)
}

/// Check that a language identifier can be used as a file name stem
pub fn validate_language_identifier(language: &str) -> Result<(), ConfigError> {
    let invalid = language.is_empty()
        || language == "."
        || language == ".."
        || language.contains('/')
        || language.contains('\\')
        || language.contains('\0');

    if invalid {
        return Err(ConfigError::InvalidLanguage(language.to_string()));
    }
    Ok(())
}

/// Languages that appear more than once, in order of their second appearance
pub fn find_duplicates(languages: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for language in languages {
        if !seen.insert(language.as_str()) && reported.insert(language.as_str()) {
            duplicates.push(language.clone());
        }
    }

    duplicates
}

/// English name of a language code, looking at its primary subtag
/// (`pt-BR` resolves through `pt`)
pub fn get_language_name(code: &str) -> Option<&'static str> {
    let primary = code
        .split(['-', '_'])
        .next()
        .unwrap_or(code)
        .to_lowercase();

    let language = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }?;

    Some(language.to_name())
}

/// Language code with its English name when known, e.g. `fr (French)`
pub fn describe_language(code: &str) -> String {
    match get_language_name(code) {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    }
}
