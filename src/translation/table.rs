/*!
 * Translation tables and their loader.
 *
 * A translation table maps placeholder keys to replacement text for one
 * language. Tables are read from `<input directory>/<lang>.json`, a flat JSON
 * object, and are created fresh for every job.
 */

use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::{LoadError, TableError};
use crate::file_utils::ResourceStore;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Placeholder key to replacement text for a single language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Replacement text for an exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a flat JSON object.
    ///
    /// String values are taken as-is, `null` becomes an empty string, numbers
    /// and booleans keep their JSON spelling. Nested values are rejected. On a
    /// duplicated key the last occurrence wins.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, TableError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let document: Value = serde_json::from_slice(bytes)?;

        let Value::Object(map) = document else {
            return Err(TableError::NotAnObject);
        };

        let mut table = Self::new();
        for (key, value) in map {
            let value = match value {
                Value::String(text) => text,
                Value::Null => String::new(),
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(TableError::NotFlat { key });
                }
            };
            table.insert(key, value);
        }

        Ok(table)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Loads per-language translation tables from an input directory
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    input_directory: PathBuf,
    store: Arc<dyn ResourceStore>,
}

impl TranslationLoader {
    /// Create a loader reading through the given store
    pub fn new(input_directory: impl Into<PathBuf>, store: Arc<dyn ResourceStore>) -> Self {
        Self {
            input_directory: input_directory.into(),
            store,
        }
    }

    /// Directory the loader reads from
    pub fn input_directory(&self) -> &Path {
        &self.input_directory
    }

    /// Path probed for a language
    pub fn translation_path(&self, language: &str) -> PathBuf {
        self.input_directory.join(format!("{}.json", language))
    }

    /// Read and parse the translation table of a language
    pub async fn load(&self, language: &str) -> Result<TranslationTable, LoadError> {
        let path = self.translation_path(language);
        debug!("Loading {} translation keys from {:?}", language, path);

        let bytes = self.store.read(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::LanguageNotSupported {
                    language: language.to_string(),
                    path: path.clone(),
                }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let table = TranslationTable::from_json_slice(&bytes)
            .map_err(|source| LoadError::Malformed { path: path.clone(), source })?;

        debug!("Loaded {} translation keys for {}", table.len(), language);
        Ok(table)
    }
}
