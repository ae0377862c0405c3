/*!
 * Common test utilities for the internationalize test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use internationalize::app_config::Config;


/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample templated HTML page for testing
pub fn create_test_page(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"<!DOCTYPE html>
<html lang="{{lang}}">
<head><title>{{title}}</title></head>
<body>
  <h1>{{Title}}</h1>
  <p>Hello {{name}}, welcome to {{place}}!</p>
</body>
</html>
"#;
    create_test_file(dir, filename, content)
}

/// Writes `<lang>.json` into the translation directory
pub fn create_translation_file(lang_dir: &Path, language: &str, json: &str) -> Result<PathBuf> {
    create_test_file(lang_dir, &format!("{}.json", language), json)
}

/// Configuration rooted in a test directory: `<root>/index.html`,
/// `<root>/lang` and `<root>/dist`
pub fn test_config(root: &Path, languages: &[&str]) -> Config {
    Config {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        source_file: root.join("index.html"),
        input_directory: root.join("lang"),
        output_directory: root.join("dist"),
        ..Config::default()
    }
}
