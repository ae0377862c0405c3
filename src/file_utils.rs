use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use crate::app_config::OutputName;

// @module: File and directory utilities

/// Byte level access to the documents a run reads and writes.
///
/// The controller only talks to the file system through this trait, so a run
/// can be driven against an in-memory store in tests.
#[async_trait]
pub trait ResourceStore: Send + Sync + Debug {
    /// Read a whole file
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate a file with the given contents
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create a directory and its parents; an existing directory is not an error
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Delete a file
    async fn remove_file(&self, path: &Path) -> io::Result<()>;
}

// @struct: Store backed by the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

#[async_trait]
impl ResourceStore for LocalFileStore {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @generates: Output path for an internationalized document
    // @params: source_file, output_dir, output_name, language
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        source_file: P1,
        output_dir: P2,
        output_name: &OutputName,
        language: &str,
    ) -> PathBuf {
        let file_name = output_name.file_name(source_file.as_ref(), language);
        output_dir.as_ref().join(file_name)
    }

    /// Decode source bytes as UTF-8, replacing invalid sequences.
    ///
    /// Returns the text and whether any replacement happened.
    pub fn decode_text(bytes: Vec<u8>) -> (String, bool) {
        match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
        }
    }
}
