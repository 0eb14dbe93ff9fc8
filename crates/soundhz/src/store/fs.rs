//! File-system boundary for the sound board store.
//!
//! The store never touches the disk directly; it goes through the
//! [`FileSystem`] trait so the backing directory can be swapped out (tests
//! point it at a scratch directory). [`LocalFileSystem`] is the tokio-backed
//! implementation used by the application.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File, OpenOptions};

/// Access to the directory-scoped files owned by the application.
#[async_trait]
pub trait FileSystem: Send + Sync + std::fmt::Debug {
    /// Directory that holds the application's data files.
    fn data_dir(&self) -> &Path;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &Path) -> bool;

    /// Open a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    async fn open_read(&self, path: &Path) -> std::io::Result<File>;

    /// Open a file for writing, truncating any existing content.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the file cannot be created.
    async fn open_write(&self, path: &Path) -> std::io::Result<File>;
}

/// A [`FileSystem`] rooted at a local data directory.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    data_dir: PathBuf,
}

impl LocalFileSystem {
    /// Create a file system rooted at the given data directory.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn open_read(&self, path: &Path) -> std::io::Result<File> {
        File::open(path).await
    }

    async fn open_write(&self, path: &Path) -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            if !fs::try_exists(parent).await.unwrap_or(false) {
                fs::create_dir_all(parent).await?;
            }
        }

        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .await
    }
}
