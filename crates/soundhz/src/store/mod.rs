//! Sound board persistence.
//!
//! This module provides the file-backed store that owns the on-disk sound
//! board collection. The collection lives in a single JSON document; the
//! store is its only writer and serializes every operation behind one lock,
//! so concurrent callers can never interleave their load/modify/save steps.
//!
//! A missing or corrupt document is not an error: the store reseeds it with
//! the built-in default boards and carries on. Only environmental failures
//! (permissions, disk) and contract violations reach the caller.

pub mod fs;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::board::SoundBoard;
use crate::cancel::CancelToken;
use crate::error::{Error, Result};

pub use fs::{FileSystem, LocalFileSystem};

/// Name of the JSON document that backs the store.
pub const STORE_FILE_NAME: &str = "soundboards.json";

/// File-backed store for the sound board collection.
///
/// All four operations take the same internal lock for their entire
/// duration, which totally orders them: an operation that starts after
/// another acquired the lock observes that operation's completed effect or
/// its failure with no effect, never a partial state. In particular two
/// concurrent [`add`](Self::add) calls cannot lose an update to each other.
///
/// No file handle is held between calls; each operation opens, uses, and
/// closes its own.
#[derive(Debug)]
pub struct BoardStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    lock: Mutex<()>,
}

impl BoardStore {
    /// Create a store over the given file system.
    ///
    /// The backing document lives at `soundboards.json` inside the file
    /// system's data directory. Only one store instance should exist per
    /// path.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        let path = fs.data_dir().join(STORE_FILE_NAME);
        Self {
            fs,
            path,
            lock: Mutex::new(()),
        }
    }

    /// Create a store over a [`LocalFileSystem`] rooted at the given data
    /// directory.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(LocalFileSystem::new(data_dir)))
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieve all sound boards.
    ///
    /// If the backing document does not exist it is seeded with
    /// [`default_boards`] and the defaults are returned. If it exists but
    /// cannot be parsed, the failure is logged, the document is reseeded,
    /// and the defaults are returned. The returned boards are owned values;
    /// mutating them cannot affect the store.
    ///
    /// # Errors
    ///
    /// Returns an error on cancellation or on environmental I/O failures
    /// other than "file absent" (e.g. permission denied).
    pub async fn list(&self, cancel: &CancelToken) -> Result<Vec<SoundBoard>> {
        let _guard = self.lock.lock().await;
        cancel.checkpoint("list")?;
        self.load_locked().await
    }

    /// Replace the entire collection with the given boards.
    ///
    /// Full overwrite semantics: what was on disk before is gone.
    ///
    /// # Errors
    ///
    /// Returns an error on cancellation or if the document cannot be
    /// written.
    pub async fn save(&self, boards: &[SoundBoard], cancel: &CancelToken) -> Result<()> {
        let _guard = self.lock.lock().await;
        cancel.checkpoint("save")?;
        self.save_locked(boards).await
    }

    /// Append a board to the collection.
    ///
    /// Loads the current collection (seeding defaults if the document is
    /// absent), appends the board, and writes the whole collection back as
    /// one critical section. The board is taken by value, so the caller
    /// keeps no handle that could alias what gets persisted.
    ///
    /// # Errors
    ///
    /// Returns an error on cancellation or on environmental I/O failures.
    pub async fn add(&self, board: SoundBoard, cancel: &CancelToken) -> Result<()> {
        let _guard = self.lock.lock().await;
        cancel.checkpoint("add")?;
        let mut boards = self.load_locked().await?;
        cancel.checkpoint("add")?;
        boards.push(board);
        self.save_locked(&boards).await
    }

    /// Remove every board whose title matches, ignoring case.
    ///
    /// Returns the number of boards removed. When nothing matches the
    /// collection is left untouched and a warning is logged; this is not a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title (before any I/O), and
    /// otherwise errors on cancellation or environmental I/O failures.
    pub async fn remove(&self, title: &str, cancel: &CancelToken) -> Result<usize> {
        if title.trim().is_empty() {
            return Err(Error::board_validation("title must not be blank"));
        }

        let _guard = self.lock.lock().await;
        cancel.checkpoint("remove")?;
        let mut boards = self.load_locked().await?;

        let before = boards.len();
        boards.retain(|board| !board.matches_title(title));
        let removed = before - boards.len();

        if removed == 0 {
            warn!("no sound board titled {title:?} was found for removal");
            return Ok(0);
        }

        cancel.checkpoint("remove")?;
        self.save_locked(&boards).await?;
        debug!("removed {removed} sound board(s) titled {title:?}");
        Ok(removed)
    }

    /// Load the collection, seeding defaults when the document is absent or
    /// corrupt. Must be called with the lock held.
    async fn load_locked(&self) -> Result<Vec<SoundBoard>> {
        if !self.fs.exists(&self.path).await {
            debug!("no document at {}, seeding defaults", self.path.display());
            return self.reseed_locked().await;
        }

        let mut file = match self.fs.open_read(&self.path).await {
            Ok(file) => file,
            // The document vanished between the existence check and the open
            Err(source) if source.kind() == ErrorKind::NotFound => {
                return self.reseed_locked().await;
            }
            Err(source) => {
                return Err(Error::FileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut raw = String::new();
        file.read_to_string(&mut raw)
            .await
            .map_err(|source| Error::FileRead {
                path: self.path.clone(),
                source,
            })?;

        match serde_json::from_str::<Vec<SoundBoard>>(&raw) {
            Ok(boards) => {
                debug!("loaded {} sound board(s)", boards.len());
                Ok(boards)
            }
            Err(err) => {
                error!(
                    "failed to deserialize {}: {err}; reseeding defaults",
                    self.path.display()
                );
                self.reseed_locked().await
            }
        }
    }

    /// Write the default boards to disk and return them. Must be called
    /// with the lock held.
    async fn reseed_locked(&self) -> Result<Vec<SoundBoard>> {
        let defaults = default_boards();
        self.save_locked(&defaults).await?;
        Ok(defaults)
    }

    /// Serialize the boards and overwrite the document. Must be called with
    /// the lock held.
    ///
    /// The write opens the target with truncation and streams the document
    /// straight to it; there is no temp-file-plus-rename step. A crash mid
    /// write can leave a truncated document, which the next load repairs by
    /// reseeding.
    async fn save_locked(&self, boards: &[SoundBoard]) -> Result<()> {
        let json = serde_json::to_string_pretty(boards)?;

        let mut file = self
            .fs
            .open_write(&self.path)
            .await
            .map_err(|source| Error::FileWrite {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|source| Error::FileWrite {
                path: self.path.clone(),
                source,
            })?;
        file.flush().await.map_err(|source| Error::FileWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "wrote {} sound board(s) to {}",
            boards.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// The default collection written whenever the backing document is absent
/// or unreadable.
#[must_use]
pub fn default_boards() -> Vec<SoundBoard> {
    vec![
        SoundBoard::seed(
            "Arcade Classics",
            "Relive the nostalgia of arcade cabinets with iconic sounds.",
        ),
        SoundBoard::seed(
            "Sci-Fi Toolkit",
            "Spaceship bleeps, portal swirls, and synthetic ambiences.",
        ),
        SoundBoard::seed(
            "Fantasy Adventure",
            "Quests, creatures, and spellcasting soundscapes for your campaign.",
        ),
    ]
}
