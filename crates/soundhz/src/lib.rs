//! `soundhz` - A personal sound board manager
//!
//! This library provides the core functionality for organizing named sound
//! boards and persisting them durably as a single JSON document on local
//! disk.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod board;
pub mod cancel;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;

pub use board::{SoundBoard, SoundClip};
pub use cancel::CancelToken;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use store::{BoardStore, FileSystem, LocalFileSystem};
