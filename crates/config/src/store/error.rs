//! Error types for property loading.
//!
//! Responsibilities:
//! - Define error variants for all property-store failures.
//!
//! Does NOT handle:
//! - Typed-getter parse failures (absorbed locally in properties.rs).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, line numbers,
//!   offending values).
//! - Load errors are unrecoverable by design: the process entry point is
//!   expected to log them and terminate rather than continue with a
//!   partially-configured process.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read properties resource at {path}")]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse properties resource at {path}, line {line}: {message}")]
    ResourceParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Unknown resource storage type '{0}'")]
    UnknownStorageType(String),
}
