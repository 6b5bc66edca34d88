//! Custom Error and Result types for this library

use std::io;
use thiserror::Error;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum HomegoingError {
    /// The manifest file could not be read
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        /// Path of the manifest
        path: String,
        /// Underlying io error
        source: io::Error,
    },

    /// The manifest file is not valid YAML or has the wrong shape
    #[error("failed to parse manifest {path}: {source}")]
    ManifestParse {
        /// Path of the manifest
        path: String,
        /// Underlying parse error
        source: serde_yaml::Error,
    },

    /// A manifest path used `~` but no home directory is known
    #[error("failed to resolve home directory for path: {_0}")]
    HomeDir(String),

    /// The dotfile's source does not exist
    #[error("source does not exist: {_0}")]
    MissingSource(String),

    /// Something other than our symlink already lives at the target
    #[error("target already exists: {_0}")]
    TargetConflict(String),

    /// Unlink was requested for a target that is not our symlink
    #[error("target is not linked: {_0}")]
    NotLinked(String),

    /// Generic file system error
    #[error("io error: {_0}")]
    Io(#[from] io::Error),
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`HomegoingError`]
pub type Result<T> = std::result::Result<T, HomegoingError>;
