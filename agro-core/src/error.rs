//! Error types for navigation and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::view::ViewId;

/// Why a navigation request was abandoned.
///
/// Neither variant is a runtime fault: both point at a wiring mistake between
/// the caller and the registered surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("view {0} not found")]
    UnknownView(String),

    #[error("view {0} has no registered surface")]
    MissingSurface(ViewId),
}

/// Failure loading a console configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
