use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a drawing backend
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("{op} failed: {message}")]
    Backend { op: &'static str, message: String },
}

impl SurfaceError {
    /// Wrap a backend error, keeping only its message
    pub fn backend(op: &'static str, err: impl Display) -> Self {
        SurfaceError::Backend {
            op,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing surface is {width}x{height}; both sides must be non-zero")]
    EmptySurface { width: u32, height: u32 },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("chart size must be non-zero (got {width}x{height})")]
    ZeroSize { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error("failed to read cards file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cards file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no card matches '{0}'")]
    NotFound(String),
}
