use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading banners from disk.
#[derive(Debug, Error)]
pub enum BannerError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("No image files found in directory: {0}")]
    NoImages(PathBuf),
}

impl BannerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BannerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BannerError>;
