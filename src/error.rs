//! Error types
//!
//! Asset failures are fatal for the run: scenes load their sprites once on
//! construction and there is no fallback sprite.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot load image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },
    #[error("no built-in sprite for {}", path.display())]
    UnknownSprite { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
