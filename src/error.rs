//! Fatal startup errors
//!
//! Nothing inside the frame loop can fail; every variant here stops the
//! game before (or instead of) entering it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// The image decoder cannot read a format an asset needs
    #[error("requires extended image loading: {format} decoding is not available")]
    CapabilityMissing { format: String },

    #[error("could not load image \"{}\": {source}", .path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Window creation or presentation failed
    #[error("platform error: {0}")]
    Platform(String),
}

impl GameError {
    pub fn platform_error(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}
