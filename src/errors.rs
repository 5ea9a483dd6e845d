use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the wallpaper pipeline itself.
///
/// Transport, decoding and I/O failures keep their own error types
/// (`reqwest::Error`, `image::ImageError`, `std::io::Error`) and travel next
/// to these through [`crate::Res`].
#[derive(Debug, Error)]
pub enum WallpaperError {
    #[error("{0} is not implemented yet")]
    NotImplemented(String),

    #[error(
        "album art of {width}x{height} does not fit on a {canvas_width}x{canvas_height} canvas"
    )]
    ArtworkTooLarge {
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("track '{0}' has no album images")]
    MissingAlbumImage(String),

    #[error("no wallpapers found in {}", .0.display())]
    NoWallpapers(PathBuf),

    #[error("failed to set wallpaper {}: {source}", .path.display())]
    SetWallpaper {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("setting the desktop wallpaper is not supported on {0}")]
    UnsupportedPlatform(&'static str),

    #[error("invalid value for {key}: {message}")]
    InvalidSetting { key: String, message: String },
}
