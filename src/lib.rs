//! Spotify Album Wallpaper Library
//!
//! This library turns the album covers of a user's Spotify tracks into desktop
//! wallpapers. It fetches the track list, composites every cover centered on a
//! fixed-size canvas, saves the results to an output folder and sets one of
//! them as the desktop background.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Settings and environment loading
//! - `errors` - Domain error type shared by the pipeline stages
//! - `management` - Token cache management
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `wallpaper` - Image fetching, compositing, selection and the OS setter
//!
//! # Example
//!
//! ```
//! use spotpaper::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> spotpaper::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     cli::shuffle(&settings).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod wallpaper;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. Domain failures are raised as
/// [`errors::WallpaperError`] and boxed on the way up, next to HTTP, image
/// and I/O errors.
///
/// # Example
///
/// ```
/// use spotpaper::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching {} liked tracks...", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Created {} wallpapers", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Every
/// pipeline failure ends up here, so a failed run never leaves with status 0.
///
/// # Example
///
/// ```
/// error!("Failed to set wallpaper: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice, such as a background
/// mode that is not implemented yet and falls back to black.
///
/// # Example
///
/// ```
/// warning!("Background mode '{}' is not implemented, using black", mode);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
