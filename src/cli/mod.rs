//! # CLI Module
//!
//! User-facing commands of spotpaper. Each command takes the [`Settings`]
//! built at start-up, drives the Spotify and wallpaper modules, and reports
//! through the colored status macros.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authentication with PKCE
//! - [`generate`] - Fetch tracks, create wallpapers, set a random one
//! - [`shuffle`] - Set a random wallpaper from the output folder
//! - [`list`] - Show the wallpapers in the output folder
//!
//! ## Error Handling
//!
//! Commands fail fast: the first error prints a red message and exits with
//! status 1. Wallpapers written before the failure stay on disk.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotpaper auth                  # Authenticate with Spotify
//! spotpaper                       # Generate wallpapers and set one
//! spotpaper generate --count 50   # Use more liked tracks
//! spotpaper shuffle               # Pick another existing wallpaper
//! spotpaper list                  # See what is in the folder
//! ```
//!
//! [`Settings`]: crate::config::Settings

mod auth;
mod generate;
mod list;
mod shuffle;

pub use auth::auth;
pub use generate::generate;
pub use list::list;
pub use shuffle::shuffle;
