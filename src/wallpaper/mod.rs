//! # Wallpaper Module
//!
//! Everything that happens after the track list is known:
//!
//! ```text
//! Track ──► fetch (album art) ──► compose (canvas + art) ──► PNG in folder
//!                                                               │
//!                     setter ◄── select (random pick) ◄─────────┘
//! ```
//!
//! - [`fetch`] - downloads and decodes album art
//! - [`compose`] - background color, centering and writing the PNG
//! - [`select`] - lists the output folder and picks a wallpaper at random
//! - [`setter`] - applies a file as desktop background (Windows only)

pub mod compose;
pub mod fetch;
pub mod select;
pub mod setter;

pub use compose::{create_album_wallpaper, create_album_wallpapers};
pub use fetch::image_from_url;
pub use select::{choose_wallpaper, get_random_wallpaper, get_wallpaper_paths, is_image};
pub use setter::set_wallpaper;
