//! Configuration management for spotpaper.
//!
//! This module loads the `.env` file from the local data directory and turns
//! the environment into an immutable [`Settings`] value. The settings are built
//! once at start-up and handed by reference to every pipeline stage; nothing
//! reads the environment after that.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use dotenv;

use crate::{
    errors::WallpaperError,
    types::{BackgroundMode, SourceMode, TrackInfo},
};

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Largest accepted canvas side, in pixels.
pub const MAX_DIMENSION: u32 = 16384;
pub const DEFAULT_QUERY_COUNT: u32 = 20;
pub const DEFAULT_QUERY_OFFSET: u32 = 0;
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".png", ".jpg"];
pub const DEFAULT_FOLDER_NAME: &str = "generated-album-wallpapers";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `spotpaper/.env` inside the platform-specific local data directory.
/// A missing file is not an error; every setting has a default except the
/// Spotify client id, which is only needed for authentication.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotpaper/.env`
/// - macOS: `~/Library/Application Support/spotpaper/.env`
/// - Windows: `%LOCALAPPDATA%/spotpaper/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = data_dir();
    path.push(".env");
    path
}

/// Root of everything spotpaper keeps outside the wallpaper folder.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotpaper");
    path
}

/// Endpoints and OAuth client settings for the Spotify Web API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    /// Base URL of the Web API, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub scope: String,
    pub client_id: Option<String>,
    pub redirect_uri: String,
    /// Address the local callback server binds to during `auth`.
    pub server_addr: String,
}

impl SpotifyConfig {
    /// Returns the client id or a setting error naming the missing variable.
    pub fn client_id(&self) -> Result<&str, WallpaperError> {
        self.client_id
            .as_deref()
            .ok_or_else(|| WallpaperError::InvalidSetting {
                key: "SPOTIFY_API_AUTH_CLIENT_ID".to_string(),
                message: "must be set".to_string(),
            })
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.spotify.com/v1".to_string(),
            auth_url: "https://accounts.spotify.com/authorize".to_string(),
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            scope: "user-library-read".to_string(),
            client_id: None,
            redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
            server_addr: "127.0.0.1:8888".to_string(),
        }
    }
}

/// Everything the wallpaper pipeline needs to know, fixed for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub background: BackgroundMode,
    pub width: u32,
    pub height: u32,
    /// Output directory for generated wallpapers.
    pub folder: PathBuf,
    pub source: SourceMode,
    /// Number of tracks requested from the source.
    pub count: u32,
    pub offset: u32,
    /// File name suffixes counted as wallpapers, matched case-sensitively.
    pub extensions: Vec<String>,
    /// Track details to print on each wallpaper; only `None` is rendered.
    pub track_info: TrackInfo,
    pub spotify: SpotifyConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: BackgroundMode::Average,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            folder: default_folder(),
            source: SourceMode::Liked,
            count: DEFAULT_QUERY_COUNT,
            offset: DEFAULT_QUERY_OFFSET,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            track_info: TrackInfo::None,
            spotify: SpotifyConfig::default(),
        }
    }
}

impl Settings {
    /// Builds the settings from the process environment.
    ///
    /// Call [`load_env`] first so values from the `.env` file are visible.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::InvalidSetting`] for any variable that is set
    /// but cannot be parsed, or for a canvas dimension that is zero or larger
    /// than [`MAX_DIMENSION`].
    pub fn from_env() -> Result<Self, WallpaperError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup, falling back to the
    /// defaults for every key the lookup does not know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WallpaperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let spotify_defaults = defaults.spotify.clone();

        let width = parse_or(&lookup, "WALLPAPER_WIDTH", defaults.width)?;
        let height = parse_or(&lookup, "WALLPAPER_HEIGHT", defaults.height)?;
        for (key, value) in [("WALLPAPER_WIDTH", width), ("WALLPAPER_HEIGHT", height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(WallpaperError::InvalidSetting {
                    key: key.to_string(),
                    message: format!("must be between 1 and {}", MAX_DIMENSION),
                });
            }
        }

        let extensions = match lookup("WALLPAPER_EXTENSIONS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.extensions,
        };

        Ok(Self {
            background: parse_or(&lookup, "WALLPAPER_BACKGROUND", defaults.background)?,
            width,
            height,
            folder: lookup("WALLPAPER_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(defaults.folder),
            source: parse_or(&lookup, "SPOTIFY_SOURCE", defaults.source)?,
            count: parse_or(&lookup, "SPOTIFY_QUERY_COUNT", defaults.count)?,
            offset: parse_or(&lookup, "SPOTIFY_QUERY_OFFSET", defaults.offset)?,
            extensions,
            track_info: parse_or(&lookup, "WALLPAPER_DISPLAY_TRACK_INFO", defaults.track_info)?,
            spotify: SpotifyConfig {
                api_url: lookup("SPOTIFY_API_URL").unwrap_or(spotify_defaults.api_url),
                auth_url: lookup("SPOTIFY_API_AUTH_URL").unwrap_or(spotify_defaults.auth_url),
                token_url: lookup("SPOTIFY_API_TOKEN_URL").unwrap_or(spotify_defaults.token_url),
                scope: lookup("SPOTIFY_API_AUTH_SCOPE").unwrap_or(spotify_defaults.scope),
                client_id: lookup("SPOTIFY_API_AUTH_CLIENT_ID").filter(|id| !id.is_empty()),
                redirect_uri: lookup("SPOTIFY_API_REDIRECT_URI")
                    .unwrap_or(spotify_defaults.redirect_uri),
                server_addr: lookup("SERVER_ADDRESS").unwrap_or(spotify_defaults.server_addr),
            },
        })
    }
}

fn default_folder() -> PathBuf {
    let mut path = dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(DEFAULT_FOLDER_NAME);
    path
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, WallpaperError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| WallpaperError::InvalidSetting {
                key: key.to_string(),
                message: e.to_string(),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use image::Rgb;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.width, 1920);
        assert_eq!(settings.height, 1080);
        assert_eq!(settings.count, 20);
        assert_eq!(settings.offset, 0);
        assert_eq!(settings.extensions, vec![".png", ".jpg"]);
        assert_eq!(settings.background, BackgroundMode::Average);
        assert_eq!(settings.source, SourceMode::Liked);
        assert_eq!(settings.track_info, TrackInfo::None);
        assert!(settings.folder.ends_with(DEFAULT_FOLDER_NAME));
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("WALLPAPER_BACKGROUND", "10, 20, 30"),
            ("WALLPAPER_WIDTH", "2560"),
            ("WALLPAPER_HEIGHT", "1440"),
            ("WALLPAPER_FOLDER", "/tmp/walls"),
            ("SPOTIFY_SOURCE", "playlist"),
            ("SPOTIFY_QUERY_COUNT", "50"),
            ("SPOTIFY_QUERY_OFFSET", "100"),
            ("WALLPAPER_EXTENSIONS", ".png, .jpeg,"),
            ("WALLPAPER_DISPLAY_TRACK_INFO", "artist-a-track"),
            ("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1"),
            ("SPOTIFY_API_AUTH_CLIENT_ID", "abc123"),
        ]))
        .unwrap();

        assert_eq!(settings.background, BackgroundMode::Color(Rgb([10, 20, 30])));
        assert_eq!((settings.width, settings.height), (2560, 1440));
        assert_eq!(settings.folder, PathBuf::from("/tmp/walls"));
        assert_eq!(settings.source, SourceMode::Playlist);
        assert_eq!((settings.count, settings.offset), (50, 100));
        assert_eq!(settings.extensions, vec![".png", ".jpeg"]);
        assert_eq!(settings.track_info, TrackInfo::ArtistAndTrack);
        assert_eq!(settings.spotify.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(settings.spotify.client_id().unwrap(), "abc123");
    }

    #[test]
    fn invalid_values_name_the_offending_key() {
        let err = Settings::from_lookup(lookup_from(&[("WALLPAPER_WIDTH", "wide")])).unwrap_err();
        assert!(matches!(
            err,
            WallpaperError::InvalidSetting { ref key, .. } if key == "WALLPAPER_WIDTH"
        ));

        let err = Settings::from_lookup(lookup_from(&[("WALLPAPER_HEIGHT", "0")])).unwrap_err();
        assert!(matches!(
            err,
            WallpaperError::InvalidSetting { ref key, .. } if key == "WALLPAPER_HEIGHT"
        ));

        let err =
            Settings::from_lookup(lookup_from(&[("WALLPAPER_BACKGROUND", "plaid")])).unwrap_err();
        assert!(err.to_string().contains("WALLPAPER_BACKGROUND"));

        let err = Settings::from_lookup(lookup_from(&[("WALLPAPER_DISPLAY_TRACK_INFO", "album")]))
            .unwrap_err();
        assert!(err.to_string().contains("WALLPAPER_DISPLAY_TRACK_INFO"));
    }

    #[test]
    fn canvas_dimensions_are_capped() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("WALLPAPER_WIDTH", "16384"),
            ("WALLPAPER_HEIGHT", "1"),
        ]))
        .unwrap();
        assert_eq!((settings.width, settings.height), (MAX_DIMENSION, 1));

        let err = Settings::from_lookup(lookup_from(&[("WALLPAPER_WIDTH", "192000")])).unwrap_err();
        assert!(matches!(
            err,
            WallpaperError::InvalidSetting { ref key, .. } if key == "WALLPAPER_WIDTH"
        ));
        assert!(err.to_string().contains("between 1 and 16384"), "{err}");

        let err = Settings::from_lookup(lookup_from(&[("WALLPAPER_HEIGHT", "16385")])).unwrap_err();
        assert!(err.to_string().contains("WALLPAPER_HEIGHT"));
    }

    #[test]
    fn missing_client_id_is_reported() {
        let settings = Settings::from_lookup(lookup_from(&[("SPOTIFY_API_AUTH_CLIENT_ID", "")]))
            .unwrap();
        let err = settings.spotify.client_id().unwrap_err();
        assert!(err.to_string().contains("SPOTIFY_API_AUTH_CLIENT_ID"));
    }
}
