use std::{fmt, str::FromStr};

use image::Rgb;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksResponse {
    pub items: Vec<SavedTrack>,
    pub total: Option<u64>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub added_at: Option<String>,
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub album: Album,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    pub images: Vec<AlbumImage>,
}

/// One size variant of an album cover. Spotify lists the largest first and
/// may leave the dimensions empty for some uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Tabled)]
pub struct WallpaperTableRow {
    pub name: String,
    pub size: String,
    pub path: String,
}

/// How the canvas behind the album art is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode {
    /// Per-channel median of the album art.
    Average,
    Blurred,
    Grain,
    Color(Rgb<u8>),
}

impl FromStr for BackgroundMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "average" => return Ok(BackgroundMode::Average),
            "blurred" | "blured" => return Ok(BackgroundMode::Blurred),
            "grain" => return Ok(BackgroundMode::Grain),
            _ => {}
        }

        if let Some(hex) = value.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(format!("expected #rrggbb, got '{}'", s));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| format!("invalid hex color '{}'", s))
            };
            return Ok(BackgroundMode::Color(Rgb([
                channel(0)?,
                channel(2)?,
                channel(4)?,
            ])));
        }

        let channels: Vec<&str> = value
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(',')
            .map(str::trim)
            .collect();
        if channels.len() != 3 {
            return Err(format!(
                "expected average, blurred, grain, r,g,b or #rrggbb, got '{}'",
                s
            ));
        }

        let mut rgb = [0u8; 3];
        for (slot, channel) in rgb.iter_mut().zip(channels) {
            *slot = channel
                .parse::<u8>()
                .map_err(|_| format!("color channel '{}' is not in 0..=255", channel))?;
        }
        Ok(BackgroundMode::Color(Rgb(rgb)))
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundMode::Average => write!(f, "average"),
            BackgroundMode::Blurred => write!(f, "blurred"),
            BackgroundMode::Grain => write!(f, "grain"),
            BackgroundMode::Color(Rgb([r, g, b])) => write!(f, "{},{},{}", r, g, b),
        }
    }
}

/// Where the tracks whose covers become wallpapers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Liked,
    Playlist,
    Artist,
}

impl FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liked" => Ok(SourceMode::Liked),
            "playlist" => Ok(SourceMode::Playlist),
            "artist" => Ok(SourceMode::Artist),
            other => Err(format!(
                "expected liked, playlist or artist, got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceMode::Liked => "liked",
            SourceMode::Playlist => "playlist",
            SourceMode::Artist => "artist",
        };
        write!(f, "{}", name)
    }
}

/// Track details meant to be printed onto a wallpaper. Accepted in the
/// configuration but not rendered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackInfo {
    None,
    Artist,
    Track,
    ArtistAndTrack,
}

impl FromStr for TrackInfo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(TrackInfo::None),
            "artist" => Ok(TrackInfo::Artist),
            "track" => Ok(TrackInfo::Track),
            "artist-a-track" => Ok(TrackInfo::ArtistAndTrack),
            other => Err(format!(
                "expected none, artist, track or artist-a-track, got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for TrackInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackInfo::None => "none",
            TrackInfo::Artist => "artist",
            TrackInfo::Track => "track",
            TrackInfo::ArtistAndTrack => "artist-a-track",
        };
        write!(f, "{}", name)
    }
}
