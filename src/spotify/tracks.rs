use reqwest::Client;

use crate::{
    Res,
    config::Settings,
    errors::WallpaperError,
    types::{SavedTracksResponse, SourceMode, Track},
};

/// Retrieves one page of the current user's saved ("liked") tracks.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `api_url` - Base URL of the Spotify Web API
/// * `token` - Valid access token with the `user-library-read` scope
/// * `limit` - Number of tracks to return; Spotify accepts 1-50
/// * `offset` - Index of the first track to return
///
/// # Errors
///
/// Bounds outside the range Spotify accepts come back as the service's own
/// HTTP error. Nothing is retried.
pub async fn get_saved_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    let url = format!("{api_url}/me/tracks?limit={limit}&offset={offset}");

    let res = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?
        .json::<SavedTracksResponse>()
        .await?;

    Ok(res.items.into_iter().map(|item| item.track).collect())
}

/// Fetches the tracks for the configured source.
///
/// Only the liked-tracks source talks to Spotify; the playlist and artist
/// sources fail with [`WallpaperError::NotImplemented`].
pub async fn get_tracks(client: &Client, token: &str, settings: &Settings) -> Res<Vec<Track>> {
    match settings.source {
        SourceMode::Liked => Ok(get_saved_tracks(
            client,
            &settings.spotify.api_url,
            token,
            settings.count,
            settings.offset,
        )
        .await?),
        SourceMode::Playlist | SourceMode::Artist => Err(WallpaperError::NotImplemented(
            format!("the '{}' track source", settings.source),
        )
        .into()),
    }
}
