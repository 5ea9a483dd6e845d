use reqwest::Client;

use crate::{
    cli::shuffle::apply_random,
    config::Settings,
    error,
    management::TokenManager,
    spotify, success,
    types::{BackgroundMode, TrackInfo},
    utils, wallpaper, warning,
};

/// Runs the whole pipeline: tracks, wallpapers and, if `apply` is set, a
/// random pick among the freshly generated files as desktop background.
pub async fn generate(settings: &Settings, apply: bool) {
    if matches!(
        settings.background,
        BackgroundMode::Blurred | BackgroundMode::Grain
    ) {
        warning!(
            "Background mode '{}' is not implemented yet, falling back to black.",
            settings.background
        );
    }

    if settings.track_info != TrackInfo::None {
        warning!(
            "Track info '{}' is not rendered yet, wallpapers show the cover only.",
            settings.track_info
        );
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spotpaper auth\n Error: {}",
                e
            );
        }
    };

    let token = match token_mgr.get_valid_token(&settings.spotify).await {
        Ok(t) => t,
        Err(e) => error!("{}\nPlease run spotpaper auth", e),
    };

    let client = Client::new();

    let pb = utils::spinner(&format!(
        "Fetching {} {} tracks from offset {}...",
        settings.count, settings.source, settings.offset
    ));
    let tracks = match spotify::tracks::get_tracks(&client, &token, settings).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch tracks: {}", e);
        }
    };

    if tracks.is_empty() {
        warning!("No tracks returned for the '{}' source.", settings.source);
    }

    if let Err(e) = async_fs::create_dir_all(&settings.folder).await {
        error!(
            "Cannot create wallpaper folder {}: {}",
            settings.folder.display(),
            e
        );
    }

    let pb = utils::progress_bar(tracks.len() as u64);
    let paths =
        match wallpaper::create_album_wallpapers(&client, &tracks, settings, &pb).await {
            Ok(paths) => {
                pb.finish_and_clear();
                paths
            }
            Err(e) => {
                pb.abandon();
                error!("{}", e);
            }
        };

    success!(
        "Created {} wallpapers in {}",
        paths.len(),
        settings.folder.display()
    );

    if apply {
        apply_random(&paths, settings);
    }
}
