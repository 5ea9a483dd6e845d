use std::path::PathBuf;

use crate::{config::Settings, error, errors::WallpaperError, info, success, wallpaper};

/// Sets a random wallpaper from the output folder.
pub async fn shuffle(settings: &Settings) {
    let paths = match wallpaper::get_wallpaper_paths(settings) {
        Ok(paths) => paths,
        Err(e) => error!(
            "Cannot list wallpapers in {}: {}",
            settings.folder.display(),
            e
        ),
    };

    info!(
        "Found {} wallpapers in {}",
        paths.len(),
        settings.folder.display()
    );
    apply_random(&paths, settings);
}

pub(crate) fn apply_random(paths: &[PathBuf], settings: &Settings) {
    let path = match wallpaper::choose_wallpaper(paths) {
        Some(path) => path,
        None => error!("{}", WallpaperError::NoWallpapers(settings.folder.clone())),
    };

    match wallpaper::set_wallpaper(path) {
        Ok(()) => success!("Wallpaper set to {}", path.display()),
        Err(e) => error!("{}", e),
    }
}
