use std::path::PathBuf;

use rand::seq::IndexedRandom;

use crate::{Res, config::Settings, errors::WallpaperError};

/// Whether `path` ends with one of `extensions`.
///
/// Exact suffix match: `.PNG` does not count as `.png`.
pub fn is_image<S: AsRef<str>>(path: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|extension| path.ends_with(extension.as_ref()))
}

/// Lists the wallpapers in the output folder as full paths, sorted by name.
///
/// Only entries whose file name passes [`is_image`] are returned. A folder
/// that does not exist is an error.
pub fn get_wallpaper_paths(settings: &Settings) -> Res<Vec<PathBuf>> {
    let folder = std::path::absolute(&settings.folder)?;

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(&folder)? {
        let entry = entry?;
        let name = entry.file_name();
        if is_image(&name.to_string_lossy(), &settings.extensions) {
            paths.push(entry.path());
        }
    }

    paths.sort();
    Ok(paths)
}

/// Picks one path uniformly at random, or `None` for an empty list.
pub fn choose_wallpaper(paths: &[PathBuf]) -> Option<&PathBuf> {
    paths.choose(&mut rand::rng())
}

/// Scans the output folder and picks one of its wallpapers at random.
///
/// # Errors
///
/// Returns [`WallpaperError::NoWallpapers`] when the folder holds no
/// wallpaper, besides any error from [`get_wallpaper_paths`].
pub fn get_random_wallpaper(settings: &Settings) -> Res<PathBuf> {
    let paths = get_wallpaper_paths(settings)?;
    let path = choose_wallpaper(&paths)
        .ok_or_else(|| WallpaperError::NoWallpapers(settings.folder.clone()))?;
    Ok(path.clone())
}
