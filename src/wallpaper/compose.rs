use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage, imageops};
use indicatif::ProgressBar;
use reqwest::Client;

use crate::{
    Res,
    config::Settings,
    errors::WallpaperError,
    types::{BackgroundMode, Track},
    utils,
    wallpaper::fetch::image_from_url,
};

/// Per-channel median of all pixels.
///
/// For every channel this is the smallest value whose cumulative count is
/// above half the number of pixels. An empty image yields black.
pub fn median_color(image: &RgbImage) -> Rgb<u8> {
    let mut histograms = [[0u64; 256]; 3];
    for pixel in image.pixels() {
        for (channel, value) in pixel.0.iter().enumerate() {
            histograms[channel][*value as usize] += 1;
        }
    }

    let half = u64::from(image.width()) * u64::from(image.height()) / 2;
    let mut median = [0u8; 3];
    for (slot, histogram) in median.iter_mut().zip(histograms.iter()) {
        let mut seen = 0;
        for (value, count) in histogram.iter().enumerate() {
            seen += count;
            if seen > half {
                *slot = value as u8;
                break;
            }
        }
    }

    Rgb(median)
}

/// Color used to fill the canvas behind the album art.
///
/// `Blurred` and `Grain` have no renderer yet and fall back to black.
pub fn background_color(mode: BackgroundMode, art: &RgbImage) -> Rgb<u8> {
    match mode {
        BackgroundMode::Average => median_color(art),
        BackgroundMode::Color(color) => color,
        BackgroundMode::Blurred | BackgroundMode::Grain => Rgb([0, 0, 0]),
    }
}

/// Top-left corner that centers an `art`-sized image on a `canvas`-sized one.
///
/// Integer division floors, so odd size differences leave the extra pixel on
/// the right and bottom. Art larger than the canvas gives a negative offset.
pub fn paste_offset(canvas: (u32, u32), art: (u32, u32)) -> (i64, i64) {
    (
        (i64::from(canvas.0) - i64::from(art.0)).div_euclid(2),
        (i64::from(canvas.1) - i64::from(art.1)).div_euclid(2),
    )
}

/// Builds the wallpaper bitmap for one album cover.
///
/// `declared` is the size Spotify reported for the cover and decides the
/// offset; the decoded `art` is what gets pasted. Art that would not lie fully
/// inside the canvas is rejected rather than clipped.
pub fn compose_wallpaper(
    art: &RgbImage,
    declared: (u32, u32),
    settings: &Settings,
) -> Result<RgbImage, WallpaperError> {
    let (x, y) = paste_offset((settings.width, settings.height), declared);

    let fits = x >= 0
        && y >= 0
        && x + i64::from(art.width()) <= i64::from(settings.width)
        && y + i64::from(art.height()) <= i64::from(settings.height);
    if !fits {
        return Err(WallpaperError::ArtworkTooLarge {
            width: art.width(),
            height: art.height(),
            canvas_width: settings.width,
            canvas_height: settings.height,
        });
    }

    let fill = background_color(settings.background, art);
    let mut canvas = RgbImage::from_pixel(settings.width, settings.height, fill);
    imageops::replace(&mut canvas, art, x, y);

    Ok(canvas)
}

/// Absolute path of the wallpaper generated for `track_name` in `folder`.
pub fn wallpaper_path(folder: &Path, track_name: &str) -> std::io::Result<PathBuf> {
    std::path::absolute(folder.join(utils::wallpaper_file_name(track_name)))
}

/// Fetches the cover of `track`, composes the wallpaper and writes it as PNG.
///
/// Uses the first album image, which Spotify lists as the largest. Returns the
/// absolute path of the written file; an existing file with the same name is
/// overwritten.
pub async fn create_album_wallpaper(
    client: &Client,
    track: &Track,
    settings: &Settings,
) -> Res<PathBuf> {
    let album_image = track
        .album
        .images
        .first()
        .ok_or_else(|| WallpaperError::MissingAlbumImage(track.name.clone()))?;

    let art = image_from_url(client, &album_image.url).await?.to_rgb8();
    let declared = (
        album_image.width.unwrap_or(art.width()),
        album_image.height.unwrap_or(art.height()),
    );

    let wallpaper = compose_wallpaper(&art, declared, settings)?;

    let path = wallpaper_path(&settings.folder, &track.name)?;
    wallpaper.save_with_format(&path, ImageFormat::Png)?;

    Ok(path)
}

/// Creates one wallpaper per track, in order, stopping at the first failure.
///
/// Files written before a failure stay on disk.
pub async fn create_album_wallpapers(
    client: &Client,
    tracks: &[Track],
    settings: &Settings,
    pb: &ProgressBar,
) -> Res<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(tracks.len());

    for track in tracks {
        pb.set_message(track.name.clone());
        let path = create_album_wallpaper(client, track, settings)
            .await
            .map_err(|e| format!("Failed to create wallpaper for '{}': {}", track.name, e))?;
        paths.push(path);
        pb.inc(1);
    }

    Ok(paths)
}
