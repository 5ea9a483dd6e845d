use tabled::Table;

use crate::{config::Settings, error, types::WallpaperTableRow, wallpaper, warning};

pub async fn list(settings: &Settings) {
    let paths = match wallpaper::get_wallpaper_paths(settings) {
        Ok(paths) => paths,
        Err(e) => error!(
            "Cannot list wallpapers in {}: {}",
            settings.folder.display(),
            e
        ),
    };

    if paths.is_empty() {
        warning!(
            "No wallpapers in {}. Run spotpaper generate first.",
            settings.folder.display()
        );
        return;
    }

    let table_rows: Vec<WallpaperTableRow> = paths
        .iter()
        .map(|path| WallpaperTableRow {
            name: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size: match image::image_dimensions(path) {
                Ok((w, h)) => format!("{}x{}", w, h),
                Err(_) => "?".to_string(),
            },
            path: path.display().to_string(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
