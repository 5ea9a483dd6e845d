use std::path::Path;

use crate::errors::WallpaperError;

/// Sets the desktop background to `path` and applies it immediately.
///
/// Calls `SystemParametersInfoW(SPI_SETDESKWALLPAPER, ...)`, persisting the
/// change to the user profile and broadcasting it to running applications. A
/// failed call is returned with the last OS error.
#[cfg(windows)]
pub fn set_wallpaper(path: &Path) -> Result<(), WallpaperError> {
    use std::{iter::once, os::windows::ffi::OsStrExt};

    use winapi::{
        ctypes::c_void,
        um::winuser::{
            SPI_SETDESKWALLPAPER, SPIF_SENDWININICHANGE, SPIF_UPDATEINIFILE,
            SystemParametersInfoW,
        },
    };

    let absolute = std::path::absolute(path).map_err(|source| WallpaperError::SetWallpaper {
        path: path.to_path_buf(),
        source,
    })?;

    // NUL-terminated UTF-16
    let mut wide: Vec<u16> = absolute
        .as_os_str()
        .encode_wide()
        .chain(once(0))
        .collect();

    let ok = unsafe {
        SystemParametersInfoW(
            SPI_SETDESKWALLPAPER,
            0,
            wide.as_mut_ptr() as *mut c_void,
            SPIF_UPDATEINIFILE | SPIF_SENDWININICHANGE,
        )
    };

    if ok == 0 {
        return Err(WallpaperError::SetWallpaper {
            path: absolute,
            source: std::io::Error::last_os_error(),
        });
    }

    Ok(())
}

#[cfg(not(windows))]
pub fn set_wallpaper(_path: &Path) -> Result<(), WallpaperError> {
    Err(WallpaperError::UnsupportedPlatform(std::env::consts::OS))
}
