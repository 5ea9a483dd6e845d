#![allow(dead_code)]

use std::io::Cursor;

use axum::Router;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use spotpaper::types::{Album, AlbumImage, Track};

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn png_bytes(image: RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

pub fn track(name: &str, url: &str, width: u32, height: u32) -> Track {
    Track {
        id: None,
        name: name.to_string(),
        album: Album {
            name: "Album".to_string(),
            images: vec![AlbumImage {
                url: url.to_string(),
                width: Some(width),
                height: Some(height),
            }],
        },
    }
}
