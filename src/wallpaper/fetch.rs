use image::DynamicImage;
use reqwest::Client;

use crate::Res;

/// Downloads an image and decodes it into memory.
///
/// The format is guessed from the bytes, not from the content type. Non-2xx
/// responses and undecodable bodies are returned as errors. No retry and no
/// timeout: an unreachable host blocks the run until the OS gives up.
pub async fn image_from_url(client: &Client, url: &str) -> Res<DynamicImage> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    Ok(image::load_from_memory(&bytes)?)
}
