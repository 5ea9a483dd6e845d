use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use crate::{Res, api, config::SpotifyConfig, types::PkceToken};

pub fn router(state: Arc<Mutex<Option<PkceToken>>>, config: SpotifyConfig) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(Arc::new(config)))
}

pub async fn start_api_server(
    state: Arc<Mutex<Option<PkceToken>>>,
    config: SpotifyConfig,
) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state, config)).await?;
    Ok(())
}
