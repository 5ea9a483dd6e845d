use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::Settings, spotify, types::PkceToken};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>, settings: &Settings) {
    spotify::auth::auth(shared_state, &settings.spotify).await;
}
