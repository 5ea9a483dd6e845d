use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config::SpotifyConfig,
    error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// How long `auth` waits for the browser to come back to the callback.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(60);

/// Initiates the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// This function orchestrates the entire authentication process:
/// 1. Generating PKCE code verifier and challenge
/// 2. Starting the local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback
/// 5. Persisting the obtained token for future runs
///
/// # Arguments
///
/// * `shared_state` - Shared state between this flow and the callback handler,
///   holding the code verifier and, once the exchange succeeded, the token
/// * `config` - Spotify endpoints and client settings
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - A missing client id, token persistence failures and timeouts terminate
///   the program with an error
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>, config: &SpotifyConfig) {
    let client_id = match config.client_id() {
        Ok(id) => id.to_string(),
        Err(e) => error!("Cannot start authentication: {}", e),
    };

    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // start API server
    let server_state = Arc::clone(&shared_state);
    let server_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state, server_config).await {
            error!("Failed to start callback server: {}", e);
        }
    });

    let auth_url = utils::build_authorize_url(
        &config.auth_url,
        &client_id,
        &config.redirect_uri,
        &code_challenge,
        &config.scope,
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state, CALLBACK_TIMEOUT).await {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state once per second until the callback handler stored a
/// token or `max_wait` elapsed.
pub async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceToken>>>,
    max_wait: Duration,
) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    loop {
        {
            let lock = shared_state.lock().await;
            if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.as_ref()) {
                return Some(token.clone());
            }
        }

        if start.elapsed() >= max_wait {
            return None;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may rotate the refresh token; when the response carries none the
/// returned token has an empty `refresh_token` and the caller keeps the old one.
pub async fn refresh_token(config: &SpotifyConfig, refresh_token: &str) -> Result<Token, String> {
    let client_id = config.client_id().map_err(|e| e.to_string())?;

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;
    Ok(into_token(json))
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// The code verifier proves that the client completing the flow is the one
/// that started it; it must match the challenge sent in the authorize request.
pub async fn exchange_code_pkce(
    config: &SpotifyConfig,
    code: &str,
    verifier: &str,
) -> Result<Token, String> {
    let client_id = config.client_id().map_err(|e| e.to_string())?;

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;
    Ok(into_token(json))
}

fn into_token(response: TokenResponse) -> Token {
    Token {
        access_token: response.access_token,
        refresh_token: response.refresh_token.unwrap_or_default(),
        scope: response.scope.unwrap_or_default(),
        expires_in: response.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    }
}
