//! # API Module
//!
//! HTTP endpoints served by the local server that runs while `spotpaper auth`
//! waits for Spotify to redirect the browser back.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code and exchanges it, together
//!   with the PKCE code verifier, for an access token.
//! - [`health`] - Returns status and version, handy to check the server is up
//!   before opening the browser by hand.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotpaper::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
