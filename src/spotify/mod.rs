//! # Spotify Integration Module
//!
//! The thin layer between spotpaper and the Spotify Web API. It covers the two
//! things the wallpaper pipeline needs from Spotify: an access token and the
//! list of tracks whose covers become wallpapers.
//!
//! ```text
//! CLI Layer
//!     ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     └── Tracks (saved tracks of the current user)
//!     ↓
//! HTTP Layer (reqwest, JSON)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the Authorization Code flow with PKCE: a random code
//! verifier, its SHA-256 challenge, a local callback server receiving the
//! authorization code and the final code-for-token exchange. Tokens are cached
//! by [`crate::management::TokenManager`] and refreshed shortly before expiry.
//!
//! ## Tracks
//!
//! [`tracks`] reads `GET /me/tracks` with the `limit`/`offset` bounds from the
//! settings. Requests are sent one at a time and errors are not retried.
//!
//! ## API Coverage
//!
//! - `GET /me/tracks` - Saved tracks of the current user
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Types
//!
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Authentication and token management errors

pub mod auth;
pub mod tracks;
