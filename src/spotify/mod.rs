//! # Spotify Integration Module
//!
//! This module is the integration layer between sporlyze and the Spotify Web
//! API. It owns the HTTP client, the client credentials authentication and the
//! two acquisition protocols the analysis depends on.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (analyse command)
//!          ↓
//! Acquisition Layer
//!     ├── Paginator      (playlist pages, follows `next` until exhausted)
//!     └── Batch Fetcher  (audio features, at most 100 ids per request)
//!          ↓
//! CatalogApi trait ── SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Client credentials grant against the accounts service
//! - [`client`] - [`SpotifyClient`], the reqwest implementation of [`CatalogApi`]
//! - [`features`] - Batched audio feature retrieval under the 100-id ceiling
//! - [`playlist`] - Playlist retrieval and cursor pagination
//!
//! The acquisition functions are generic over [`CatalogApi`] so they can run
//! against an in-memory catalog in tests.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials token
//! - `GET /playlists/{id}` - Playlist metadata and first page of tracks
//! - `GET {next}` - Subsequent pages of playlist tracks
//! - `GET /audio-features?ids=...` - Audio features for up to 100 tracks
//!
//! ## Error Handling
//!
//! Every non-success status is returned as [`AnalysisError::Transport`]. Nothing
//! is retried: a failed request aborts the analysis of the current playlist.
//!
//! [`AnalysisError::Transport`]: crate::error::AnalysisError::Transport

pub mod auth;
pub mod client;
pub mod features;
pub mod playlist;

pub use client::SpotifyClient;

use crate::{
    error::Result,
    types::{AudioFeaturesRecord, PlaylistResponse, TokenResponse, TracksPage},
};

/// Operations the analysis needs from the music catalog.
///
/// Implementations must return an error for any non-success response.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// Exchanges the configured credentials for a bearer token.
    async fn fetch_token(&self) -> Result<TokenResponse>;

    /// Fetches playlist metadata together with its first page of tracks.
    async fn fetch_playlist(&self, token: &str, playlist_id: &str) -> Result<PlaylistResponse>;

    /// Fetches the page of playlist tracks behind a `next` cursor.
    async fn fetch_playlist_page(&self, token: &str, page_url: &str) -> Result<TracksPage>;

    /// Fetches audio features for at most 100 ids.
    ///
    /// Entries the catalog cannot match come back as `None` in their position.
    async fn fetch_audio_features(
        &self,
        token: &str,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeaturesRecord>>>;
}
