use reqwest::Client;

use crate::{
    config,
    error::Result,
    spotify::{
        CatalogApi,
        auth::{self, Credentials},
    },
    types::{AudioFeaturesRecord, AudioFeaturesResponse, PlaylistResponse, TokenResponse, TracksPage},
};

/// Spotify Web API client backed by a shared reqwest connection pool.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
    credentials: Credentials,
}

impl SpotifyClient {
    pub fn new(api_url: String, token_url: String, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            api_url,
            token_url,
            credentials,
        }
    }

    /// Builds a client from the environment, see [`crate::config`].
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials {
            client_id: config::spotify_client_id()?,
            client_secret: config::spotify_client_secret()?,
        };
        Ok(Self::new(
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
            credentials,
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl CatalogApi for SpotifyClient {
    async fn fetch_token(&self) -> Result<TokenResponse> {
        auth::request_access_token(&self.http, &self.token_url, &self.credentials).await
    }

    async fn fetch_playlist(&self, token: &str, playlist_id: &str) -> Result<PlaylistResponse> {
        let api_url = format!(
            "{uri}/playlists/{id}",
            uri = self.api_url,
            id = playlist_id
        );

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<PlaylistResponse>().await?)
    }

    async fn fetch_playlist_page(&self, token: &str, page_url: &str) -> Result<TracksPage> {
        let response = self
            .http
            .get(page_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<TracksPage>().await?)
    }

    async fn fetch_audio_features(
        &self,
        token: &str,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeaturesRecord>>> {
        let api_url = format!("{uri}/audio-features", uri = self.api_url);

        let response = self
            .http
            .get(&api_url)
            .query(&[("ids", ids.join(","))])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<AudioFeaturesResponse>().await?;
        Ok(json.into_records())
    }
}
