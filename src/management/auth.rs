use chrono::Utc;

use crate::{
    error::{AnalysisError, Result},
    spotify::CatalogApi,
    types::TokenResponse,
};

/// Seconds before the nominal expiry at which a token is treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Bearer token together with the moment it was obtained.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl AccessToken {
    pub fn new(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            obtained_at: now(),
        }
    }

    /// The bearer token, as long as its lifetime has not passed.
    pub fn token(&self) -> Result<&str> {
        if now() >= self.obtained_at + self.expires_in {
            return Err(AnalysisError::TokenExpired);
        }
        Ok(&self.access_token)
    }

    /// True once the token is within the expiry margin of its lifetime.
    pub fn is_expired(&self) -> bool {
        now() + EXPIRY_MARGIN_SECS >= self.obtained_at + self.expires_in
    }
}

/// Keeps a client credentials token and renews it once it is about to expire.
pub struct TokenManager {
    token: AccessToken,
}

impl TokenManager {
    pub fn new(token: AccessToken) -> Self {
        TokenManager { token }
    }

    /// Requests a fresh token from the catalog.
    pub async fn request<C: CatalogApi>(client: &C) -> Result<Self> {
        let response = client.fetch_token().await?;
        Ok(Self::new(AccessToken::new(response)))
    }

    /// Returns a token that is valid for at least the expiry margin,
    /// requesting a new one first when necessary.
    pub async fn get_valid_token<C: CatalogApi>(&mut self, client: &C) -> Result<String> {
        if self.token.is_expired() {
            self.token = AccessToken::new(client.fetch_token().await?);
        }

        Ok(self.token.token()?.to_string())
    }

    pub fn current_token(&self) -> &AccessToken {
        &self.token
    }
}

fn now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
