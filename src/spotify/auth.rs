use reqwest::Client;

use crate::{error::Result, types::TokenResponse};

/// Credentials of a registered Spotify application.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Requests an access token using the OAuth 2.0 client credentials grant.
///
/// The resulting token grants access to public catalog data only, which is
/// all the playlist analysis needs. Playlists must therefore be public or
/// shared by link.
///
/// # Arguments
///
/// * `client` - HTTP client to send the request with
/// * `token_url` - Spotify accounts token endpoint
/// * `credentials` - Client id and secret of the registered application
///
/// # Errors
///
/// Returns [`crate::error::AnalysisError::Transport`] on network failures,
/// on a non-success status (e.g. invalid credentials) and when the body is not
/// a token response.
///
/// # Example
///
/// ```
/// let token = request_access_token(&Client::new(), &config::spotify_apitoken_url(), &credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_access_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse> {
    let res = client
        .post(token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(res.json::<TokenResponse>().await?)
}
