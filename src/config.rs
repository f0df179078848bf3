//! Configuration management for sporlyze.
//!
//! Configuration values are read from environment variables. Before the first
//! lookup, [`load_env`] merges a `.env` file from the platform specific local
//! data directory into the process environment, so credentials do not have to
//! be exported in every shell.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults for the API endpoints

use std::{env, path::PathBuf};

use crate::error::{AnalysisError, Result};

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The directory is created when it does not exist yet. A missing `.env` file
/// is not an error since every value can also come from the environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporlyze/.env`
/// - macOS: `~/Library/Application Support/sporlyze/.env`
/// - Windows: `%LOCALAPPDATA%/sporlyze/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlyze/.env");
    path
}

/// Returns the Spotify API client ID used for the client credentials grant.
///
/// # Errors
///
/// Fails with [`AnalysisError::Config`] if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret used for the client credentials grant.
///
/// The secret should never be written to logs or reports.
///
/// # Errors
///
/// Fails with [`AnalysisError::Config`] if `SPOTIFY_API_AUTH_CLIENT_SECRET` is not set.
pub fn spotify_client_secret() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Returns the Spotify token endpoint, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AnalysisError::Config(format!("{name} must be set"))),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
