//! Spotify Playlist Analysis Library
//!
//! This library fetches a Spotify playlist together with the audio features of
//! its tracks and computes descriptive statistics over them: feature extremes
//! and averages, categorical breakdowns, popularity rankings and derived
//! classifications. The results are rendered as a plain text report.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by acquisition and statistics
//! - `management` - Access token lifetime management
//! - `model` - Playlist and track domain model
//! - `report` - Report rendering and file output
//! - `spotify` - Spotify Web API client and acquisition protocols
//! - `stats` - Lazily computed playlist statistics
//! - `types` - Wire types and table rows
//! - `utils` - Display conversions and helpers
//!
//! # Example
//!
//! ```
//! use sporlyze::{cli, config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> sporlyze::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::from_env()?;
//!     cli::analyse(&client, &["37i9dQZF1DXcBWIGoYBM5M".to_string()], &Default::default()).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod model;
pub mod report;
pub mod spotify;
pub mod stats;
pub mod types;
pub mod utils;

/// Boxed error alias for the application glue in `cli` and `main`.
///
/// Library code returns [`error::Result`]; the CLI layer mixes those errors
/// with I/O and configuration failures and only needs to display them.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Analysed {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with code 1.
///
/// Only for fatal errors in `main`; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a playlist that failed while the
/// remaining playlists are still analysed.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
