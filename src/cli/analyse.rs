use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    error::Result,
    info,
    management::TokenManager,
    model::Playlist,
    report::{self, FileOutput},
    spotify::{
        CatalogApi,
        features::pull_audio_features,
        playlist::pull_playlist,
    },
    stats::PlaylistAnalysis,
    success, warning,
};

/// Where and how much of each report is shown.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Print the report body to stdout.
    pub verbose: bool,
    /// Report depth, 0 to 2.
    pub depth: u8,
    /// Directory the reports are written to, if any.
    pub file_output: Option<FileOutput>,
}

/// Analyses every playlist id in turn.
///
/// A playlist that cannot be fetched or analysed is reported and skipped; the
/// remaining ids are still processed. Returns the number of playlists that
/// were analysed successfully.
pub async fn analyse<C: CatalogApi>(client: &C, ids: &[String], options: &OutputOptions) -> usize {
    let started = Instant::now();

    let mut token_mgr = match TokenManager::request(client).await {
        Ok(mgr) => mgr,
        Err(e) => {
            warning!("Cannot authenticate with Spotify: {}", e);
            return 0;
        }
    };

    let mut analysed = 0;
    for id in ids {
        match analyse_playlist(client, &mut token_mgr, id, options).await {
            Ok(()) => analysed += 1,
            Err(e) => warning!("Failed to analyse playlist {}: {}", id, e),
        }
    }

    if options.verbose {
        info!(
            "Analysed {} of {} playlist(s) in {:.2?}",
            analysed,
            ids.len(),
            started.elapsed()
        );
    }
    analysed
}

/// Fetches, aggregates and reports a single playlist.
pub async fn analyse_playlist<C: CatalogApi>(
    client: &C,
    token_mgr: &mut TokenManager,
    playlist_id: &str,
    options: &OutputOptions,
) -> Res<()> {
    let pb = spinner(format!("Fetching playlist {}...", playlist_id));
    let fetched = fetch_playlist(client, token_mgr, playlist_id, &pb).await;
    pb.finish_and_clear();
    let (playlist, populated) = fetched?;

    if populated < playlist.len() {
        warning!(
            "{} of {} tracks in \"{}\" have no audio features",
            playlist.len() - populated,
            playlist.len(),
            playlist.name
        );
    }

    let analysis = PlaylistAnalysis::new(&playlist);
    let rendered = report::render(&analysis, options.depth)?;

    if options.verbose {
        println!("{}", rendered);
    }

    if let Some(output) = &options.file_output {
        let path = output.write(&playlist.name, &rendered).await?;
        success!("Report for \"{}\" written to {}", playlist.name, path.display());
    }

    Ok(())
}

/// Pulls every page of the playlist and merges the audio features of its
/// tracks. Returns the playlist and the number of tracks with features.
async fn fetch_playlist<C: CatalogApi>(
    client: &C,
    token_mgr: &mut TokenManager,
    playlist_id: &str,
    pb: &ProgressBar,
) -> Result<(Playlist, usize)> {
    let token = token_mgr.get_valid_token(client).await?;
    let mut playlist = pull_playlist(client, &token, playlist_id).await?;

    pb.set_message(format!(
        "Fetching audio features for {} tracks...",
        playlist.len()
    ));
    let token = token_mgr.get_valid_token(client).await?;
    let features = pull_audio_features(client, &token, &playlist.track_ids()).await?;
    let populated = playlist.populate_features(features);

    Ok((playlist, populated))
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
