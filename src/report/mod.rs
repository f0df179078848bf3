//! # Report Assembler
//!
//! Renders a [`PlaylistAnalysis`] as plain text. The report is built from
//! sections whose inclusion depends on the requested depth:
//!
//! - depth 0: playlist information and track summary
//! - depth 1: additionally the in depth breakdown tables
//! - depth 2: additionally the raw audio feature table
//!
//! All unit conversions (milliseconds to `mm:ss`, pitch class names, time
//! signatures) happen here; the statistics engine only hands out numbers.

mod file_output;

pub use file_output::FileOutput;

use tabled::Table;

use crate::{
    error::Result,
    model::{Feature, Playlist, Track},
    stats::{Breakdown, Extreme, PlaylistAnalysis},
    types::{BreakdownTableRow, FeatureTableRow, RankingTableRow, ScoredTrackTableRow},
    utils::{self, convert_duration_ms, convert_time_signature, percentage},
};

pub const HEADER: &str = "----- PLAYLIST ANALYSIS -----\n";
pub const FOOTER: &str = "-----------------------------\n";

const HIGH_SCORE: f64 = 0.66;
const LOW_SCORE: f64 = 0.33;

/// Renders the full report for the given depth (0, 1 or 2).
pub fn render(analysis: &PlaylistAnalysis<'_>, depth: u8) -> Result<String> {
    let mut report = String::from(HEADER);
    report += &playlist_information(analysis.playlist());
    report += &track_summary(analysis)?;
    if depth > 0 {
        report += &in_depth_breakdown(analysis)?;
    }
    if depth > 1 {
        report += &audio_features_breakdown(analysis)?;
    }
    report += FOOTER;
    Ok(report)
}

pub fn playlist_information(playlist: &Playlist) -> String {
    format!(
        "Playlist: {name}
Description: {description}
Followers: {followers}
Total Tracks: {total}
Owner: {owner}
Collaborative: {collaborative}
Playlist Type: {visibility}

",
        name = playlist.name,
        description = playlist.description,
        followers = playlist.followers,
        total = playlist.total_tracks,
        owner = playlist.owner,
        collaborative = playlist.collaborative_label(),
        visibility = playlist.visibility(),
    )
}

pub fn track_summary(analysis: &PlaylistAnalysis<'_>) -> Result<String> {
    let playlist = analysis.playlist();
    let total = analysis.track_count();
    let min_max = analysis.min_max()?;
    let averages = analysis.averages()?;
    let explicit = playlist.total_explicit_tracks();
    let oldest = analysis.oldest_track()?;
    let newest = analysis.newest_track()?;

    let mut summary = format!(
        "--- TRACK SUMMARY ---
Total Playable Tracks: {total}
Total Tracks marked as Explicit: {explicit} ({explicit_share}%)

Oldest Track: {oldest}, Released: {oldest_date}
Newest Track: {newest}, Released: {newest_date}
",
        explicit_share = percentage(explicit, total),
        oldest = describe_track(oldest),
        oldest_date = oldest.release_date(),
        newest = describe_track(newest),
        newest_date = newest.release_date(),
    );

    let duration = min_max.get(Feature::DurationMs);
    summary += &format!(
        "
The Shortest Track in the playlist is: {} with a runtime of {}
The Longest Track in the playlist is: {} with a runtime of {}
The Average Track duration is: {}
",
        describe_extreme(playlist, &duration.min),
        format_value(Feature::DurationMs, duration.min.value),
        describe_extreme(playlist, &duration.max),
        format_value(Feature::DurationMs, duration.max.value),
        convert_duration_ms(analysis.average_duration_ms()?),
    );

    summary += "\n";
    summary += &most_common_line(
        "Most Tracks Are from the",
        analysis.decade_breakdown()?,
        total,
        |decade| format!("{decade}'s"),
    );
    summary += &most_common_line(
        "Most Tracks Are from the",
        analysis.album_type_breakdown()?,
        total,
        |album_type| format!("{} Release", title_case(album_type)),
    );
    summary += "\n";
    summary += &most_common_line(
        "The Most Common Key is:",
        analysis.key_breakdown()?,
        total,
        str::to_string,
    );
    summary += &most_common_line(
        "The Most Common Mode is:",
        analysis.mode_breakdown()?,
        total,
        str::to_string,
    );
    summary += &most_common_line(
        "The Most Common Time Signature is:",
        analysis.time_signature_breakdown()?,
        total,
        |ts| convert_time_signature(ts),
    );

    let loudness = min_max.get(Feature::Loudness);
    summary += &format!(
        "
The Quietest Track in the playlist is: {} with {} dB
The Loudest Track in the playlist is: {} with {} dB
The Average dB is: {} dB
",
        describe_extreme(playlist, &loudness.min),
        format_value(Feature::Loudness, loudness.min.value),
        describe_extreme(playlist, &loudness.max),
        format_value(Feature::Loudness, loudness.max.value),
        utils::round_to(*averages.get(Feature::Loudness), 2),
    );

    let tempo = min_max.get(Feature::Tempo);
    summary += &format!(
        "
The Track with the lowest tempo is: {} with {} BPM
The Track with the highest tempo is: {} with {} BPM
The Average Tempo is: {} BPM
",
        describe_extreme(playlist, &tempo.min),
        format_value(Feature::Tempo, tempo.min.value),
        describe_extreme(playlist, &tempo.max),
        format_value(Feature::Tempo, tempo.max.value),
        utils::round_to(*averages.get(Feature::Tempo), 2),
    );

    let valence = min_max.get(Feature::Valence);
    summary += &format!(
        "
The Vibe of the playlist is {}
The Least Positive Track in the playlist is: {} with a Valence score of {}%
The Most Positive Track in the playlist is: {} with a Valence score of {}%
",
        valence_verdict(*averages.get(Feature::Valence)),
        describe_extreme(playlist, &valence.min),
        as_percentage(valence.min.value),
        describe_extreme(playlist, &valence.max),
        as_percentage(valence.max.value),
    );

    let danceability = min_max.get(Feature::Danceability);
    summary += &format!(
        "
{}.
The Least Danceable Track in the playlist is: {} with a danceability score of {}%
The Most Danceable Track in the playlist is: {} with a danceability score of {}%
",
        danceability_verdict(*averages.get(Feature::Danceability)),
        describe_extreme(playlist, &danceability.min),
        as_percentage(danceability.min.value),
        describe_extreme(playlist, &danceability.max),
        as_percentage(danceability.max.value),
    );

    let energy = min_max.get(Feature::Energy);
    summary += &format!(
        "
{}.
The Lowest Energy Track in the playlist is: {} with an energy score of {}%
The Highest Energy Track in the playlist is: {} with an energy score of {}%

The playlist contains {} Instrumental tracks *
The playlist contains {} Spoken Word tracks *
",
        energy_verdict(*averages.get(Feature::Energy)),
        describe_extreme(playlist, &energy.min),
        as_percentage(energy.min.value),
        describe_extreme(playlist, &energy.max),
        as_percentage(energy.max.value),
        analysis.instrumental_tracks()?.len(),
        analysis.spoken_word_tracks()?.len(),
    );

    summary += "\nThe Most Popular Tracks in the playlist (according to spotify):\n";
    summary += &ranking_table(analysis.most_popular()?);
    summary += "\n\nThe Least Popular Tracks in the playlist (according to spotify) **:\n";
    summary += &ranking_table(analysis.least_popular()?);
    summary += "

*  Allegedly.
** If all have a score of zero, then list is in order of added to playlist.

";

    Ok(summary)
}

pub fn in_depth_breakdown(analysis: &PlaylistAnalysis<'_>) -> Result<String> {
    let total = analysis.track_count();
    let mut in_depth = String::from("--- IN DEPTH BREAKDOWNS ---\n");

    let sections: [(&str, &Breakdown, fn(&str) -> String); 5] = [
        ("Album Type", analysis.album_type_breakdown()?, title_case),
        ("Decade Release", analysis.decade_breakdown()?, str::to_string),
        ("Key", analysis.key_breakdown()?, str::to_string),
        ("Mode", analysis.mode_breakdown()?, str::to_string),
        (
            "Time Signature",
            analysis.time_signature_breakdown()?,
            |ts| convert_time_signature(ts),
        ),
    ];

    for (title, breakdown, label) in sections {
        in_depth += &format!("\n {title} Breakdown:\n");
        in_depth += &breakdown_table(breakdown, total, label);
        in_depth += "\n";
    }

    let instrumental = analysis.instrumental_tracks()?;
    if !instrumental.is_empty() {
        in_depth += "\nInstrumental Tracks: (*Spotify's instrumental score is often way off. Chances are half the tracks below won't be instrumental.)\n";
        in_depth += &scored_table(instrumental, |f| f.instrumentalness);
        in_depth += "\n";
    }

    let spoken_word = analysis.spoken_word_tracks()?;
    if !spoken_word.is_empty() {
        in_depth += "\nSpoken Word Tracks:\n";
        in_depth += &scored_table(spoken_word, |f| f.speechiness);
        in_depth += "\n";
    }

    in_depth += "\n";
    Ok(in_depth)
}

pub fn audio_features_breakdown(analysis: &PlaylistAnalysis<'_>) -> Result<String> {
    let playlist = analysis.playlist();
    let min_max = analysis.min_max()?;
    let averages = analysis.averages()?;

    let rows: Vec<FeatureTableRow> = min_max
        .iter()
        .map(|(feature, extremes)| FeatureTableRow {
            feature: feature.label().to_string(),
            minimum: format_value(feature, extremes.min.value),
            minimum_track: describe_extreme(playlist, &extremes.min),
            maximum: format_value(feature, extremes.max.value),
            maximum_track: describe_extreme(playlist, &extremes.max),
            average: format_value(feature, *averages.get(feature)),
        })
        .collect();

    Ok(format!(
        "--- RAW AUDIO FEATURES BREAKDOWN ---\n{}\n\n",
        Table::new(rows)
    ))
}

fn most_common_line(
    prefix: &str,
    breakdown: &Breakdown,
    total: usize,
    label: impl Fn(&str) -> String,
) -> String {
    match breakdown.most_common() {
        Some((category, count)) => format!(
            "{prefix} {} ({}%)\n",
            label(category),
            percentage(count, total)
        ),
        None => format!("{prefix} n/a\n"),
    }
}

fn breakdown_table(breakdown: &Breakdown, total: usize, label: fn(&str) -> String) -> String {
    let rows: Vec<BreakdownTableRow> = breakdown
        .iter()
        .map(|(category, count)| BreakdownTableRow {
            category: label(category),
            tracks: count,
            share: format!("{}%", percentage(count, total)),
        })
        .collect();
    Table::new(rows).to_string()
}

fn ranking_table(tracks: &[&Track]) -> String {
    let rows: Vec<RankingTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| RankingTableRow {
            position: i + 1,
            name: track.name.clone(),
            artist: track.primary_artist().to_string(),
            popularity: track.popularity,
        })
        .collect();
    Table::new(rows).to_string()
}

fn scored_table(
    tracks: &[&Track],
    score: impl Fn(&crate::model::AudioFeatures) -> f64,
) -> String {
    let rows: Vec<ScoredTrackTableRow> = tracks
        .iter()
        .map(|track| ScoredTrackTableRow {
            name: track.name.clone(),
            artist: track.primary_artist().to_string(),
            score: track.features().map(&score).unwrap_or_default(),
        })
        .collect();
    Table::new(rows).to_string()
}

fn describe_track(track: &Track) -> String {
    format!("\"{}\", by {}", track.name, track.primary_artist())
}

/// Describes the track owning an extreme value, `n/a` when no track holds one.
fn describe_extreme(playlist: &Playlist, extreme: &Extreme) -> String {
    extreme
        .track_id
        .as_deref()
        .and_then(|id| playlist.get_track(id))
        .map(|track| format!("{} (ID: {})", describe_track(track), track.id))
        .unwrap_or_else(|| "n/a".to_string())
}

fn format_value(feature: Feature, value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    match feature {
        Feature::DurationMs => convert_duration_ms(value.max(0.0) as u64),
        Feature::TimeSignature => convert_time_signature(value),
        _ => value.to_string(),
    }
}

fn as_percentage(score: f64) -> f64 {
    utils::round_to(score * 100.0, 2)
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn valence_verdict(average: f64) -> &'static str {
    if average > HIGH_SCORE {
        "Positive. The Valence of the playlist is high, and the majority of tracks could be described as Happy, Cheerful, or Euphoric"
    } else if average < LOW_SCORE {
        "Negative. The Valence of the playlist is low, and the majority of tracks could be described as Sad, Depressed, or Angry"
    } else {
        "Mixed. The Valence of the playlist is in the middle ground, and the tracks are likely a mix of both positive and negative."
    }
}

fn danceability_verdict(average: f64) -> &'static str {
    if average > HIGH_SCORE {
        "This playlist has a High danceability score. You can boogie to this playlist"
    } else if average < LOW_SCORE {
        "This playlist has a Low danceability score. You're gonna have a hard time dancing to this"
    } else {
        "This playlist has a Mid danceability score. You can dance to some of the tracks on this playlist, still, wouldn't recommend it for the local disco night"
    }
}

fn energy_verdict(average: f64) -> &'static str {
    if average > HIGH_SCORE {
        "The Energy of the playlist is High, might be good to use while going for a run... No promises"
    } else if average < LOW_SCORE {
        "The Energy of the playlist is Low, could be good to relax, sleep or study to"
    } else {
        "The Energy of the playlist is Mid, could contain a mix of high and low energy tracks"
    }
}
