use std::collections::HashSet;

/// Display names of the twelve pitch classes, indexed by pitch class.
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E/F♭", "E♯/F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

/// Splits the comma separated playlist id argument.
///
/// Surrounding whitespace and blank entries are dropped, and an id given twice
/// is only analysed once.
pub fn parse_playlist_ids(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(str::to_string)
        .collect()
}

pub fn convert_key(key: i32) -> &'static str {
    usize::try_from(key)
        .ok()
        .and_then(|k| PITCH_CLASSES.get(k).copied())
        .unwrap_or("No Key found.")
}

pub fn convert_mode(mode: i32) -> &'static str {
    if mode == 0 { "Minor" } else { "Major" }
}

/// Formats milliseconds as `mm:ss`, or `h:mm:ss` from one hour on.
pub fn convert_duration_ms(duration_ms: u64) -> String {
    let seconds = duration_ms / 1000;
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;

    if minutes >= 60 {
        let hours = minutes / 60;
        return format!("{}:{:02}:{:02}", hours, minutes % 60, remaining_seconds);
    }
    format!("{:02}:{:02}", minutes, remaining_seconds)
}

pub fn convert_time_signature(time_signature: impl std::fmt::Display) -> String {
    format!("{}/4", time_signature)
}

pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

/// Share of `count` in `total` as a percentage rounded to two decimals.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64 * 100.0, 2)
}

/// File name of the report written for a playlist, without extension.
pub fn report_file_name(playlist_name: &str) -> String {
    format!(
        "{}_analysis",
        playlist_name.replace(' ', "_").replace('/', "-")
    )
}
