use crate::model::Track;

/// Number of tracks in the most and least popular lists.
pub const RANKING_SIZE: usize = 10;
/// Instrumentalness at or above which the catalog considers a track instrumental.
pub const INSTRUMENTAL_THRESHOLD: f64 = 0.5;
/// Speechiness at or above which the catalog considers a track spoken word.
pub const SPOKEN_WORD_THRESHOLD: f64 = 0.66;

/// Oldest and newest track by raw release date string.
///
/// The comparison is lexicographic, so a year-only date sorts before full
/// dates of the same year.
pub(crate) fn oldest_and_newest(tracks: &[Track]) -> Option<(&Track, &Track)> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by(|a, b| a.release_date().cmp(b.release_date()));
    Some((*sorted.first()?, *sorted.last()?))
}

pub(crate) fn most_popular(tracks: &[Track]) -> Vec<&Track> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    sorted.truncate(RANKING_SIZE);
    sorted
}

pub(crate) fn least_popular(tracks: &[Track]) -> Vec<&Track> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by(|a, b| a.popularity.cmp(&b.popularity));
    sorted.truncate(RANKING_SIZE);
    sorted
}

pub(crate) fn instrumental_tracks(tracks: &[Track]) -> Vec<&Track> {
    tracks
        .iter()
        .filter(|t| {
            t.features()
                .is_some_and(|f| f.instrumentalness >= INSTRUMENTAL_THRESHOLD)
        })
        .collect()
}

pub(crate) fn spoken_word_tracks(tracks: &[Track]) -> Vec<&Track> {
    tracks
        .iter()
        .filter(|t| {
            t.features()
                .is_some_and(|f| f.speechiness >= SPOKEN_WORD_THRESHOLD)
        })
        .collect()
}
