use std::collections::BTreeMap;

use crate::{
    model::{AlbumType, Track},
    utils::PITCH_CLASSES,
};

/// Count of tracks per category, kept in category insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    entries: Vec<(String, usize)>,
}

impl Breakdown {
    /// Creates a breakdown over a fixed category space, every count at zero.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: categories.into_iter().map(|c| (c.into(), 0)).collect(),
        }
    }

    /// Adds one track to `category`, appending the category when it is new.
    pub fn increment(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, count)| (c.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tracks counted over all categories.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Category with the strictly greatest count; the earliest category wins ties.
    /// `None` while no track has been counted.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (category, count) in self.iter() {
            if count > 0 && best.is_none_or(|(_, max)| count > max) {
                best = Some((category, count));
            }
        }
        best
    }
}

pub(crate) fn album_type_breakdown(tracks: &[Track]) -> Breakdown {
    let mut breakdown = Breakdown::with_categories(AlbumType::ALL.iter().map(AlbumType::as_str));
    for album_type in tracks.iter().filter_map(|t| t.album.album_type) {
        breakdown.increment(album_type.as_str());
    }
    breakdown
}

/// Decades derived from the first four characters of the release date,
/// ascending. Dates without a leading year are not counted.
pub(crate) fn decade_breakdown(tracks: &[Track]) -> Breakdown {
    let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
    for track in tracks {
        let Some(year) = track
            .release_date()
            .get(0..4)
            .and_then(|y| y.parse::<i32>().ok())
        else {
            continue;
        };
        *decades.entry(year / 10 * 10).or_insert(0) += 1;
    }

    Breakdown {
        entries: decades
            .into_iter()
            .map(|(decade, count)| (decade.to_string(), count))
            .collect(),
    }
}

pub(crate) fn key_breakdown(tracks: &[Track]) -> Breakdown {
    let mut breakdown = Breakdown::with_categories(PITCH_CLASSES);
    for features in tracks.iter().filter_map(Track::features) {
        if let Some(name) = usize::try_from(features.key)
            .ok()
            .and_then(|k| PITCH_CLASSES.get(k))
        {
            breakdown.increment(name);
        }
    }
    breakdown
}

pub(crate) fn mode_breakdown(tracks: &[Track]) -> Breakdown {
    let mut breakdown = Breakdown::with_categories(["Minor", "Major"]);
    for features in tracks.iter().filter_map(Track::features) {
        match features.mode {
            0 => breakdown.increment("Minor"),
            1 => breakdown.increment("Major"),
            _ => {}
        }
    }
    breakdown
}

/// Time signatures in the order they are first seen.
pub(crate) fn time_signature_breakdown(tracks: &[Track]) -> Breakdown {
    let mut breakdown = Breakdown::default();
    for features in tracks.iter().filter_map(Track::features) {
        breakdown.increment(&features.time_signature.to_string());
    }
    breakdown
}
