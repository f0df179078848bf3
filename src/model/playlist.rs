use std::collections::HashMap;

use crate::{
    model::Track,
    types::{AudioFeaturesRecord, PlaylistResponse, TracksPage},
};

const UNKNOWN_OWNER: &str = "Unknown";

/// A playlist and the tracks gathered from its pages.
///
/// Tracks are held in first-insertion order. Re-inserting an id replaces the
/// stored track in place, so iteration order is stable across pages and every
/// tie-break in the statistics is reproducible.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub followers: u64,
    /// Track count declared by the catalog. May exceed [`Playlist::len`]
    /// because malformed entries are dropped on ingestion.
    pub total_tracks: u64,
    pub collaborative: bool,
    pub public: bool,
    next: Option<String>,
    tracks: Vec<Track>,
    index: HashMap<String, usize>,
}

impl Playlist {
    /// Creates the playlist from the first catalog response and ingests its first page.
    pub fn from_response(response: PlaylistResponse) -> Self {
        let owner = response
            .owner
            .and_then(|o| o.display_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string());

        let mut playlist = Self {
            id: response.id,
            name: response.name,
            description: response.description.unwrap_or_default(),
            owner,
            followers: response.followers.and_then(|f| f.total).unwrap_or(0),
            total_tracks: response.tracks.total.unwrap_or(0),
            collaborative: response.collaborative.unwrap_or(false),
            public: response.public.unwrap_or(false),
            next: None,
            tracks: Vec::new(),
            index: HashMap::new(),
        };

        playlist.add_tracks(response.tracks);
        playlist
    }

    /// Ingests one page of playlist items and moves the cursor to the page's `next`.
    ///
    /// Items without a track object, id or name are skipped.
    pub fn add_tracks(&mut self, page: TracksPage) {
        for item in page.items {
            if let Some(track) = item.track.and_then(Track::from_object) {
                self.insert_track(track);
            }
        }
        self.next = page.next.filter(|url| !url.is_empty());
    }

    pub fn insert_track(&mut self, track: Track) {
        match self.index.get(&track.id) {
            Some(&slot) => self.tracks[slot] = track,
            None => {
                self.index.insert(track.id.clone(), self.tracks.len());
                self.tracks.push(track);
            }
        }
    }

    /// URL of the next page of tracks, `None` once every page has been ingested.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn get_track(&self, track_id: &str) -> Option<&Track> {
        if track_id.is_empty() {
            return None;
        }
        self.index.get(track_id).map(|&slot| &self.tracks[slot])
    }

    pub fn get_track_mut(&mut self, track_id: &str) -> Option<&mut Track> {
        let slot = *self.index.get(track_id)?;
        self.tracks.get_mut(slot)
    }

    pub fn track_ids(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.id.clone()).collect()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Merges fetched audio feature records into the matching tracks.
    ///
    /// `None` records and records for ids the playlist does not hold are
    /// skipped. Returns the number of tracks that received features.
    pub fn populate_features<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Option<AudioFeaturesRecord>>,
    {
        let mut populated = 0;
        for record in records.into_iter().flatten() {
            if let Some(track) = self.get_track_mut(&record.id) {
                track.populate_features(record.features);
                populated += 1;
            }
        }
        populated
    }

    pub fn total_explicit_tracks(&self) -> usize {
        self.tracks.iter().filter(|t| t.explicit).count()
    }

    pub fn visibility(&self) -> &'static str {
        if self.public { "Public" } else { "Private" }
    }

    pub fn collaborative_label(&self) -> &'static str {
        if self.collaborative { "Yes" } else { "No" }
    }
}
