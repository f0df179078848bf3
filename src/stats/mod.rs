//! # Statistics Engine
//!
//! [`PlaylistAnalysis`] computes the descriptive statistics of a fully
//! populated [`Playlist`]: feature extremes and averages, categorical
//! breakdowns, popularity rankings and the instrumental / spoken word
//! classifications.
//!
//! The analysis borrows the playlist immutably, so the playlist cannot change
//! once the first table has been read. Each table is computed on first access
//! and cached for the lifetime of the analysis; later calls return the cached
//! value without scanning the tracks again.
//!
//! Every accessor fails with [`AnalysisError::EmptyCollection`] when the
//! playlist holds no tracks.
//!
//! Ordering rules follow the playlist's track order (first insertion):
//! - min/max ties keep the first track encountered
//! - "most common" ties keep the first category of the breakdown
//! - popularity rankings use a stable sort

mod breakdown;
mod ranking;
mod table;

use std::cell::{Cell, OnceCell};

pub use breakdown::Breakdown;
pub use ranking::{INSTRUMENTAL_THRESHOLD, RANKING_SIZE, SPOKEN_WORD_THRESHOLD};
pub use table::{Extreme, FeatureTable, MinMax};

use crate::{
    error::{AnalysisError, Result},
    model::{Feature, Playlist, Track},
};

pub struct PlaylistAnalysis<'a> {
    playlist: &'a Playlist,
    scans: Cell<usize>,
    min_max: OnceCell<FeatureTable<MinMax>>,
    averages: OnceCell<FeatureTable<f64>>,
    album_types: OnceCell<Breakdown>,
    decades: OnceCell<Breakdown>,
    keys: OnceCell<Breakdown>,
    modes: OnceCell<Breakdown>,
    time_signatures: OnceCell<Breakdown>,
    oldest_newest: OnceCell<Option<(&'a Track, &'a Track)>>,
    most_popular: OnceCell<Vec<&'a Track>>,
    least_popular: OnceCell<Vec<&'a Track>>,
    instrumental: OnceCell<Vec<&'a Track>>,
    spoken_word: OnceCell<Vec<&'a Track>>,
}

impl<'a> PlaylistAnalysis<'a> {
    pub fn new(playlist: &'a Playlist) -> Self {
        Self {
            playlist,
            scans: Cell::new(0),
            min_max: OnceCell::new(),
            averages: OnceCell::new(),
            album_types: OnceCell::new(),
            decades: OnceCell::new(),
            keys: OnceCell::new(),
            modes: OnceCell::new(),
            time_signatures: OnceCell::new(),
            oldest_newest: OnceCell::new(),
            most_popular: OnceCell::new(),
            least_popular: OnceCell::new(),
            instrumental: OnceCell::new(),
            spoken_word: OnceCell::new(),
        }
    }

    pub fn playlist(&self) -> &'a Playlist {
        self.playlist
    }

    /// Number of tracks the statistics are computed over.
    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }

    /// Number of passes over the tracks performed so far.
    pub fn scan_count(&self) -> usize {
        self.scans.get()
    }

    pub fn min_max(&self) -> Result<&FeatureTable<MinMax>> {
        self.cached(&self.min_max, table::find_min_max)
    }

    pub fn averages(&self) -> Result<&FeatureTable<f64>> {
        self.cached(&self.averages, table::find_averages)
    }

    /// Average track duration in whole milliseconds.
    pub fn average_duration_ms(&self) -> Result<u64> {
        Ok(*self.averages()?.get(Feature::DurationMs) as u64)
    }

    pub fn album_type_breakdown(&self) -> Result<&Breakdown> {
        self.cached(&self.album_types, breakdown::album_type_breakdown)
    }

    pub fn decade_breakdown(&self) -> Result<&Breakdown> {
        self.cached(&self.decades, breakdown::decade_breakdown)
    }

    pub fn key_breakdown(&self) -> Result<&Breakdown> {
        self.cached(&self.keys, breakdown::key_breakdown)
    }

    pub fn mode_breakdown(&self) -> Result<&Breakdown> {
        self.cached(&self.modes, breakdown::mode_breakdown)
    }

    pub fn time_signature_breakdown(&self) -> Result<&Breakdown> {
        self.cached(&self.time_signatures, breakdown::time_signature_breakdown)
    }

    pub fn oldest_track(&self) -> Result<&'a Track> {
        Ok(self.oldest_and_newest()?.0)
    }

    pub fn newest_track(&self) -> Result<&'a Track> {
        Ok(self.oldest_and_newest()?.1)
    }

    /// Up to [`RANKING_SIZE`] tracks, most popular first.
    pub fn most_popular(&self) -> Result<&[&'a Track]> {
        self.cached(&self.most_popular, ranking::most_popular)
            .map(Vec::as_slice)
    }

    /// Up to [`RANKING_SIZE`] tracks, least popular first.
    pub fn least_popular(&self) -> Result<&[&'a Track]> {
        self.cached(&self.least_popular, ranking::least_popular)
            .map(Vec::as_slice)
    }

    pub fn instrumental_tracks(&self) -> Result<&[&'a Track]> {
        self.cached(&self.instrumental, ranking::instrumental_tracks)
            .map(Vec::as_slice)
    }

    pub fn spoken_word_tracks(&self) -> Result<&[&'a Track]> {
        self.cached(&self.spoken_word, ranking::spoken_word_tracks)
            .map(Vec::as_slice)
    }

    fn oldest_and_newest(&self) -> Result<(&'a Track, &'a Track)> {
        let pair = self.cached(&self.oldest_newest, ranking::oldest_and_newest)?;
        (*pair).ok_or_else(|| self.empty_collection())
    }

    fn cached<'s, T>(
        &'s self,
        cell: &'s OnceCell<T>,
        compute: impl FnOnce(&'a [Track]) -> T,
    ) -> Result<&'s T> {
        self.ensure_tracks()?;
        Ok(cell.get_or_init(|| {
            self.scans.set(self.scans.get() + 1);
            compute(self.playlist.tracks())
        }))
    }

    fn ensure_tracks(&self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(self.empty_collection());
        }
        Ok(())
    }

    fn empty_collection(&self) -> AnalysisError {
        AnalysisError::EmptyCollection {
            playlist: self.playlist.id.clone(),
        }
    }
}
