//! Wire types of the Spotify Web API responses consumed by sporlyze.
//!
//! Track objects are decoded leniently: every field is optional so that a
//! single unavailable or local track cannot fail a whole page. Validation
//! happens when the object is turned into a [`crate::model::Track`].

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::model::AudioFeatures;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: Option<bool>,
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracksPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Option<Vec<ArtistObject>>,
    #[serde(default)]
    pub album: Option<AlbumObject>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub disc_number: Option<u32>,
    #[serde(default)]
    pub is_local: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Response of `GET /audio-features`. Entries are kept as raw JSON so that a
/// `null` or an incomplete record can be skipped without failing the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    #[serde(default)]
    pub audio_features: Vec<serde_json::Value>,
}

impl AudioFeaturesResponse {
    pub fn into_records(self) -> Vec<Option<AudioFeaturesRecord>> {
        self.audio_features
            .into_iter()
            .map(|value| serde_json::from_value(value).ok())
            .collect()
    }
}

/// One audio feature record as returned by the API, carrying its own track id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeaturesRecord {
    pub id: String,
    #[serde(flatten)]
    pub features: AudioFeatures,
}

#[derive(Tabled)]
pub struct BreakdownTableRow {
    pub category: String,
    pub tracks: usize,
    pub share: String,
}

#[derive(Tabled)]
pub struct RankingTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub popularity: u32,
}

#[derive(Tabled)]
pub struct ScoredTrackTableRow {
    pub name: String,
    pub artist: String,
    pub score: f64,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub minimum: String,
    pub minimum_track: String,
    pub maximum: String,
    pub maximum_track: String,
    pub average: String,
}
