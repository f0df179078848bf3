use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{AlbumObject, ArtistObject, TrackObject};

const UNKNOWN_ARTIST: &str = "Unknown";
/// Key or mode the catalog could not detect.
const UNDETECTED: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

impl AlbumType {
    pub const ALL: [AlbumType; 3] = [AlbumType::Album, AlbumType::Single, AlbumType::Compilation];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "album" => Some(AlbumType::Album),
            "single" => Some(AlbumType::Single),
            "compilation" => Some(AlbumType::Compilation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
        }
    }
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub name: String,
    /// `None` when the catalog reports a type outside album/single/compilation.
    pub album_type: Option<AlbumType>,
    pub release_date: String,
}

/// Vendor-computed audio descriptors of a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    /// Pitch class 0-11, -1 when no key was detected.
    #[serde(default = "undetected", deserialize_with = "undetected_when_null")]
    pub key: i32,
    pub liveness: f64,
    pub loudness: f64,
    /// 0 = minor, 1 = major, -1 when absent.
    #[serde(default = "undetected", deserialize_with = "undetected_when_null")]
    pub mode: i32,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: i32,
    pub valence: f64,
}

fn undetected() -> i32 {
    UNDETECTED
}

fn undetected_when_null<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(UNDETECTED))
}

/// The twelve numeric attributes tracked by the min/max and average passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    DurationMs,
    Acousticness,
    Danceability,
    Energy,
    Instrumentalness,
    Liveness,
    Loudness,
    Speechiness,
    Tempo,
    TimeSignature,
    Valence,
    Popularity,
}

impl Feature {
    pub const ALL: [Feature; 12] = [
        Feature::DurationMs,
        Feature::Acousticness,
        Feature::Danceability,
        Feature::Energy,
        Feature::Instrumentalness,
        Feature::Liveness,
        Feature::Loudness,
        Feature::Speechiness,
        Feature::Tempo,
        Feature::TimeSignature,
        Feature::Valence,
        Feature::Popularity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::DurationMs => "duration_ms",
            Feature::Acousticness => "acousticness",
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Loudness => "loudness",
            Feature::Speechiness => "speechiness",
            Feature::Tempo => "tempo",
            Feature::TimeSignature => "time_signature",
            Feature::Valence => "valence",
            Feature::Popularity => "popularity",
        }
    }

    /// Human readable label, e.g. `Time Signature`.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::DurationMs => "Duration",
            Feature::Acousticness => "Acousticness",
            Feature::Danceability => "Danceability",
            Feature::Energy => "Energy",
            Feature::Instrumentalness => "Instrumentalness",
            Feature::Liveness => "Liveness",
            Feature::Loudness => "Loudness",
            Feature::Speechiness => "Speechiness",
            Feature::Tempo => "Tempo",
            Feature::TimeSignature => "Time Signature",
            Feature::Valence => "Valence",
            Feature::Popularity => "Popularity",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A playlist track with its catalog metadata and, once fetched, its audio features.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub duration_ms: u64,
    pub explicit: bool,
    pub popularity: u32,
    pub uri: Option<String>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub is_local: bool,
    features: Option<AudioFeatures>,
}

impl Track {
    /// Builds a track from its catalog object.
    ///
    /// Returns `None` when the id or the name is missing or empty, which is how
    /// the catalog represents unavailable and local tracks.
    pub fn from_object(object: TrackObject) -> Option<Self> {
        let id = object.id.filter(|id| !id.is_empty())?;
        let name = object.name.filter(|name| !name.is_empty())?;

        let artists = object
            .artists
            .unwrap_or_default()
            .into_iter()
            .map(|ArtistObject { id, name }| Artist {
                id,
                name: name.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            })
            .collect();

        let AlbumObject {
            name: album_name,
            album_type,
            release_date,
        } = object.album.unwrap_or_default();

        Some(Self {
            id,
            name,
            artists,
            album: Album {
                name: album_name.unwrap_or_default(),
                album_type: album_type.as_deref().and_then(AlbumType::parse),
                release_date: release_date.unwrap_or_default(),
            },
            duration_ms: object.duration_ms.unwrap_or(0),
            explicit: object.explicit.unwrap_or(false),
            popularity: object.popularity.unwrap_or(0),
            uri: object.uri,
            track_number: object.track_number,
            disc_number: object.disc_number,
            is_local: object.is_local.unwrap_or(false),
            features: None,
        })
    }

    /// Sets all audio features at once. A second call replaces the previous set.
    pub fn populate_features(&mut self, features: AudioFeatures) {
        self.features = Some(features);
    }

    pub fn features(&self) -> Option<&AudioFeatures> {
        self.features.as_ref()
    }

    pub fn has_features(&self) -> bool {
        self.features.is_some()
    }

    /// Numeric value of `feature`, `None` while the audio features are unknown.
    pub fn value(&self, feature: Feature) -> Option<f64> {
        let features = self.features.as_ref();
        match feature {
            Feature::DurationMs => Some(self.duration_ms as f64),
            Feature::Popularity => Some(f64::from(self.popularity)),
            Feature::Acousticness => features.map(|f| f.acousticness),
            Feature::Danceability => features.map(|f| f.danceability),
            Feature::Energy => features.map(|f| f.energy),
            Feature::Instrumentalness => features.map(|f| f.instrumentalness),
            Feature::Liveness => features.map(|f| f.liveness),
            Feature::Loudness => features.map(|f| f.loudness),
            Feature::Speechiness => features.map(|f| f.speechiness),
            Feature::Tempo => features.map(|f| f.tempo),
            Feature::TimeSignature => features.map(|f| f64::from(f.time_signature)),
            Feature::Valence => features.map(|f| f.valence),
        }
    }

    pub fn release_date(&self) -> &str {
        &self.album.release_date
    }

    /// Name of the first credited artist.
    pub fn primary_artist(&self) -> &str {
        self.artists
            .first()
            .map(|artist| artist.name.as_str())
            .unwrap_or(UNKNOWN_ARTIST)
    }
}
