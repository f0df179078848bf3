#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use serde_json::{Value, json};
use sporlyze::{
    error::{AnalysisError, Result},
    model::{AudioFeatures, Playlist},
    spotify::CatalogApi,
    types::{AudioFeaturesRecord, AudioFeaturesResponse, PlaylistResponse, TokenResponse, TracksPage},
};

/// Calls received by a [`FakeCatalog`].
#[derive(Debug, Default)]
pub struct Calls {
    pub tokens: usize,
    pub playlists: Vec<String>,
    pub pages: Vec<String>,
    pub feature_batches: Vec<Vec<String>>,
}

/// In-memory catalog serving JSON fixtures.
pub struct FakeCatalog {
    pub playlist: Option<Value>,
    pub pages: HashMap<String, Value>,
    pub features: HashMap<String, Value>,
    pub token_expires_in: u64,
    pub fail_token: bool,
    pub calls: Mutex<Calls>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            playlist: None,
            pages: HashMap::new(),
            features: HashMap::new(),
            token_expires_in: 3600,
            fail_token: false,
            calls: Mutex::new(Calls::default()),
        }
    }

    pub fn with_playlist(mut self, playlist: Value) -> Self {
        self.playlist = Some(playlist);
        self
    }

    pub fn with_page(mut self, url: &str, page: Value) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn with_features(mut self, record: Value) -> Self {
        let id = record["id"].as_str().unwrap_or_default().to_string();
        self.features.insert(id, record);
        self
    }

    pub fn token_calls(&self) -> usize {
        self.calls.lock().unwrap().tokens
    }

    pub fn feature_batches(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().feature_batches.clone()
    }

    pub fn pages_fetched(&self) -> Vec<String> {
        self.calls.lock().unwrap().pages.clone()
    }
}

impl CatalogApi for FakeCatalog {
    async fn fetch_token(&self) -> Result<TokenResponse> {
        self.calls.lock().unwrap().tokens += 1;
        if self.fail_token {
            return Err(transport_error());
        }
        Ok(TokenResponse {
            access_token: "fake-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: self.token_expires_in,
        })
    }

    async fn fetch_playlist(&self, _token: &str, playlist_id: &str) -> Result<PlaylistResponse> {
        self.calls
            .lock()
            .unwrap()
            .playlists
            .push(playlist_id.to_string());
        match &self.playlist {
            Some(value) if value["id"] == playlist_id => {
                Ok(serde_json::from_value(value.clone()).unwrap())
            }
            _ => Err(transport_error()),
        }
    }

    async fn fetch_playlist_page(&self, _token: &str, page_url: &str) -> Result<TracksPage> {
        self.calls.lock().unwrap().pages.push(page_url.to_string());
        match self.pages.get(page_url) {
            Some(value) => Ok(serde_json::from_value(value.clone()).unwrap()),
            None => Err(transport_error()),
        }
    }

    async fn fetch_audio_features(
        &self,
        _token: &str,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeaturesRecord>>> {
        self.calls
            .lock()
            .unwrap()
            .feature_batches
            .push(ids.to_vec());
        let response = AudioFeaturesResponse {
            audio_features: ids
                .iter()
                .map(|id| self.features.get(id).cloned().unwrap_or(Value::Null))
                .collect(),
        };
        Ok(response.into_records())
    }
}

/// A real reqwest error, as returned for an unreachable or failing endpoint.
pub fn transport_error() -> AnalysisError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    AnalysisError::Transport(err)
}

pub fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("track{i:04}")).collect()
}

pub fn track_json(id: &str, name: &str, popularity: u32, release_date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "artists": [{ "id": format!("{id}-artist"), "name": format!("Artist of {name}") }],
        "album": {
            "name": format!("Album of {name}"),
            "album_type": "album",
            "release_date": release_date,
        },
        "duration_ms": 200_000,
        "explicit": false,
        "popularity": popularity,
        "uri": format!("spotify:track:{id}"),
        "track_number": 1,
        "disc_number": 1,
        "is_local": false,
    })
}

pub fn item(track: Value) -> Value {
    json!({ "track": track })
}

pub fn page_json(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "total": items.len(),
        "items": items,
        "next": next,
    })
}

pub fn playlist_json(id: &str, name: &str, items: Vec<Value>, next: Option<&str>) -> Value {
    let total = items.len();
    json!({
        "id": id,
        "name": name,
        "description": "Fixture playlist",
        "owner": { "display_name": "tester" },
        "followers": { "total": 42 },
        "public": true,
        "collaborative": false,
        "tracks": {
            "total": total,
            "items": items,
            "next": next,
        },
    })
}

pub fn features_json(id: &str) -> Value {
    json!({
        "id": id,
        "acousticness": 0.2,
        "danceability": 0.5,
        "energy": 0.5,
        "instrumentalness": 0.0,
        "key": 0,
        "liveness": 0.1,
        "loudness": -6.0,
        "mode": 1,
        "speechiness": 0.05,
        "tempo": 120.0,
        "time_signature": 4,
        "valence": 0.5,
        "type": "audio_features",
        "uri": format!("spotify:track:{id}"),
    })
}

pub fn audio_features() -> AudioFeatures {
    AudioFeatures {
        acousticness: 0.2,
        danceability: 0.5,
        energy: 0.5,
        instrumentalness: 0.0,
        key: 0,
        liveness: 0.1,
        loudness: -6.0,
        mode: 1,
        speechiness: 0.05,
        tempo: 120.0,
        time_signature: 4,
        valence: 0.5,
    }
}

/// Builds a playlist from track objects without fetching anything.
pub fn playlist_of(tracks: Vec<Value>) -> Playlist {
    let response: PlaylistResponse = serde_json::from_value(playlist_json(
        "fixture",
        "Fixture Mix",
        tracks.into_iter().map(item).collect(),
        None,
    ))
    .unwrap();
    Playlist::from_response(response)
}

/// Sets the audio features of a track, leaving the rest untouched.
pub fn set_features(playlist: &mut Playlist, id: &str, edit: impl FnOnce(&mut AudioFeatures)) {
    let mut features = audio_features();
    edit(&mut features);
    playlist.get_track_mut(id).unwrap().populate_features(features);
}
