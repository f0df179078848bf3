use crate::{
    error::{AnalysisError, Result},
    spotify::CatalogApi,
    types::AudioFeaturesRecord,
};

/// Maximum number of ids `GET /audio-features` accepts in one request.
pub const MAX_IDS_PER_REQUEST: usize = 100;

/// Requests the audio features of at most [`MAX_IDS_PER_REQUEST`] tracks.
///
/// An empty id list returns immediately without a request.
///
/// # Errors
///
/// - [`AnalysisError::InvariantViolation`] when more than 100 ids are passed; no
///   request is sent
/// - [`AnalysisError::Transport`] when the request fails
pub async fn audio_feature_request<C: CatalogApi>(
    client: &C,
    token: &str,
    track_ids: &[String],
) -> Result<Vec<Option<AudioFeaturesRecord>>> {
    if track_ids.len() > MAX_IDS_PER_REQUEST {
        return Err(AnalysisError::InvariantViolation {
            requested: track_ids.len(),
            max: MAX_IDS_PER_REQUEST,
        });
    }
    if track_ids.is_empty() {
        return Ok(Vec::new());
    }

    client.fetch_audio_features(token, track_ids).await
}

/// Retrieves audio features for any number of tracks.
///
/// The ids are split into consecutive chunks of 100 and one request is sent
/// per chunk, so `n` ids cost `ceil(n / 100)` requests. Results are
/// concatenated in chunk order; `None` entries for unmatched ids keep their
/// position.
///
/// # Example
///
/// ```
/// let ids = playlist.track_ids();
/// let features = pull_audio_features(&client, &token, &ids).await?;
/// playlist.populate_features(features);
/// ```
pub async fn pull_audio_features<C: CatalogApi>(
    client: &C,
    token: &str,
    track_ids: &[String],
) -> Result<Vec<Option<AudioFeaturesRecord>>> {
    let mut features = Vec::with_capacity(track_ids.len());
    for chunk in track_ids.chunks(MAX_IDS_PER_REQUEST) {
        features.extend(audio_feature_request(client, token, chunk).await?);
    }
    Ok(features)
}
