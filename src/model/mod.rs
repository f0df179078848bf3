mod playlist;
mod track;

pub use playlist::Playlist;
pub use track::{Album, AlbumType, Artist, AudioFeatures, Feature, Track};
