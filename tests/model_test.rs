mod common;

use common::*;
use serde_json::json;
use sporlyze::{
    model::{AlbumType, Feature, Playlist, Track},
    types::{AudioFeaturesRecord, TrackObject},
    utils::*,
};

fn track_object(value: serde_json::Value) -> TrackObject {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_track_from_object() {
    let track = Track::from_object(track_object(track_json("t1", "Song", 55, "1999-05-01"))).unwrap();

    assert_eq!(track.id, "t1");
    assert_eq!(track.primary_artist(), "Artist of Song");
    assert_eq!(track.album.album_type, Some(AlbumType::Album));
    assert_eq!(track.release_date(), "1999-05-01");
    assert_eq!(track.popularity, 55);
    assert!(!track.has_features());
}

#[test]
fn test_track_requires_id_and_name() {
    assert!(Track::from_object(track_object(json!({ "name": "No Id" }))).is_none());
    assert!(Track::from_object(track_object(json!({ "id": "x" }))).is_none());
    assert!(Track::from_object(track_object(json!({ "id": "", "name": "Empty" }))).is_none());
}

#[test]
fn test_track_defaults_for_missing_metadata() {
    let track = Track::from_object(track_object(json!({ "id": "x", "name": "Bare" }))).unwrap();

    assert_eq!(track.primary_artist(), "Unknown");
    assert_eq!(track.duration_ms, 0);
    assert_eq!(track.popularity, 0);
    assert_eq!(track.album.album_type, None);
    assert_eq!(track.release_date(), "");
}

#[test]
fn test_track_values_before_and_after_features() {
    let mut track = Track::from_object(track_object(track_json("t1", "Song", 70, "2000"))).unwrap();

    assert_eq!(track.value(Feature::DurationMs), Some(200_000.0));
    assert_eq!(track.value(Feature::Popularity), Some(70.0));
    assert_eq!(track.value(Feature::Tempo), None);
    assert_eq!(track.value(Feature::TimeSignature), None);

    track.populate_features(audio_features());

    assert_eq!(track.value(Feature::Tempo), Some(120.0));
    assert_eq!(track.value(Feature::TimeSignature), Some(4.0));
    assert_eq!(track.value(Feature::Loudness), Some(-6.0));
}

#[test]
fn test_album_type_parse() {
    assert_eq!(AlbumType::parse("single"), Some(AlbumType::Single));
    assert_eq!(AlbumType::parse("COMPILATION"), Some(AlbumType::Compilation));
    assert_eq!(AlbumType::parse("appears_on"), None);
    assert_eq!(AlbumType::Album.to_string(), "album");
}

#[test]
fn test_playlist_metadata() {
    let playlist = playlist_of(vec![track_json("t1", "One", 1, "2001")]);

    assert_eq!(playlist.name, "Fixture Mix");
    assert_eq!(playlist.owner, "tester");
    assert_eq!(playlist.followers, 42);
    assert_eq!(playlist.visibility(), "Public");
    assert_eq!(playlist.collaborative_label(), "No");
}

#[test]
fn test_playlist_owner_falls_back_to_unknown() {
    let mut empty_name = playlist_json("p1", "Mix", vec![], None);
    empty_name["owner"]["display_name"] = json!("");
    let mut no_owner = playlist_json("p2", "Mix", vec![], None);
    no_owner.as_object_mut().unwrap().remove("owner");

    for value in [empty_name, no_owner] {
        let playlist = Playlist::from_response(serde_json::from_value(value).unwrap());
        assert_eq!(playlist.owner, "Unknown");
    }
}

#[test]
fn test_second_feature_population_replaces_the_first() {
    let mut track = Track::from_object(track_object(track_json("t1", "Song", 1, "2000"))).unwrap();
    let mut first = audio_features();
    first.tempo = 100.0;
    first.key = 2;
    let mut second = audio_features();
    second.tempo = 140.0;

    track.populate_features(first);
    track.populate_features(second);

    assert_eq!(track.value(Feature::Tempo), Some(140.0));
    assert_eq!(track.features().unwrap().key, 0);
}

#[test]
fn test_playlist_keeps_insertion_order_and_overwrites_duplicates() {
    let mut playlist = playlist_of(vec![
        track_json("a", "First", 1, "2001"),
        track_json("b", "Second", 2, "2002"),
        track_json("c", "Third", 3, "2003"),
    ]);
    playlist.add_tracks(
        serde_json::from_value(page_json(
            vec![item(track_json("a", "First Again", 9, "2001"))],
            None,
        ))
        .unwrap(),
    );

    assert_eq!(playlist.track_ids(), vec!["a", "b", "c"]);
    assert_eq!(playlist.len(), 3);
    assert_eq!(playlist.get_track("a").unwrap().name, "First Again");
}

#[test]
fn test_playlist_get_track() {
    let playlist = playlist_of(vec![track_json("a", "First", 1, "2001")]);

    assert!(playlist.get_track("a").is_some());
    assert!(playlist.get_track("missing").is_none());
    assert!(playlist.get_track("").is_none());
}

#[test]
fn test_playlist_explicit_count() {
    let mut explicit = track_json("b", "Loud", 2, "2002");
    explicit["explicit"] = json!(true);
    let playlist = playlist_of(vec![track_json("a", "Clean", 1, "2001"), explicit]);

    assert_eq!(playlist.total_explicit_tracks(), 1);
}

#[test]
fn test_populate_features_ignores_unknown_ids() {
    let mut playlist = playlist_of(vec![track_json("a", "First", 1, "2001")]);
    let records: Vec<Option<AudioFeaturesRecord>> = vec![
        serde_json::from_value(features_json("a")).ok(),
        None,
        serde_json::from_value(features_json("zzz")).ok(),
    ];

    assert_eq!(playlist.populate_features(records), 1);
    assert!(playlist.get_track("a").unwrap().has_features());
}

#[test]
fn test_parse_playlist_ids() {
    assert_eq!(parse_playlist_ids("abc"), vec!["abc"]);
    assert_eq!(parse_playlist_ids(" abc , def,,abc "), vec!["abc", "def"]);
    assert!(parse_playlist_ids(" , ").is_empty());
}

#[test]
fn test_convert_key() {
    assert_eq!(convert_key(0), "C");
    assert_eq!(convert_key(1), "C♯/D♭");
    assert_eq!(convert_key(11), "B");
    assert_eq!(convert_key(-1), "No Key found.");
    assert_eq!(convert_key(12), "No Key found.");
}

#[test]
fn test_convert_mode() {
    assert_eq!(convert_mode(0), "Minor");
    assert_eq!(convert_mode(1), "Major");
}

#[test]
fn test_convert_duration_ms() {
    assert_eq!(convert_duration_ms(0), "00:00");
    assert_eq!(convert_duration_ms(215_000), "03:35");
    assert_eq!(convert_duration_ms(3_599_999), "59:59");
    assert_eq!(convert_duration_ms(3_723_000), "1:02:03");
}

#[test]
fn test_convert_time_signature() {
    assert_eq!(convert_time_signature(4), "4/4");
    assert_eq!(convert_time_signature("3"), "3/4");
}

#[test]
fn test_percentage() {
    assert_eq!(percentage(1, 3), 33.33);
    assert_eq!(percentage(2, 2), 100.0);
    assert_eq!(percentage(5, 0), 0.0);
}

#[test]
fn test_report_file_name() {
    assert_eq!(report_file_name("Road Trip"), "Road_Trip_analysis");
    assert_eq!(report_file_name("AC/DC Best"), "AC-DC_Best_analysis");
}
