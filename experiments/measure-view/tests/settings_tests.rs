mod settings {
    #![allow(dead_code)]
    include!("../src/settings.rs");
}

use ruler_camera::config::SourceKind;
use ruler_measure::{DictionaryId, MeasureError};
use settings::Settings;
use std::collections::HashMap;
use std::time::Duration;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let settings = Settings::from_lookup(lookup(&[])).unwrap();
    assert_eq!(settings.source, "/dev/video0");
    assert_eq!(settings.dictionary, DictionaryId::Dict5x5_50);
    assert_eq!(settings.marker_perimeter, 20.0);
    assert_eq!(settings.frame_interval, Duration::from_millis(200));
    assert!(!settings.headless);
    assert!(settings.output_dir.is_none());
    assert!(!settings.measure_config().dictionary().accepts_any_pattern());
}

#[test]
fn test_any_marker() {
    let settings = Settings::from_lookup(lookup(&[("RULER_ANY_MARKER", "true"), ("RULER_DICTIONARY", "6x6_250")])).unwrap();
    assert!(settings.any_marker);
    let config = settings.measure_config();
    assert!(config.dictionary().accepts_any_pattern());
    assert_eq!(config.dictionary().id(), DictionaryId::Dict6x6_250);
    assert!(config.dictionary().codebook().is_empty());
}

#[test]
fn test_overrides() {
    let settings = Settings::from_lookup(lookup(&[
        ("RULER_DICTIONARY", "DICT_4X4_100"),
        ("RULER_MARKER_PERIMETER", "8"),
        ("RULER_MIN_AREA", "500"),
        ("RULER_UNIT", "in"),
        ("RULER_FRAME_INTERVAL_MS", "33"),
        ("RULER_HEADLESS", "yes"),
        ("RULER_LOOP", "1"),
        ("RULER_OUTPUT_DIR", "/tmp/out"),
        ("RULER_WIDTH", "1280"),
    ]))
    .unwrap();

    assert_eq!(settings.dictionary, DictionaryId::Dict4x4_100);
    assert!(settings.headless);
    assert!(settings.looping);
    assert_eq!(settings.frame_interval, Duration::from_millis(33));
    assert_eq!(settings.output_dir.as_deref(), Some(std::path::Path::new("/tmp/out")));

    let config = settings.measure_config();
    assert_eq!(config.dictionary().id(), DictionaryId::Dict4x4_100);
    assert_eq!(config.marker_perimeter(), 8.0);
    assert_eq!(config.min_object_area(), 500.0);
    assert_eq!(config.unit(), "in");

    let camera = settings.camera_config();
    assert_eq!(camera.width(), 1280);
    assert!(camera.looping());
}

#[test]
fn test_directory_source() {
    let dir = std::env::temp_dir();
    let settings = Settings::from_lookup(lookup(&[("RULER_SOURCE", dir.to_str().unwrap())])).unwrap();
    assert_eq!(settings.camera_config().source(), &SourceKind::Directory(dir));
}

#[test]
fn test_invalid_values() {
    for pairs in [
        [("RULER_MARKER_PERIMETER", "abc")],
        [("RULER_MARKER_PERIMETER", "0")],
        [("RULER_MIN_AREA", "-1")],
        [("RULER_HEADLESS", "maybe")],
        [("RULER_ANY_MARKER", "sometimes")],
        [("RULER_DICTIONARY", "9x9_50")],
        [("RULER_FRAME_INTERVAL_MS", "-5")],
    ] {
        assert!(
            matches!(Settings::from_lookup(lookup(&pairs)), Err(MeasureError::Config(_))),
            "{pairs:?} should be rejected"
        );
    }
}
