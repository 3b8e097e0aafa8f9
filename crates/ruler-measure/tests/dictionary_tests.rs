mod common;

use common::{marker_code, rotate_code_cw};
use ruler_measure::dictionary::{hamming_distance, rotate_bits};
use ruler_measure::{DictionaryId, MarkerDictionary, MeasureError};

#[test]
fn test_parse_names() {
    assert_eq!("5x5_50".parse::<DictionaryId>().unwrap(), DictionaryId::Dict5x5_50);
    assert_eq!("DICT_5X5_50".parse::<DictionaryId>().unwrap(), DictionaryId::Dict5x5_50);
    assert_eq!(" dict_4x4_1000 ".parse::<DictionaryId>().unwrap(), DictionaryId::Dict4x4_1000);
    assert!(matches!("9x9_50".parse::<DictionaryId>(), Err(MeasureError::Config(_))));
    assert!(matches!("".parse::<DictionaryId>(), Err(MeasureError::Config(_))));
}

#[test]
fn test_names_round_trip_for_all() {
    for id in DictionaryId::ALL {
        assert_eq!(id.to_string().parse::<DictionaryId>().unwrap(), id);
    }
}

#[test]
fn test_geometry() {
    assert_eq!(DictionaryId::Dict5x5_50.grid_size(), 5);
    assert_eq!(DictionaryId::Dict5x5_50.library_size(), 50);
    assert_eq!(DictionaryId::Dict5x5_50.cells_per_side(), 7);
    assert_eq!(DictionaryId::Dict7x7_250.grid_size(), 7);
    assert_eq!(DictionaryId::Dict4x4_1000.library_size(), 1000);
    assert_eq!(DictionaryId::Dict6x6_100.name(), "6x6_100");
}

#[test]
fn test_rotate_bits_matches_grid_rotation() {
    let code = marker_code(3);
    assert_eq!(rotate_bits(code, 5), rotate_code_cw(code));

    let mut rotated = code;
    for _ in 0..4 {
        rotated = rotate_bits(rotated, 5);
    }
    assert_eq!(rotated, code);
}

#[test]
fn test_rotate_bits_3x3() {
    // 1 0 0      0 0 1
    // 0 0 0  ->  0 0 0
    // 0 0 0      0 0 0
    assert_eq!(rotate_bits(0b100_000_000, 3), 0b001_000_000);
}

#[test]
fn test_hamming_distance() {
    assert_eq!(hamming_distance(0b1010, 0b1010), 0);
    assert_eq!(hamming_distance(0b1010, 0b0101), 4);
}

#[test]
fn test_embedded_library() {
    for id in DictionaryId::ALL {
        let dictionary = MarkerDictionary::new(id);
        assert_eq!(dictionary.codebook().len(), id.library_size(), "{id}");
        assert!(!dictionary.accepts_any_pattern());
    }

    let dictionary = MarkerDictionary::default();
    assert_eq!(dictionary.id(), DictionaryId::Dict5x5_50);
    for k in [0, 7, 49] {
        let matched = dictionary.identify(marker_code(k)).unwrap();
        assert_eq!(matched.id, Some(k as u32));
        assert_eq!(matched.code, marker_code(k));
        assert_eq!(matched.rotation, 0);
        assert_eq!(matched.distance, 0);
    }
}

#[test]
fn test_embedded_library_rejects_uniform_grids() {
    let dictionary = MarkerDictionary::new(DictionaryId::Dict5x5_50);
    assert!(dictionary.identify(0).is_none());
    assert!(dictionary.identify((1 << 25) - 1).is_none());
}

#[test]
fn test_identify_rotated_library_marker() {
    let dictionary = MarkerDictionary::new(DictionaryId::Dict5x5_50);
    let code = marker_code(12);

    // drawn turned a quarter clockwise
    let matched = dictionary.identify(rotate_code_cw(code)).unwrap();
    assert_eq!(matched.id, Some(12));
    assert_eq!(matched.rotation, 1);
    assert_eq!(matched.code, code);

    let matched = dictionary.identify(rotate_bits(rotate_bits(code, 5), 5)).unwrap();
    assert_eq!(matched.rotation, 2);
}

#[test]
fn test_identify_embedded_correction() {
    let dictionary = MarkerDictionary::new(DictionaryId::Dict5x5_50);
    assert_eq!(dictionary.max_correction_bits(), 1);
    let code = marker_code(20);

    let matched = dictionary.identify(code ^ (1 << 12)).unwrap();
    assert_eq!(matched.id, Some(20));
    assert_eq!(matched.distance, 1);

    assert!(dictionary.identify(code ^ 0b1_1111).is_none());
    assert!(dictionary.with_max_correction_bits(0).identify(code ^ (1 << 12)).is_none());
}

#[test]
fn test_any_pattern() {
    let dictionary = MarkerDictionary::any_pattern(DictionaryId::Dict5x5_50);
    assert!(dictionary.accepts_any_pattern());
    assert!(dictionary.codebook().is_empty());
    let code = 0b10110_01001_11010_00111_10001;

    let upright = dictionary.identify(code).unwrap();
    assert_eq!(upright.id, None);

    // every orientation reports the same canonical code
    let mut sampled = code;
    for _ in 0..3 {
        sampled = rotate_bits(sampled, 5);
        let matched = dictionary.identify(sampled).unwrap();
        assert_eq!(matched.code, upright.code);
        assert_eq!(matched.id, None);
    }

    assert!(dictionary.identify(0).is_none());
    assert!(dictionary.identify((1 << 25) - 1).is_none());
}

#[test]
fn test_identify_with_codebook() {
    let code = 0b10110_01001_11010_00111_10001;
    let dictionary = MarkerDictionary::new(DictionaryId::Dict5x5_50).with_codebook(vec![0b1, code], 0);
    assert!(!dictionary.accepts_any_pattern());
    assert_eq!(dictionary.codebook(), &[0b1, code]);

    let matched = dictionary.identify(code).unwrap();
    assert_eq!(matched.id, Some(1));
    assert_eq!(matched.rotation, 0);
    assert_eq!(matched.distance, 0);

    // drawn turned a quarter clockwise
    let matched = dictionary.identify(rotate_bits(code, 5)).unwrap();
    assert_eq!(matched.id, Some(1));
    assert_eq!(matched.rotation, 1);
    assert_eq!(matched.code, code);

    // the embedded library is gone
    assert!(dictionary.identify(marker_code(0)).is_none());
}

#[test]
fn test_codebook_replaces_any_pattern() {
    let code = 0b10110_01001_11010_00111_10001;
    let dictionary = MarkerDictionary::any_pattern(DictionaryId::Dict5x5_50).with_codebook(vec![code], 0);
    assert!(!dictionary.accepts_any_pattern());
    assert!(dictionary.identify(code ^ 1).is_none());
    assert_eq!(dictionary.identify(code).unwrap().id, Some(0));
}

#[test]
fn test_identify_correction_bits() {
    let code = 0b10110_01001_11010_00111_10001;
    let flipped = code ^ (1 << 12);

    let strict = MarkerDictionary::new(DictionaryId::Dict5x5_50).with_codebook(vec![code], 0);
    assert!(strict.identify(flipped).is_none());

    let tolerant = MarkerDictionary::new(DictionaryId::Dict5x5_50).with_codebook(vec![code], 1);
    let matched = tolerant.identify(flipped).unwrap();
    assert_eq!(matched.id, Some(0));
    assert_eq!(matched.distance, 1);
}

#[test]
fn test_codebook_truncated_to_library_size() {
    let dictionary = MarkerDictionary::new(DictionaryId::Dict4x4_50).with_codebook((0..80).collect(), 0);
    assert_eq!(dictionary.codebook().len(), 50);
    assert_eq!(dictionary.max_correction_bits(), 0);
}

#[test]
fn test_codebook_words_are_masked() {
    let dictionary = MarkerDictionary::new(DictionaryId::Dict4x4_50).with_codebook(vec![0x1_0001], 0);
    assert_eq!(dictionary.codebook(), &[0x0001]);
}
