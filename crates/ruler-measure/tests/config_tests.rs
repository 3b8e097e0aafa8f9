use ruler_base::Vec2;
use ruler_measure::{AnnotateStyle, DictionaryId, MarkerDictionary, MeasureConfig, MeasureError};

#[test]
fn test_default_config() {
    let config = MeasureConfig::default();
    assert_eq!(config.dictionary().id(), DictionaryId::Dict5x5_50);
    assert_eq!(config.dictionary().codebook().len(), 50);
    assert!(!config.dictionary().accepts_any_pattern());
    assert_eq!(config.marker_perimeter(), 20.0);
    assert_eq!(config.min_object_area(), 2000.0);
    assert_eq!(config.threshold_block(), 19);
    assert_eq!(config.threshold_offset(), 5.0);
    assert_eq!(config.unit(), "cm");
    assert_eq!(config.width_label_offset(), Vec2::new(-100, -20));
    assert_eq!(config.height_label_offset(), Vec2::new(-100, 15));
    assert_eq!(config.style(), &AnnotateStyle::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_setters() {
    let style = AnnotateStyle {
        label_scale: 1,
        ..AnnotateStyle::default()
    };
    let config = MeasureConfig::default()
        .with_dictionary(DictionaryId::Dict4x4_100)
        .with_marker_perimeter(8.0)
        .with_min_object_area(500.0)
        .with_threshold_offset(7.5)
        .with_unit("in")
        .with_label_offsets(Vec2::new(-40, -10), Vec2::new(-40, 10))
        .with_style(style.clone());

    assert_eq!(config.dictionary().id(), DictionaryId::Dict4x4_100);
    assert_eq!(config.marker_perimeter(), 8.0);
    assert_eq!(config.min_object_area(), 500.0);
    assert_eq!(config.threshold_offset(), 7.5);
    assert_eq!(config.unit(), "in");
    assert_eq!(config.width_label_offset(), Vec2::new(-40, -10));
    assert_eq!(config.height_label_offset(), Vec2::new(-40, 10));
    assert_eq!(config.style(), &style);
}

#[test]
fn test_threshold_block_is_odd() {
    assert_eq!(MeasureConfig::default().with_threshold_block(20).threshold_block(), 21);
    assert_eq!(MeasureConfig::default().with_threshold_block(11).threshold_block(), 11);
    assert_eq!(MeasureConfig::default().with_threshold_block(0).threshold_block(), 3);
}

#[test]
fn test_with_dictionary_restores_library() {
    let dictionary = MarkerDictionary::new(DictionaryId::Dict5x5_50).with_codebook(vec![1, 2, 3], 1);
    let config = MeasureConfig::default().with_marker_dictionary(dictionary);
    assert_eq!(config.dictionary().codebook(), &[1, 2, 3]);

    let config = config.with_dictionary(DictionaryId::Dict4x4_100);
    assert_eq!(config.dictionary(), &MarkerDictionary::new(DictionaryId::Dict4x4_100));
    assert_eq!(config.dictionary().codebook().len(), 100);
}

#[test]
fn test_validate_rejects_bad_values() {
    for perimeter in [0.0, -20.0, f64::NAN, f64::INFINITY] {
        let config = MeasureConfig::default().with_marker_perimeter(perimeter);
        assert!(matches!(config.validate(), Err(MeasureError::Config(_))), "perimeter {perimeter}");
    }
    let config = MeasureConfig::default().with_min_object_area(-1.0);
    assert!(matches!(config.validate(), Err(MeasureError::Config(_))));
    let config = MeasureConfig::default().with_threshold_offset(f64::NAN);
    assert!(matches!(config.validate(), Err(MeasureError::Config(_))));
    assert!(MeasureConfig::default().with_min_object_area(0.0).validate().is_ok());
}
