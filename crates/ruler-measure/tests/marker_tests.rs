mod common;

use common::{
    BLACK, SCENE_MARKER_ID, assert_near, blank, draw_marker, fill_rect, marker_code, rotate_code_cw, scene,
};
use ruler_base::Vec2;
use ruler_measure::marker::MIN_MARKER_PERIMETER_PX;
use ruler_measure::{
    DictionaryId, MarkerDetection, MarkerDictionary, MeasureConfig, ScaleFactor, calibrate, detect_markers,
    select_marker,
};

fn square(x: f64, y: f64, side: f64) -> MarkerDetection {
    MarkerDetection::from_corners([
        Vec2::new(x, y),
        Vec2::new(x + side, y),
        Vec2::new(x + side, y + side),
        Vec2::new(x, y + side),
    ])
}

fn assert_corner(actual: Vec2<f64>, x: f64, y: f64) {
    assert!(
        actual.distance_to(Vec2::new(x, y)) <= 1.0,
        "expected corner near ({x}, {y}), got {:?}",
        actual
    );
}

#[test]
fn test_square_marker_scale() {
    for side in [5.0, 12.5, 70.0, 333.0] {
        let marker = square(3.0, 7.0, side);
        assert_near(marker.perimeter(), 4.0 * side, 1e-9);
        let scale = ScaleFactor::from_perimeter(marker.perimeter(), 20.0).unwrap();
        assert_near(scale.pixels_per_unit(), 4.0 * side / 20.0, 1e-9);
    }
}

#[test]
fn test_scale_rejects_degenerate_input() {
    assert!(ScaleFactor::from_perimeter(0.0, 20.0).is_none());
    assert!(ScaleFactor::from_perimeter(MIN_MARKER_PERIMETER_PX / 2.0, 20.0).is_none());
    assert!(ScaleFactor::from_perimeter(f64::NAN, 20.0).is_none());
    assert!(ScaleFactor::from_perimeter(f64::INFINITY, 20.0).is_none());
    assert!(ScaleFactor::from_perimeter(40.0, 0.0).is_none());
    assert!(ScaleFactor::from_perimeter(40.0, -20.0).is_none());
    assert!(ScaleFactor::from_perimeter(40.0, f64::NAN).is_none());
}

#[test]
fn test_scale_converts_pixels() {
    let scale = ScaleFactor::from_perimeter(80.0, 20.0).unwrap();
    assert_eq!(scale.pixels_per_unit(), 4.0);
    assert_eq!(scale.to_units(100.0), 25.0);
}

#[test]
fn test_select_largest_marker() {
    let markers = vec![square(0.0, 0.0, 10.0), square(100.0, 100.0, 30.0), square(50.0, 0.0, 20.0)];
    let selected = select_marker(&markers).unwrap();
    assert_eq!(selected, &markers[1]);
    assert!(select_marker(&[]).is_none());
}

#[test]
fn test_select_tie_breaks() {
    // equal areas: lowest corner sum wins
    let markers = vec![square(40.0, 40.0, 10.0), square(5.0, 5.0, 10.0)];
    assert_eq!(select_marker(&markers).unwrap(), &markers[1]);

    // identical geometry: lowest id wins
    let mut a = square(0.0, 0.0, 10.0);
    let mut b = square(0.0, 0.0, 10.0);
    a.id = Some(7);
    b.id = Some(3);
    let markers = vec![a, b];
    assert_eq!(select_marker(&markers).unwrap().id, Some(3));
}

#[test]
fn test_calibrate_scenario_five_pixel_marker() {
    let calibration = calibrate(&[square(0.0, 0.0, 5.0)], 20.0).unwrap();
    assert_near(calibration.marker.perimeter(), 20.0, 1e-12);
    assert_near(calibration.scale.pixels_per_unit(), 1.0, 1e-12);
}

#[test]
fn test_calibrate_filters_degenerate_markers() {
    let collapsed = MarkerDetection::from_corners([Vec2::new(4.0, 4.0); 4]);
    assert!(calibrate(&[collapsed.clone()], 20.0).is_none());
    assert!(calibrate(&[], 20.0).is_none());

    let calibration = calibrate(&[collapsed, square(0.0, 0.0, 10.0)], 20.0).unwrap();
    assert_near(calibration.scale.pixels_per_unit(), 2.0, 1e-12);
}

#[test]
fn test_detect_library_marker() {
    let detections = detect_markers(&scene(), &MeasureConfig::default()).unwrap();
    assert_eq!(detections.len(), 1);

    let marker = &detections[0];
    assert_eq!(marker.id, Some(SCENE_MARKER_ID as u32));
    assert_eq!(marker.code, marker_code(SCENE_MARKER_ID));
    assert_eq!(marker.rotation, 0);
    assert_near(marker.perimeter(), 276.0, 1.0);
    assert_corner(marker.corners[0], 30.0, 30.0);
    assert_corner(marker.corners[1], 99.0, 30.0);
    assert_corner(marker.corners[2], 99.0, 99.0);
    assert_corner(marker.corners[3], 30.0, 99.0);
}

#[test]
fn test_detect_marker_with_any_pattern() {
    let config = MeasureConfig::default().with_marker_dictionary(MarkerDictionary::any_pattern(DictionaryId::Dict5x5_50));
    let detections = detect_markers(&scene(), &config).unwrap();
    assert_eq!(detections.len(), 1);

    let marker = &detections[0];
    assert_eq!(marker.id, None);
    assert_near(marker.perimeter(), 276.0, 1.0);
    for (x, y) in [(30.0, 30.0), (99.0, 30.0), (99.0, 99.0), (30.0, 99.0)] {
        let expected = Vec2::new(x, y);
        assert!(
            marker.corners.iter().any(|c| c.distance_to(expected) <= 1.0),
            "no corner near ({x}, {y}): {:?}",
            marker.corners
        );
    }
}

#[test]
fn test_detect_marker_with_codebook() {
    let code = marker_code(SCENE_MARKER_ID);
    let dictionary = MarkerDictionary::new(DictionaryId::Dict5x5_50).with_codebook(vec![0, code], 0);
    let config = MeasureConfig::default().with_marker_dictionary(dictionary);

    let detections = detect_markers(&scene(), &config).unwrap();
    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].id, Some(1));
}

#[test]
fn test_detect_rotated_marker_reorders_corners() {
    let mut frame = blank(200, 200);
    draw_marker(&mut frame, 40, 50, 10, rotate_code_cw(marker_code(4)));

    let detections = detect_markers(&frame, &MeasureConfig::default()).unwrap();
    assert_eq!(detections.len(), 1);

    // the marker's own top-left now sits at the image top-right
    let marker = &detections[0];
    assert_eq!(marker.id, Some(4));
    assert_eq!(marker.rotation, 1);
    assert_corner(marker.corners[0], 109.0, 50.0);
    assert_corner(marker.corners[1], 109.0, 119.0);
    assert_corner(marker.corners[2], 40.0, 119.0);
    assert_corner(marker.corners[3], 40.0, 50.0);
}

#[test]
fn test_two_library_markers() {
    let mut frame = blank(300, 160);
    draw_marker(&mut frame, 20, 20, 10, marker_code(2));
    draw_marker(&mut frame, 150, 10, 14, marker_code(31));

    let mut detections = detect_markers(&frame, &MeasureConfig::default()).unwrap();
    detections.sort_by_key(|d| d.id);
    let ids: Vec<_> = detections.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![Some(2), Some(31)]);

    let calibration = calibrate(&detections, 20.0).unwrap();
    assert_eq!(calibration.marker.id, Some(31));
    assert_near(calibration.scale.pixels_per_unit(), 4.0 * 97.0 / 20.0, 0.3);
}

#[test]
fn test_unknown_code_is_rejected() {
    let mut frame = blank(200, 200);
    draw_marker(&mut frame, 40, 50, 10, marker_code(SCENE_MARKER_ID) ^ 0b1_1111);
    assert!(detect_markers(&frame, &MeasureConfig::default()).unwrap().is_empty());
}

#[test]
fn test_dark_box_with_bright_patch_is_not_a_marker() {
    let mut frame = blank(260, 200);
    fill_rect(&mut frame, 40, 50, 140, 70, [20, 20, 20]);
    fill_rect(&mut frame, 95, 75, 30, 20, [255, 255, 255]);
    assert!(detect_markers(&frame, &MeasureConfig::default()).unwrap().is_empty());
}

#[test]
fn test_elongated_quad_is_not_a_marker() {
    // a marker stretched to twice its width carries a readable grid but is not square
    let mut frame = blank(260, 200);
    let code = marker_code(SCENE_MARKER_ID);
    fill_rect(&mut frame, 30, 40, 140, 70, BLACK);
    for r in 0..5 {
        for c in 0..5 {
            if (code >> (24 - (r * 5 + c))) & 1 == 1 {
                fill_rect(&mut frame, 30 + (c + 1) * 20, 40 + (r + 1) * 10, 20, 10, [255, 255, 255]);
            }
        }
    }
    let any = MeasureConfig::default().with_marker_dictionary(MarkerDictionary::any_pattern(DictionaryId::Dict5x5_50));
    assert!(detect_markers(&frame, &any).unwrap().is_empty());
    assert!(detect_markers(&frame, &MeasureConfig::default()).unwrap().is_empty());
}

#[test]
fn test_no_marker_in_plain_frames() {
    let config = MeasureConfig::default();
    assert!(detect_markers(&blank(120, 80), &config).unwrap().is_empty());

    // a solid dark square has a border but no payload
    let mut frame = blank(200, 200);
    fill_rect(&mut frame, 50, 50, 70, 70, BLACK);
    assert!(detect_markers(&frame, &config).unwrap().is_empty());
    let any = config.with_marker_dictionary(MarkerDictionary::any_pattern(DictionaryId::Dict5x5_50));
    assert!(detect_markers(&frame, &any).unwrap().is_empty());
}

#[test]
fn test_marker_too_small_for_its_grid() {
    let mut frame = blank(100, 100);
    draw_marker(&mut frame, 20, 20, 1, marker_code(SCENE_MARKER_ID));
    assert!(detect_markers(&frame, &MeasureConfig::default()).unwrap().is_empty());
}
