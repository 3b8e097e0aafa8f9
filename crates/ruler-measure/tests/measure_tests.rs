mod common;

use common::assert_near;
use ruler_base::Vec2;
use ruler_measure::{Contour, Measurement, OrientedRect, Point, ScaleFactor, measure_contour, measure_contours};

fn rect_contour(x: i32, y: i32, w: i32, h: i32) -> Contour {
    Contour::new(vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ])
}

#[test]
fn test_five_pixel_marker_scenario() {
    // a 5 px square marker of 20 cm perimeter gives 1 px per cm
    let scale = ScaleFactor::from_perimeter(20.0, 20.0).unwrap();
    let object = measure_contour(&rect_contour(10, 10, 100, 50), scale).unwrap();
    assert_near(object.measurement.width, 100.0, 0.1);
    assert_near(object.measurement.height, 50.0, 0.1);
    assert_near(object.measurement.center.x, 60.0, 1e-9);
    assert_near(object.measurement.center.y, 35.0, 1e-9);
}

#[test]
fn test_measurement_divides_by_scale() {
    let scale = ScaleFactor::from_perimeter(80.0, 20.0).unwrap();
    let rect = OrientedRect {
        center: Vec2::new(5.0, 5.0),
        size: Vec2::new(40.0, 10.0),
        angle: 12.0,
    };
    let measurement = Measurement::from_rect(&rect, scale).unwrap();
    assert_eq!(measurement.width, 10.0);
    assert_eq!(measurement.height, 2.5);
    assert_eq!(measurement.center, Vec2::new(5.0, 5.0));
}

#[test]
fn test_non_finite_rect_is_rejected() {
    let scale = ScaleFactor::from_perimeter(20.0, 20.0).unwrap();
    let rect = OrientedRect {
        center: Vec2::new(f64::NAN, 0.0),
        size: Vec2::new(1.0, 1.0),
        angle: 0.0,
    };
    assert!(Measurement::from_rect(&rect, scale).is_none());
}

#[test]
fn test_labels_round_to_one_decimal() {
    let measurement = Measurement {
        center: Vec2::zero(),
        width: 12.34,
        height: 50.0,
    };
    assert_eq!(measurement.width_label("cm"), "Width 12.3 cm");
    assert_eq!(measurement.height_label("cm"), "Height 50.0 cm");
    assert_eq!(measurement.width_label("in"), "Width 12.3 in");
    // the stored value keeps its precision
    assert_eq!(measurement.width, 12.34);
}

#[test]
fn test_degenerate_contour_measures_zero() {
    let scale = ScaleFactor::from_perimeter(20.0, 20.0).unwrap();
    let object = measure_contour(&Contour::new(vec![Point::new(7, 9)]), scale).unwrap();
    assert_eq!(object.measurement.width, 0.0);
    assert_eq!(object.measurement.height, 0.0);
    assert_eq!(object.measurement.center, Vec2::new(7.0, 9.0));
}

#[test]
fn test_measure_contours_keeps_order() {
    let scale = ScaleFactor::from_perimeter(40.0, 20.0).unwrap();
    let contours = vec![rect_contour(0, 0, 20, 10), rect_contour(50, 50, 8, 30)];
    let objects = measure_contours(&contours, scale);
    assert_eq!(objects.len(), 2);
    assert_near(objects[0].measurement.width, 10.0, 1e-9);
    assert_near(objects[0].measurement.height, 5.0, 1e-9);
    // the tall rectangle reports its x extent as width at angle 0
    assert_near(objects[1].measurement.width, 4.0, 1e-9);
    assert_near(objects[1].measurement.height, 15.0, 1e-9);
    assert!(measure_contours(&[], scale).is_empty());
}
