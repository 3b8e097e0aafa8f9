mod common;

use common::assert_near;
use ruler_base::Vec2;
use ruler_measure::{OrientedRect, Point, box_points, min_area_rect};

fn v(x: f64, y: f64) -> Vec2<f64> {
    Vec2::new(x, y)
}

fn p(x: i32, y: i32) -> Point<i32> {
    Point::new(x, y)
}

/// Corners of `rect` on the nearest pixels.
fn pixel_corners(rect: &OrientedRect) -> Vec<Point<i32>> {
    rect.box_points()
        .iter()
        .map(|c| p(c.x.round() as i32, c.y.round() as i32))
        .collect()
}

#[test]
fn test_axis_aligned_rectangle() {
    let rect = min_area_rect(&[p(10, 10), p(110, 10), p(110, 60), p(10, 60)]);
    assert_near(rect.width(), 100.0, 1e-9);
    assert_near(rect.height(), 50.0, 1e-9);
    assert_eq!(rect.angle, 0.0);
    assert_near(rect.center.x, 60.0, 1e-9);
    assert_near(rect.center.y, 35.0, 1e-9);
    assert_near(rect.area(), 5000.0, 1e-6);
}

#[test]
fn test_tall_rectangle_keeps_width_along_x() {
    let rect = min_area_rect(&[p(0, 0), p(50, 0), p(50, 100), p(0, 100), p(25, 50)]);
    assert_near(rect.width(), 50.0, 1e-9);
    assert_near(rect.height(), 100.0, 1e-9);
    assert_eq!(rect.angle, 0.0);
}

#[test]
fn test_rotated_rectangle() {
    let truth = OrientedRect {
        center: v(200.0, 150.0),
        size: v(120.0, 40.0),
        angle: 30.0,
    };
    let mut points = pixel_corners(&truth);
    // interior points do not change the fit
    points.push(p(200, 150));
    points.push(p(210, 155));

    let rect = min_area_rect(&points);
    assert_near(rect.width(), 120.0, 1.5);
    assert_near(rect.height(), 40.0, 1.5);
    assert_near(rect.angle, 30.0, 1.0);
    assert_near(rect.center.x, 200.0, 1.0);
    assert_near(rect.center.y, 150.0, 1.0);
}

#[test]
fn test_angle_is_normalized() {
    for angle in [0.0, 15.0, 45.0, 60.0, 89.0] {
        let truth = OrientedRect {
            center: v(400.0, 400.0),
            size: v(300.0, 100.0),
            angle,
        };
        let rect = min_area_rect(&pixel_corners(&truth));
        assert!((0.0..90.0).contains(&rect.angle), "angle {}", rect.angle);
        assert_near(rect.width().max(rect.height()), 300.0, 2.0);
        assert_near(rect.width().min(rect.height()), 100.0, 2.0);
    }
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(min_area_rect(&[]), OrientedRect::default());

    let point = min_area_rect(&[p(3, 4), p(3, 4)]);
    assert_eq!(point.center, v(3.0, 4.0));
    assert_eq!(point.area(), 0.0);

    let segment = min_area_rect(&[p(0, 0), p(10, 0), p(5, 0)]);
    assert_near(segment.width(), 10.0, 1e-9);
    assert_eq!(segment.height(), 0.0);
    assert_eq!(segment.center, v(5.0, 0.0));

    let vertical = min_area_rect(&[p(0, 0), p(0, 10)]);
    assert_eq!(vertical.area(), 0.0);
    assert_near(vertical.width().max(vertical.height()), 10.0, 1e-9);
}

#[test]
fn test_box_points_axis_aligned() {
    let rect = OrientedRect {
        center: v(10.0, 10.0),
        size: v(4.0, 2.0),
        angle: 0.0,
    };
    let corners = box_points(&rect);
    assert_eq!(corners, [v(8.0, 9.0), v(12.0, 9.0), v(12.0, 11.0), v(8.0, 11.0)]);
}
