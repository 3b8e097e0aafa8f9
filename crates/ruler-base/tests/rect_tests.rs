use ruler_base::{Rect, Vec2};

#[test]
fn test_from_min_max() {
    let r = Rect::<f64>::from_min_max(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
    assert_eq!(r.origin, Vec2::new(1.0, 2.0));
    assert_eq!(r.size, Vec2::new(3.0, 4.0));
    assert_eq!(r.max(), Vec2::new(4.0, 6.0));
    assert_eq!(r.area(), 12.0);
}

#[test]
fn test_contains_point_half_open() {
    let r = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
    assert!(r.contains_point(Vec2::new(0, 0)));
    assert!(r.contains_point(Vec2::new(9, 9)));
    assert!(!r.contains_point(Vec2::new(10, 5)));
}

#[test]
fn test_contains_rect() {
    let outer = Rect::new(Vec2::new(0, 0), Vec2::new(10, 10));
    assert!(outer.contains_rect(Rect::new(Vec2::new(2, 2), Vec2::new(8, 8))));
    assert!(!outer.contains_rect(Rect::new(Vec2::new(2, 2), Vec2::new(9, 8))));
}

#[test]
fn test_include_grows_pixel_bounds() {
    let mut r = Rect::pixel(Vec2::new(5usize, 5));
    r.include(Vec2::new(2, 7));
    r.include(Vec2::new(8, 3));
    assert_eq!(r.origin, Vec2::new(2, 3));
    assert_eq!(r.size, Vec2::new(7, 5));
    assert_eq!(r.area(), 35);
}
