use ruler_base::Vec2;

#[test]
fn test_arithmetic() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 5.0);
    assert_eq!(a + b, Vec2::new(4.0, 7.0));
    assert_eq!(b - a, Vec2::new(2.0, 3.0));
    assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(b / 2.0, Vec2::new(1.5, 2.5));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
}

#[test]
fn test_dot_and_cross() {
    let a = Vec2::new(1.0, 0.0);
    let b = Vec2::new(0.0, 1.0);
    assert_eq!(a.dot(b), 0.0);
    // x to y is a clockwise turn on screen
    assert_eq!(a.cross(b), 1.0);
    assert_eq!(b.cross(a), -1.0);
}

#[test]
fn test_length_and_distance() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(Vec2::new(1.0, 1.0).distance_to(Vec2::new(4.0, 5.0)), 5.0);
}

#[test]
fn test_normalized_zero_stays_zero() {
    let v = Vec2::<f64>::zero().normalized();
    assert_eq!(v, Vec2::new(0.0, 0.0));
    let u = Vec2::new(0.0, 2.0).normalized();
    assert_eq!(u, Vec2::new(0.0, 1.0));
}

#[test]
fn test_perp() {
    assert_eq!(Vec2::new(1.0, 0.0).perp(), Vec2::new(-0.0, 1.0));
}

#[test]
fn test_integer_conversions() {
    let p: Vec2<f64> = Vec2::new(3i32, -4).into();
    assert_eq!(p, Vec2::new(3.0, -4.0));
    let q: Vec2<f64> = Vec2::new(7usize, 8).into();
    assert_eq!(q, Vec2::new(7.0, 8.0));
    assert_eq!(Vec2::new(2.5, -1.6).round_i32(), Vec2::new(3, -2));
}

#[test]
fn test_is_finite() {
    assert!(Vec2::new(1.0, 2.0).is_finite());
    assert!(!Vec2::new(f64::NAN, 2.0).is_finite());
    assert!(!Vec2::new(1.0, f64::INFINITY).is_finite());
}
