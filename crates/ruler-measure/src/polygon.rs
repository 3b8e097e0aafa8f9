//! Closed polygon helpers in image coordinates (x right, y down).
//!
//! Signed areas are positive for polygons that run clockwise on screen.

use imageproc::geometry::{arc_length, oriented_contour_area};
use imageproc::point::Point;
use ruler_base::Vec2;

fn to_points(points: &[Vec2<f64>]) -> Vec<Point<f64>> {
    points.iter().map(|p| Point::new(p.x, p.y)).collect()
}

pub fn signed_area(points: &[Vec2<f64>]) -> f64 {
    oriented_contour_area(&to_points(points))
}

pub fn area(points: &[Vec2<f64>]) -> f64 {
    signed_area(points).abs()
}

/// Length of the outline; the closing edge counts from three vertices up.
pub fn perimeter(points: &[Vec2<f64>]) -> f64 {
    arc_length(&to_points(points), true)
}

/// Area centroid, falling back to the vertex mean for degenerate outlines.
pub fn centroid(points: &[Vec2<f64>]) -> Vec2<f64> {
    if points.is_empty() {
        return Vec2::zero();
    }
    let a = signed_area(points);
    if a.abs() < 1e-9 {
        let sum = points.iter().fold(Vec2::zero(), |acc: Vec2<f64>, &p| acc + p);
        return sum / points.len() as f64;
    }
    let mut c = Vec2::zero();
    for (i, &p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        c += (p + q) * p.cross(q);
    }
    c / (6.0 * a)
}

/// Even-odd ray casting. Points exactly on an edge may land on either side.
pub fn contains_point(points: &[Vec2<f64>], point: Vec2<f64>) -> bool {
    let mut inside = false;
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if point.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True when every turn has the same direction (collinear runs allowed).
pub fn is_convex(points: &[Vec2<f64>]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = (b - a).cross(c - b);
        if turn.abs() < 1e-9 {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

/// Ratio of the shortest to the longest edge of a closed outline, 0 when
/// degenerate.
pub fn edge_ratio(points: &[Vec2<f64>]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let (mut shortest, mut longest) = (f64::INFINITY, 0.0f64);
    for (i, &p) in points.iter().enumerate() {
        let length = p.distance_to(points[(i + 1) % n]);
        shortest = shortest.min(length);
        longest = longest.max(length);
    }
    if longest > 0.0 { shortest / longest } else { 0.0 }
}
