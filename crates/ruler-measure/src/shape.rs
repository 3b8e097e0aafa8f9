use imageproc::geometry;
use imageproc::point::Point;
use ruler_base::Vec2;

const ANGLE_EPSILON: f64 = 1e-9;

/// Rotated rectangle in pixels.
///
/// `size.x` (width) runs along `angle`, `size.y` (height) along the
/// perpendicular. `angle` is in degrees within `[0, 90)`; an axis-aligned
/// rectangle has angle 0 with width along x.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientedRect {
    pub center: Vec2<f64>,
    pub size: Vec2<f64>,
    pub angle: f64,
}

impl OrientedRect {
    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }

    /// The four corners, clockwise on screen, starting at the corner that is
    /// top-left when the angle is 0.
    pub fn box_points(&self) -> [Vec2<f64>; 4] {
        let theta = self.angle.to_radians();
        let u = Vec2::new(theta.cos(), theta.sin());
        let v = u.perp();
        let half_w = u * (self.size.x / 2.0);
        let half_h = v * (self.size.y / 2.0);
        [
            self.center - half_w - half_h,
            self.center + half_w - half_h,
            self.center + half_w + half_h,
            self.center - half_w + half_h,
        ]
    }
}

fn normalized(center: Vec2<f64>, mut width: f64, mut height: f64, degrees: f64) -> OrientedRect {
    let mut angle = degrees.rem_euclid(180.0);
    if angle >= 90.0 {
        angle -= 90.0;
        std::mem::swap(&mut width, &mut height);
    }
    if 90.0 - angle < ANGLE_EPSILON {
        angle = 0.0;
        std::mem::swap(&mut width, &mut height);
    }
    if angle < ANGLE_EPSILON {
        angle = 0.0;
    }
    OrientedRect {
        center,
        size: Vec2::new(width, height),
        angle,
    }
}

/// Rectangle through four consecutive corners, width along the first edge.
fn from_corners(corners: [Vec2<f64>; 4]) -> OrientedRect {
    let center = (corners[0] + corners[1] + corners[2] + corners[3]) / 4.0;
    let along = corners[1] - corners[0];
    let across = corners[2] - corners[1];
    let degrees = if along.length() > 0.0 {
        along.y.atan2(along.x).to_degrees()
    } else {
        across.y.atan2(across.x).to_degrees() - 90.0
    };
    normalized(center, along.length(), across.length(), degrees)
}

/// Smallest-area rectangle enclosing `points`, at any rotation.
///
/// Corners land on whole pixels, rounded outwards. Fewer than three distinct
/// points yield a zero-area rectangle: a point, or a segment of zero height.
pub fn min_area_rect(points: &[Point<i32>]) -> OrientedRect {
    if points.is_empty() {
        return OrientedRect::default();
    }
    let corners = geometry::min_area_rect(points).map(|p| Vec2::new(p.x as f64, p.y as f64));
    from_corners(corners)
}

/// Corners of `rect`, see [`OrientedRect::box_points`].
pub fn box_points(rect: &OrientedRect) -> [Vec2<f64>; 4] {
    rect.box_points()
}
