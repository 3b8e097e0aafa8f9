use crate::frame::GrayImage;
use crate::polygon;
use crates_image::imageops;
use imageproc::contours::{BorderType, find_contours};
use imageproc::geometry::{arc_length, contour_area};
use ruler_base::{Rect, Vec2};

pub use imageproc::point::Point;

/// Ordered boundary pixels of one connected region.
///
/// Points are pixel centres; consecutive points are 8-neighbours.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_f64(&self) -> Vec<Vec2<f64>> {
        self.points
            .iter()
            .map(|p| Vec2::new(p.x as f64, p.y as f64))
            .collect()
    }

    /// Enclosed area of the outline polygon.
    pub fn area(&self) -> f64 {
        contour_area(&self.points)
    }

    /// Length of the closed outline.
    pub fn perimeter(&self) -> f64 {
        arc_length(&self.points, true)
    }

    pub fn centroid(&self) -> Vec2<f64> {
        polygon::centroid(&self.to_f64())
    }

    pub fn contains(&self, point: Vec2<f64>) -> bool {
        polygon::contains_point(&self.to_f64(), point)
    }

    /// Pixel bounding box, `None` for an empty contour.
    pub fn bounding_rect(&self) -> Option<Rect<i32>> {
        let first = self.points.first()?;
        let (mut min, mut max) = (Vec2::new(first.x, first.y), Vec2::new(first.x, first.y));
        for p in &self.points {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Rect::from_min_max(min, max + Vec2::new(1, 1)))
    }
}

/// Outer border of one 8-connected foreground region.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedComponent {
    pub contour: Contour,
    /// False when the region sits inside a hole of another region.
    pub external: bool,
}

/// Trace the outer border of every 8-connected foreground region of `mask`.
///
/// Any non-zero pixel is foreground. Regions come back in raster order of their
/// first pixel, where each trace starts.
pub fn trace_components(mask: &GrayImage) -> Vec<TracedComponent> {
    // one background pixel all around, so regions touching the edge are traced too
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, mask, 1, 1);

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| TracedComponent {
            external: c.parent.is_none(),
            contour: Contour::new(
                c.points
                    .into_iter()
                    .map(|p| Point::new(p.x - 1, p.y - 1))
                    .collect(),
            ),
        })
        .collect()
}

/// Outer borders of the regions not enclosed by any other region.
pub fn find_external_contours(mask: &GrayImage) -> Vec<Contour> {
    trace_components(mask)
        .into_iter()
        .filter(|c| c.external)
        .map(|c| c.contour)
        .collect()
}
