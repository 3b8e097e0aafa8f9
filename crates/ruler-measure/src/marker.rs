use crate::contour::{TracedComponent, trace_components};
use crate::frame::{GrayImage, Luma, adaptive_threshold, luma};
use crate::{MarkerDictionary, MeasureConfig, MeasureError, polygon};
use imageproc::contrast::otsu_level;
use imageproc::geometric_transformations::{Interpolation, warp_into_with};
use imageproc::geometry::approximate_polygon_dp;
use ruler_base::{Tensor, Vec2};
use std::cmp::Ordering;

/// Markers whose outline is shorter than this are treated as degenerate.
pub const MIN_MARKER_PERIMETER_PX: f64 = 1.0;

// candidates need at least this many pixels per cell
const MIN_CELL_PX: f64 = 2.0;
const APPROX_EPSILON_RATE: f64 = 0.03;
const MAX_BORDER_ERROR_RATE: f64 = 0.35;
const MIN_CELL_CONTRAST: u8 = 30;
// pixels per cell side in the rectified marker
const CELL_PX: u32 = 8;

/// Shortest over longest edge a candidate outline may have. Square markers
/// stay above this up to roughly 50 degrees of tilt.
pub const MIN_EDGE_RATIO: f64 = 0.6;

/// A decoded fiducial.
///
/// Corners run clockwise on screen, starting at the marker's own top-left
/// corner.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDetection {
    pub corners: [Vec2<f64>; 4],
    /// Codebook index, `None` from a dictionary that accepts any pattern.
    pub id: Option<u32>,
    pub code: u64,
    /// Quarter turns clockwise the marker appears rotated in the image.
    pub rotation: u8,
}

impl MarkerDetection {
    /// A detection from known corners, with no decoded payload.
    pub fn from_corners(corners: [Vec2<f64>; 4]) -> Self {
        Self {
            corners,
            id: None,
            code: 0,
            rotation: 0,
        }
    }

    /// Sum of the four edge lengths, closing edge included.
    pub fn perimeter(&self) -> f64 {
        polygon::perimeter(&self.corners)
    }

    pub fn area(&self) -> f64 {
        polygon::area(&self.corners)
    }

    pub fn center(&self) -> Vec2<f64> {
        polygon::centroid(&self.corners)
    }

    fn corner_sum(&self) -> f64 {
        self.corners.iter().map(|c| c.x + c.y).sum()
    }
}

/// Pixels per physical unit. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Ratio of a measured pixel perimeter to the known physical perimeter.
    ///
    /// `None` for a degenerate marker (perimeter below
    /// [`MIN_MARKER_PERIMETER_PX`]), a non-positive physical perimeter, or a
    /// ratio that is not a usable finite number.
    pub fn from_perimeter(perimeter_px: f64, physical_perimeter: f64) -> Option<Self> {
        if !perimeter_px.is_finite() || perimeter_px < MIN_MARKER_PERIMETER_PX {
            return None;
        }
        if !physical_perimeter.is_finite() || physical_perimeter <= 0.0 {
            return None;
        }
        let ratio = perimeter_px / physical_perimeter;
        (ratio.is_finite() && ratio >= 1e-6).then_some(Self(ratio))
    }

    pub fn pixels_per_unit(self) -> f64 {
        self.0
    }

    /// Convert a pixel length to physical units.
    pub fn to_units(self, pixels: f64) -> f64 {
        pixels / self.0
    }
}

/// The marker chosen for a frame and the scale derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub marker: MarkerDetection,
    pub scale: ScaleFactor,
}

// Maps the unit square onto a quad: (0,0) -> q0, (1,0) -> q1, (1,1) -> q2, (0,1) -> q3.
struct SquareToQuad {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    g: f64,
    h: f64,
}

impl SquareToQuad {
    fn new(q: &[Vec2<f64>; 4]) -> Option<Self> {
        let sx = q[0].x - q[1].x + q[2].x - q[3].x;
        let sy = q[0].y - q[1].y + q[2].y - q[3].y;
        let (g, h) = if sx.abs() < 1e-12 && sy.abs() < 1e-12 {
            (0.0, 0.0)
        } else {
            let (dx1, dx2) = (q[1].x - q[2].x, q[3].x - q[2].x);
            let (dy1, dy2) = (q[1].y - q[2].y, q[3].y - q[2].y);
            let den = dx1 * dy2 - dx2 * dy1;
            if den.abs() < 1e-12 {
                return None;
            }
            ((sx * dy2 - dx2 * sy) / den, (dx1 * sy - sx * dy1) / den)
        };
        Some(Self {
            a: q[1].x - q[0].x + g * q[1].x,
            b: q[3].x - q[0].x + h * q[3].x,
            c: q[0].x,
            d: q[1].y - q[0].y + g * q[1].y,
            e: q[3].y - q[0].y + h * q[3].y,
            f: q[0].y,
            g,
            h,
        })
    }

    fn map(&self, u: f64, v: f64) -> Vec2<f64> {
        let w = self.g * u + self.h * v + 1.0;
        Vec2::new(
            (self.a * u + self.b * v + self.c) / w,
            (self.d * u + self.e * v + self.f) / w,
        )
    }
}

/// Rectify the quad into a `cells` x `cells` grid and return the mean of the
/// central half of every cell, row-major.
fn sample_cells(gray: &GrayImage, quad: &[Vec2<f64>; 4], cells: usize) -> Option<Vec<u8>> {
    let warp = SquareToQuad::new(quad)?;
    let side = cells as u32 * CELL_PX;
    let mut rectified = GrayImage::new(side, side);
    warp_into_with(
        gray,
        |x, y| {
            let u = (x as f64 + 0.5) / side as f64;
            let v = (y as f64 + 0.5) / side as f64;
            let p = warp.map(u, v);
            // off-image positions read as the default
            if p.is_finite() { (p.x as f32, p.y as f32) } else { (-1.0, -1.0) }
        },
        Interpolation::Bilinear,
        Luma([255]),
        &mut rectified,
    );

    let inset = CELL_PX / 4;
    let span = CELL_PX / 2;
    let mut means = Vec::with_capacity(cells * cells);
    for row in 0..cells as u32 {
        for col in 0..cells as u32 {
            let (x0, y0) = (col * CELL_PX + inset, row * CELL_PX + inset);
            let mut sum = 0u32;
            for y in y0..y0 + span {
                for x in x0..x0 + span {
                    sum += rectified.get_pixel(x, y)[0] as u32;
                }
            }
            means.push((sum / (span * span)) as u8);
        }
    }
    Some(means)
}

/// Read the bit grid inside `quad`, or `None` when the border ring is not dark
/// or the cells lack contrast.
fn read_bits(gray: &GrayImage, quad: &[Vec2<f64>; 4], grid: usize) -> Option<u64> {
    let cells = grid + 2;
    let means = sample_cells(gray, quad, cells)?;

    let lo = means.iter().copied().min()?;
    let hi = means.iter().copied().max()?;
    if hi - lo < MIN_CELL_CONTRAST {
        return None;
    }

    let cell_image = GrayImage::from_raw(cells as u32, cells as u32, means)?;
    let threshold = otsu_level(&cell_image);
    let white = |row: usize, col: usize| cell_image.get_pixel(col as u32, row as u32)[0] > threshold;

    let last = cells - 1;
    let border_errors = (0..cells)
        .flat_map(|row| (0..cells).map(move |col| (row, col)))
        .filter(|&(row, col)| row == 0 || col == 0 || row == last || col == last)
        .filter(|&(row, col)| white(row, col))
        .count();
    if border_errors as f64 > MAX_BORDER_ERROR_RATE * (4 * last) as f64 {
        return None;
    }

    let mut code = 0u64;
    for row in 1..=grid {
        for col in 1..=grid {
            code = (code << 1) | white(row, col) as u64;
        }
    }
    Some(code)
}

/// Four-corner convex, roughly square outline of a component, clockwise,
/// starting top-left.
fn quad_candidate(component: &TracedComponent, min_perimeter: f64) -> Option<[Vec2<f64>; 4]> {
    let contour = &component.contour;
    if contour.len() < 4 {
        return None;
    }
    let perimeter = contour.perimeter();
    if perimeter < min_perimeter {
        return None;
    }

    // start on an extreme point so no edge is split across the seam
    let points = contour.points();
    let first = points[0];
    let far = (0..points.len())
        .max_by_key(|&i| (points[i].x - first.x).pow(2) + (points[i].y - first.y).pow(2))
        .unwrap_or(0);
    let mut curve = points.to_vec();
    curve.rotate_left(far);

    let approx = approximate_polygon_dp(&curve, APPROX_EPSILON_RATE * perimeter, true);
    let [a, b, c, d] = approx.as_slice() else {
        return None;
    };
    let mut quad = [a, b, c, d].map(|p| Vec2::new(p.x as f64, p.y as f64));
    if !polygon::is_convex(&quad) || polygon::edge_ratio(&quad) < MIN_EDGE_RATIO {
        return None;
    }

    if polygon::signed_area(&quad) < 0.0 {
        quad.reverse();
    }
    let start = (0..4)
        .min_by(|&i, &j| {
            let (a, b) = (quad[i], quad[j]);
            (a.x + a.y).total_cmp(&(b.x + b.y)).then(i.cmp(&j))
        })
        .unwrap_or(0);
    quad.rotate_left(start);
    Some(quad)
}

pub(crate) fn detect_in(
    gray: &GrayImage,
    components: &[TracedComponent],
    dictionary: &MarkerDictionary,
) -> Vec<MarkerDetection> {
    let grid = dictionary.grid_size();
    let min_perimeter = 4.0 * (grid + 2) as f64 * MIN_CELL_PX;

    let mut detections: Vec<MarkerDetection> = Vec::new();
    for component in components {
        let Some(quad) = quad_candidate(component, min_perimeter) else {
            continue;
        };
        let Some(bits) = read_bits(gray, &quad, grid) else {
            continue;
        };
        let Some(matched) = dictionary.identify(bits) else {
            continue;
        };

        let mut corners = quad;
        corners.rotate_left(matched.rotation as usize);
        let detection = MarkerDetection {
            corners,
            id: matched.id,
            code: matched.code,
            rotation: matched.rotation,
        };

        // nested outlines of one marker collapse to the larger
        let center = detection.center();
        let radius = detection.perimeter() / 8.0;
        match detections
            .iter_mut()
            .find(|d| d.center().distance_to(center) < radius.min(d.perimeter() / 8.0))
        {
            Some(existing) if existing.area() < detection.area() => *existing = detection,
            Some(_) => {}
            None => detections.push(detection),
        }
    }

    log::debug!("marker candidates: {} accepted", detections.len());
    detections
}

/// Detect every marker of the configured dictionary in an RGB frame.
pub fn detect_markers(frame: &Tensor<u8>, config: &MeasureConfig) -> Result<Vec<MarkerDetection>, MeasureError> {
    let gray = luma(frame)?;
    let mask = adaptive_threshold(&gray, config.threshold_block(), config.threshold_offset());
    let components = trace_components(&mask);
    Ok(detect_in(&gray, &components, config.dictionary()))
}

fn selection_order(a: &MarkerDetection, b: &MarkerDetection) -> Ordering {
    b.area()
        .total_cmp(&a.area())
        .then(a.corner_sum().total_cmp(&b.corner_sum()))
        .then_with(|| match (a.id, b.id) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.code.cmp(&b.code),
        })
}

/// Pick the calibration marker: largest area, then lowest corner coordinate
/// sum, then lowest id.
pub fn select_marker(detections: &[MarkerDetection]) -> Option<&MarkerDetection> {
    detections.iter().min_by(|a, b| selection_order(a, b))
}

/// Choose a marker and derive the frame's scale.
///
/// Degenerate markers are dropped before selection, so `None` means no usable
/// marker in this frame.
pub fn calibrate(detections: &[MarkerDetection], physical_perimeter: f64) -> Option<Calibration> {
    let usable: Vec<(MarkerDetection, ScaleFactor)> = detections
        .iter()
        .filter_map(|d| {
            let scale = ScaleFactor::from_perimeter(d.perimeter(), physical_perimeter);
            if scale.is_none() {
                log::debug!("dropping degenerate marker, perimeter {:.3} px", d.perimeter());
            }
            Some((d.clone(), scale?))
        })
        .collect();

    let (marker, scale) = usable
        .into_iter()
        .min_by(|(a, _), (b, _)| selection_order(a, b))?;
    Some(Calibration { marker, scale })
}
