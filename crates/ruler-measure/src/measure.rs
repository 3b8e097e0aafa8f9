use crate::contour::Contour;
use crate::shape::{OrientedRect, min_area_rect};
use crate::ScaleFactor;
use ruler_base::Vec2;

/// Physical size of one object. Values keep full precision; only the labels
/// are rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Pixel position of the object center.
    pub center: Vec2<f64>,
    pub width: f64,
    pub height: f64,
}

impl Measurement {
    /// Convert a pixel rectangle. `None` if the result is not finite.
    pub fn from_rect(rect: &OrientedRect, scale: ScaleFactor) -> Option<Self> {
        let measurement = Self {
            center: rect.center,
            width: scale.to_units(rect.width()),
            height: scale.to_units(rect.height()),
        };
        (measurement.center.is_finite() && measurement.width.is_finite() && measurement.height.is_finite())
            .then_some(measurement)
    }

    /// `"Width 12.3 cm"`
    pub fn width_label(&self, unit: &str) -> String {
        format!("Width {:.1} {unit}", self.width)
    }

    /// `"Height 4.0 cm"`
    pub fn height_label(&self, unit: &str) -> String {
        format!("Height {:.1} {unit}", self.height)
    }
}

/// A measured object: the fitted pixel rectangle and its physical size.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredObject {
    pub rect: OrientedRect,
    pub measurement: Measurement,
}

/// Fit and convert one contour.
pub fn measure_contour(contour: &Contour, scale: ScaleFactor) -> Option<MeasuredObject> {
    let rect = min_area_rect(contour.points());
    let measurement = Measurement::from_rect(&rect, scale)?;
    Some(MeasuredObject { rect, measurement })
}

/// One measured object per contour, in contour order.
pub fn measure_contours(contours: &[Contour], scale: ScaleFactor) -> Vec<MeasuredObject> {
    contours
        .iter()
        .filter_map(|contour| {
            let measured = measure_contour(contour, scale);
            if measured.is_none() {
                log::warn!("skipping non-finite measurement for contour of {} points", contour.len());
            }
            measured
        })
        .collect()
}
