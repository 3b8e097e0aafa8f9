use crate::contour::{Contour, TracedComponent, trace_components};
use crate::frame::{adaptive_threshold, luma};
use crate::{MeasureConfig, MeasureError, polygon};
use ruler_base::{Tensor, Vec2};

/// Keep external outlines enclosing more than `min_area`, dropping any whose
/// centroid falls inside one of the `exclusions` polygons.
pub(crate) fn select_objects(
    components: &[TracedComponent],
    min_area: f64,
    exclusions: &[[Vec2<f64>; 4]],
) -> Vec<Contour> {
    components
        .iter()
        .filter(|c| c.external)
        .filter(|c| c.contour.area() > min_area)
        .filter(|c| {
            let centroid = c.contour.centroid();
            !exclusions.iter().any(|quad| polygon::contains_point(quad, centroid))
        })
        .map(|c| c.contour.clone())
        .collect()
}

/// Outlines of the foreground objects in an RGB frame.
///
/// Dark regions are found with the configured adaptive threshold; only outer
/// boundaries are kept, in raster order of each region's first pixel. Pass the
/// detected marker corners as `exclusions` so the marker is not reported as an
/// object.
pub fn segment_objects(
    frame: &Tensor<u8>,
    config: &MeasureConfig,
    exclusions: &[[Vec2<f64>; 4]],
) -> Result<Vec<Contour>, MeasureError> {
    let gray = luma(frame)?;
    let mask = adaptive_threshold(&gray, config.threshold_block(), config.threshold_offset());
    let components = trace_components(&mask);
    Ok(select_objects(&components, config.min_object_area(), exclusions))
}
