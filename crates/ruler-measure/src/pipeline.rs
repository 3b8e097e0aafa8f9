use crate::contour::trace_components;
use crate::frame::{adaptive_threshold, luma};
use crate::marker::{MarkerDetection, ScaleFactor, calibrate, detect_in};
use crate::measure::{MeasuredObject, measure_contours};
use crate::segment::select_objects;
use crate::{MeasureConfig, MeasureError};

/// Everything measured in one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameMeasurements {
    pub marker: Option<MarkerDetection>,
    pub scale: Option<ScaleFactor>,
    pub objects: Vec<MeasuredObject>,
}

impl FrameMeasurements {
    pub fn is_calibrated(&self) -> bool {
        self.scale.is_some()
    }
}

/// Run calibrate, segment and measure on one RGB frame.
///
/// A frame without a usable marker yields `FrameMeasurements::default()`; no
/// state is carried between calls.
///
/// # Errors
///
/// `MeasureError::EmptyFrame` / `InvalidFrame` for a malformed frame,
/// `MeasureError::Config` for an unusable config.
pub fn process(frame: &ruler_base::Tensor<u8>, config: &MeasureConfig) -> Result<FrameMeasurements, MeasureError> {
    config.validate()?;
    let gray = luma(frame)?;
    let mask = adaptive_threshold(&gray, config.threshold_block(), config.threshold_offset());
    let components = trace_components(&mask);

    let detections = detect_in(&gray, &components, config.dictionary());
    let Some(calibration) = calibrate(&detections, config.marker_perimeter()) else {
        log::debug!("no marker in frame, skipping measurement");
        return Ok(FrameMeasurements::default());
    };

    let exclusions: Vec<_> = detections.iter().map(|d| d.corners).collect();
    let contours = select_objects(&components, config.min_object_area(), &exclusions);
    let objects = measure_contours(&contours, calibration.scale);

    log::debug!(
        "marker {:?} scale {:.3} px/unit, {} objects",
        calibration.marker.id,
        calibration.scale.pixels_per_unit(),
        objects.len()
    );

    Ok(FrameMeasurements {
        marker: Some(calibration.marker),
        scale: Some(calibration.scale),
        objects,
    })
}
