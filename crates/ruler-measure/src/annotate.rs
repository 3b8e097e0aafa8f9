use crate::draw::Canvas;
use crate::frame::validate_frame;
use crate::marker::MarkerDetection;
use crate::measure::MeasuredObject;
use crate::{MeasureConfig, MeasureError};
use ruler_base::{Tensor, Vec2};

/// Colors (RGB) and sizes of the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotateStyle {
    pub marker_color: [u8; 3],
    pub marker_thickness: u32,
    pub box_color: [u8; 3],
    pub box_thickness: u32,
    pub center_color: [u8; 3],
    pub center_radius: u32,
    pub label_color: [u8; 3],
    pub label_scale: u32,
}

impl Default for AnnotateStyle {
    fn default() -> Self {
        Self {
            marker_color: [0, 255, 0],
            marker_thickness: 5,
            box_color: [0, 0, 255],
            box_thickness: 2,
            center_color: [255, 0, 0],
            center_radius: 5,
            label_color: [0, 200, 100],
            label_scale: 2,
        }
    }
}

fn to_pixel(p: Vec2<f64>) -> Vec2<i64> {
    // `as` saturates and maps NaN to 0
    Vec2::new(p.x.round() as i64, p.y.round() as i64)
}

fn offset(p: Vec2<i64>, by: Vec2<i32>) -> Vec2<i64> {
    Vec2::new(p.x + by.x as i64, p.y + by.y as i64)
}

/// Draw the marker outline and every measured object onto `frame` in place.
///
/// Each object gets its rotated box, a center dot and the width and height
/// labels at the configured offsets. Anything off the frame is clipped.
///
/// # Errors
///
/// Only a malformed frame is an error (`EmptyFrame` / `InvalidFrame`).
pub fn annotate(
    frame: &mut Tensor<u8>,
    marker: Option<&MarkerDetection>,
    objects: &[MeasuredObject],
    config: &MeasureConfig,
) -> Result<(), MeasureError> {
    let (width, height) = validate_frame(frame)?;
    let mut canvas = Canvas::new(&mut frame.data, width, height)
        .ok_or_else(|| MeasureError::InvalidFrame("frame buffer size mismatch".to_string()))?;
    let style = config.style();

    if let Some(marker) = marker {
        let corners: Vec<Vec2<i64>> = marker.corners.iter().map(|&c| to_pixel(c)).collect();
        canvas.draw_polygon(&corners, style.marker_color, style.marker_thickness);
    }

    for object in objects {
        let corners: Vec<Vec2<i64>> = object.rect.box_points().iter().map(|&c| to_pixel(c)).collect();
        canvas.draw_polygon(&corners, style.box_color, style.box_thickness);

        let center = to_pixel(object.measurement.center);
        canvas.fill_circle(center, style.center_radius as i64, style.center_color);

        canvas.draw_text(
            &object.measurement.width_label(config.unit()),
            offset(center, config.width_label_offset()),
            style.label_scale,
            style.label_color,
        );
        canvas.draw_text(
            &object.measurement.height_label(config.unit()),
            offset(center, config.height_label_offset()),
            style.label_scale,
            style.label_color,
        );
    }
    Ok(())
}
