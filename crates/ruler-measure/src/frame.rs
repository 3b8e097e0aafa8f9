use crate::MeasureError;
use crates_image::{RgbImage, imageops};
use imageproc::filter::box_filter;
use ruler_base::Tensor;

pub use crates_image::{GrayImage, Luma};

/// Mask value of a foreground pixel; background is 0.
pub const FOREGROUND: u8 = 255;

/// Check that `frame` is a non-empty `[h, w, 3]` buffer, returning `(width, height)`.
///
/// # Errors
///
/// `MeasureError::EmptyFrame` for zero dimensions or no data,
/// `MeasureError::InvalidFrame` for any other shape or a length mismatch.
pub fn validate_frame(frame: &Tensor<u8>) -> Result<(usize, usize), MeasureError> {
    if frame.data.is_empty() || frame.shape.is_empty() || frame.shape.contains(&0) {
        return Err(MeasureError::EmptyFrame);
    }
    let (height, width, channels) = frame.hwc().ok_or_else(|| {
        MeasureError::InvalidFrame(format!("expected [h, w, 3], got shape {:?}", frame.shape))
    })?;
    if channels != 3 {
        return Err(MeasureError::InvalidFrame(format!(
            "expected 3 channels, got {channels}"
        )));
    }
    let expected = height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| MeasureError::InvalidFrame("frame dimensions overflow".to_string()))?;
    if frame.data.len() != expected {
        return Err(MeasureError::InvalidFrame(format!(
            "expected {expected} bytes for shape {:?}, got {}",
            frame.shape,
            frame.data.len()
        )));
    }
    Ok((width, height))
}

/// Luma of an RGB frame.
pub fn luma(frame: &Tensor<u8>) -> Result<GrayImage, MeasureError> {
    let (width, height) = validate_frame(frame)?;
    let too_large = || MeasureError::InvalidFrame(format!("frame of {width}x{height} is too large"));
    let width = u32::try_from(width).map_err(|_| too_large())?;
    let height = u32::try_from(height).map_err(|_| too_large())?;
    let rgb = RgbImage::from_raw(width, height, frame.data.clone())
        .ok_or_else(|| MeasureError::InvalidFrame(format!("frame does not fit {width}x{height}")))?;
    Ok(imageops::grayscale(&rgb))
}

/// Inverted mean-C adaptive threshold.
///
/// A pixel is foreground when it is at least `offset` darker than the mean of the
/// `block` x `block` window around it; the window repeats the border pixels past
/// the image edge.
pub fn adaptive_threshold(gray: &GrayImage, block: usize, offset: f64) -> GrayImage {
    // clamp the window to the image size
    let largest_side = gray.width().max(gray.height()) as usize;
    let radius = (block.max(3) / 2).min(largest_side) as u32;
    let mean = box_filter(gray, radius, radius);
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let value = gray.get_pixel(x, y)[0] as f64;
        let local = mean.get_pixel(x, y)[0] as f64;
        Luma([if value <= local - offset { FOREGROUND } else { 0 }])
    })
}

/// Number of foreground pixels in a mask.
pub fn foreground_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] != 0).count()
}
