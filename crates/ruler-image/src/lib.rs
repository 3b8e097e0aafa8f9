//! Image decoding and encoding for the ruler workspace.
//!
//! Wraps the `image` crate: encoded bytes become `Tensor` frames in HWC layout
//! `[height, width, channels]`, and annotated RGB frames go back out as PNG or JPEG.

pub mod error;
pub mod types;

pub use error::ImageError;
pub use types::DecodedImage;

use crates_image::{DynamicImage, ExtendedColorType, ImageEncoder};
use ruler_base::Tensor;
use std::path::Path;

fn to_tensor<T>(width: u32, height: u32, channels: usize, data: Vec<T>) -> Result<Tensor<T>, ImageError> {
    Ok(Tensor::new(vec![height as usize, width as usize, channels], data)?)
}

/// Decodes an image from raw bytes, auto-detecting the format.
///
/// Sample precision is preserved (u8, u16 or f32). Color types the workspace does not
/// model are converted to RGBA8.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_image(data: &[u8]) -> Result<DecodedImage, ImageError> {
    let img = crates_image::load_from_memory(data)?;
    let (width, height) = (img.width(), img.height());

    match img {
        DynamicImage::ImageLuma8(buf) => Ok(DecodedImage::U8(to_tensor(width, height, 1, buf.into_raw())?)),
        DynamicImage::ImageLumaA8(buf) => Ok(DecodedImage::U8(to_tensor(width, height, 2, buf.into_raw())?)),
        DynamicImage::ImageRgb8(buf) => Ok(DecodedImage::U8(to_tensor(width, height, 3, buf.into_raw())?)),
        DynamicImage::ImageRgba8(buf) => Ok(DecodedImage::U8(to_tensor(width, height, 4, buf.into_raw())?)),
        DynamicImage::ImageLuma16(buf) => Ok(DecodedImage::U16(to_tensor(width, height, 1, buf.into_raw())?)),
        DynamicImage::ImageLumaA16(buf) => Ok(DecodedImage::U16(to_tensor(width, height, 2, buf.into_raw())?)),
        DynamicImage::ImageRgb16(buf) => Ok(DecodedImage::U16(to_tensor(width, height, 3, buf.into_raw())?)),
        DynamicImage::ImageRgba16(buf) => Ok(DecodedImage::U16(to_tensor(width, height, 4, buf.into_raw())?)),
        DynamicImage::ImageRgb32F(buf) => Ok(DecodedImage::F32(to_tensor(width, height, 3, buf.into_raw())?)),
        DynamicImage::ImageRgba32F(buf) => Ok(DecodedImage::F32(to_tensor(width, height, 4, buf.into_raw())?)),
        _ => {
            let rgba = img.to_rgba8();
            Ok(DecodedImage::U8(to_tensor(width, height, 4, rgba.into_raw())?))
        }
    }
}

/// Normalizes any decoded image to an 8-bit RGB frame `[h, w, 3]`.
///
/// Gray is replicated into all three channels, alpha is dropped.
pub fn to_rgb8(image: DecodedImage) -> Result<Tensor<u8>, ImageError> {
    let tensor = image.into_u8();
    let (height, width, channels) = tensor
        .hwc()
        .ok_or_else(|| ImageError::Decode(format!("expected HWC image, got shape {:?}", tensor.shape)))?;

    let data = match channels {
        3 => tensor.data,
        4 => tensor.data.chunks_exact(4).flat_map(|c| [c[0], c[1], c[2]]).collect(),
        1 => tensor.data.iter().flat_map(|&v| [v, v, v]).collect(),
        2 => tensor.data.chunks_exact(2).flat_map(|c| [c[0], c[0], c[0]]).collect(),
        _ => {
            return Err(ImageError::Decode(format!(
                "unsupported channel count: {channels}"
            )));
        }
    };

    Ok(Tensor::new(vec![height, width, 3], data)?)
}

/// Reads and decodes an image file into an RGB frame.
pub fn load_rgb8(path: impl AsRef<Path>) -> Result<Tensor<u8>, ImageError> {
    let bytes = std::fs::read(path)?;
    to_rgb8(decode_image(&bytes)?)
}

fn rgb_dimensions(frame: &Tensor<u8>) -> Result<(u32, u32), ImageError> {
    match frame.hwc() {
        Some((height, width, 3)) if frame.data.len() == height * width * 3 => {
            Ok((width as u32, height as u32))
        }
        _ => Err(ImageError::Encode(format!(
            "expected [h, w, 3] frame, got shape {:?}",
            frame.shape
        ))),
    }
}

/// Encodes an RGB frame as PNG bytes.
pub fn encode_png(frame: &Tensor<u8>) -> Result<Vec<u8>, ImageError> {
    let (width, height) = rgb_dimensions(frame)?;
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(&frame.data, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encodes an RGB frame as JPEG bytes, `quality` in 1..=100.
pub fn encode_jpeg(frame: &Tensor<u8>, quality: u8) -> Result<Vec<u8>, ImageError> {
    let (width, height) = rgb_dimensions(frame)?;
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(&frame.data, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Writes an RGB frame to `path`; the format follows the file extension.
pub fn save_rgb8(path: impl AsRef<Path>, frame: &Tensor<u8>) -> Result<(), ImageError> {
    let (width, height) = rgb_dimensions(frame)?;
    crates_image::save_buffer(path, &frame.data, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ImageError::Encode(e.to_string()))
}
