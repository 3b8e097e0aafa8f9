use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    Device(String),
    Stream(String),
    Decode(ruler_image::ImageError),
    Channel(String),
    /// The source has no more frames (finite sources only).
    EndOfStream,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
            CameraError::EndOfStream => write!(f, "end of stream"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<ruler_image::ImageError> for CameraError {
    fn from(err: ruler_image::ImageError) -> Self {
        CameraError::Decode(err)
    }
}

impl From<ruler_base::TensorError> for CameraError {
    fn from(err: ruler_base::TensorError) -> Self {
        CameraError::Stream(err.to_string())
    }
}
