use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// The frame has a zero dimension or no pixel data.
    EmptyFrame,
    /// The frame is not an `[h, w, 3]` buffer of matching length.
    InvalidFrame(String),
    /// A configuration value is out of range or cannot be parsed.
    Config(String),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::EmptyFrame => write!(f, "empty frame"),
            MeasureError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            MeasureError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for MeasureError {}
