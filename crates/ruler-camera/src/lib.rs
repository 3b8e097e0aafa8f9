//! Frame acquisition for the ruler workspace.
//!
//! Every source implements the `Camera` trait: it is opened by its constructor,
//! yields RGB frames as `Tensor<u8>` `[height, width, 3]` from `recv`, and releases
//! its device on `close` or drop.

pub mod config;
pub mod convert;
pub mod error;
pub mod sequence;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use sequence::ImageSequence;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
