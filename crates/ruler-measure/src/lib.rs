//! Marker-referenced object dimensioning.
//!
//! Per frame: find a square fiducial of known size, turn its pixel perimeter into
//! a pixels-per-unit scale, outline the dark objects around it, fit each a
//! minimum-area rectangle and report its size in physical units. Frames are
//! `Tensor<u8>` `[height, width, 3]` RGB; nothing is kept between frames.
//!
//! ```ignore
//! let config = MeasureConfig::default();
//! let result = ruler_measure::process(&frame, &config)?;
//! ruler_measure::annotate(&mut frame, result.marker.as_ref(), &result.objects, &config)?;
//! ```

pub mod annotate;
pub mod codebook;
pub mod config;
pub mod contour;
pub mod dictionary;
pub mod draw;
pub mod error;
pub mod font;
pub mod frame;
pub mod marker;
pub mod measure;
pub mod pipeline;
pub mod polygon;
pub mod segment;
pub mod shape;

pub use annotate::{AnnotateStyle, annotate};
pub use config::MeasureConfig;
pub use contour::{Contour, Point, TracedComponent, find_external_contours, trace_components};
pub use dictionary::{CodeMatch, DictionaryId, MarkerDictionary};
pub use error::MeasureError;
pub use frame::{GrayImage, Luma, adaptive_threshold, foreground_count, luma, validate_frame};
pub use marker::{Calibration, MarkerDetection, ScaleFactor, calibrate, detect_markers, select_marker};
pub use measure::{MeasuredObject, Measurement, measure_contour, measure_contours};
pub use pipeline::{FrameMeasurements, process};
pub use segment::segment_objects;
pub use shape::{OrientedRect, box_points, min_area_rect};
