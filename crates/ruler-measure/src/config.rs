use crate::annotate::AnnotateStyle;
use crate::{DictionaryId, MarkerDictionary, MeasureError};
use ruler_base::Vec2;

/// Immutable settings for one run of the pipeline.
#[derive(Clone, Debug)]
pub struct MeasureConfig {
    dictionary: MarkerDictionary,
    marker_perimeter: f64,
    min_object_area: f64,
    threshold_block: usize,
    threshold_offset: f64,
    unit: String,
    width_label_offset: Vec2<i32>,
    height_label_offset: Vec2<i32>,
    style: AnnotateStyle,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            dictionary: MarkerDictionary::new(DictionaryId::Dict5x5_50),
            marker_perimeter: 20.0,
            min_object_area: 2000.0,
            threshold_block: 19,
            threshold_offset: 5.0,
            unit: "cm".to_string(),
            width_label_offset: Vec2::new(-100, -20),
            height_label_offset: Vec2::new(-100, 15),
            style: AnnotateStyle::default(),
        }
    }
}

impl MeasureConfig {
    /// Marker family to detect, with its embedded library.
    pub fn with_dictionary(mut self, id: DictionaryId) -> Self {
        self.dictionary = MarkerDictionary::new(id);
        self
    }

    pub fn with_marker_dictionary(mut self, dictionary: MarkerDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Physical length of the four marker edges together.
    pub fn with_marker_perimeter(mut self, perimeter: f64) -> Self {
        self.marker_perimeter = perimeter;
        self
    }

    /// Objects must enclose strictly more than this many square pixels.
    pub fn with_min_object_area(mut self, area: f64) -> Self {
        self.min_object_area = area;
        self
    }

    /// Adaptive threshold window, rounded up to an odd size of at least 3.
    pub fn with_threshold_block(mut self, block: usize) -> Self {
        self.threshold_block = block.max(3) | 1;
        self
    }

    pub fn with_threshold_offset(mut self, offset: f64) -> Self {
        self.threshold_offset = offset;
        self
    }

    /// Unit name printed in labels.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Label positions relative to the object center.
    pub fn with_label_offsets(mut self, width: Vec2<i32>, height: Vec2<i32>) -> Self {
        self.width_label_offset = width;
        self.height_label_offset = height;
        self
    }

    pub fn with_style(mut self, style: AnnotateStyle) -> Self {
        self.style = style;
        self
    }

    pub fn dictionary(&self) -> &MarkerDictionary {
        &self.dictionary
    }

    pub fn marker_perimeter(&self) -> f64 {
        self.marker_perimeter
    }

    pub fn min_object_area(&self) -> f64 {
        self.min_object_area
    }

    pub fn threshold_block(&self) -> usize {
        self.threshold_block
    }

    pub fn threshold_offset(&self) -> f64 {
        self.threshold_offset
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn width_label_offset(&self) -> Vec2<i32> {
        self.width_label_offset
    }

    pub fn height_label_offset(&self) -> Vec2<i32> {
        self.height_label_offset
    }

    pub fn style(&self) -> &AnnotateStyle {
        &self.style
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), MeasureError> {
        if !(self.marker_perimeter.is_finite() && self.marker_perimeter > 0.0) {
            return Err(MeasureError::Config(format!(
                "marker perimeter must be positive, got {}",
                self.marker_perimeter
            )));
        }
        if !(self.min_object_area.is_finite() && self.min_object_area >= 0.0) {
            return Err(MeasureError::Config(format!(
                "minimum object area must be non-negative, got {}",
                self.min_object_area
            )));
        }
        if !self.threshold_offset.is_finite() {
            return Err(MeasureError::Config("threshold offset must be finite".to_string()));
        }
        Ok(())
    }
}
