use ruler_camera::CameraConfig;
use ruler_measure::{DictionaryId, MarkerDictionary, MeasureConfig, MeasureError};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Viewer settings, read from `RULER_*` environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub looping: bool,
    pub dictionary: DictionaryId,
    /// Take any square pattern with a dark border instead of the library.
    pub any_marker: bool,
    pub marker_perimeter: f64,
    pub min_area: f64,
    pub unit: String,
    pub frame_interval: Duration,
    pub headless: bool,
    pub output_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            looping: false,
            dictionary: DictionaryId::Dict5x5_50,
            any_marker: false,
            marker_perimeter: 20.0,
            min_area: 2000.0,
            unit: "cm".to_string(),
            frame_interval: Duration::from_millis(200),
            headless: false,
            output_dir: None,
            log_dir: None,
        }
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, MeasureError> {
    value
        .trim()
        .parse()
        .map_err(|_| MeasureError::Config(format!("{key}: cannot parse {value:?}")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, MeasureError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(MeasureError::Config(format!("{key}: expected a flag, got {value:?}"))),
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, MeasureError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MeasureError> {
        let mut settings = Self::default();

        if let Some(v) = lookup("RULER_SOURCE") {
            settings.source = v;
        }
        if let Some(v) = lookup("RULER_WIDTH") {
            settings.width = parse("RULER_WIDTH", &v)?;
        }
        if let Some(v) = lookup("RULER_HEIGHT") {
            settings.height = parse("RULER_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("RULER_LOOP") {
            settings.looping = parse_flag("RULER_LOOP", &v)?;
        }
        if let Some(v) = lookup("RULER_DICTIONARY") {
            settings.dictionary = v.parse()?;
        }
        if let Some(v) = lookup("RULER_ANY_MARKER") {
            settings.any_marker = parse_flag("RULER_ANY_MARKER", &v)?;
        }
        if let Some(v) = lookup("RULER_MARKER_PERIMETER") {
            settings.marker_perimeter = parse("RULER_MARKER_PERIMETER", &v)?;
        }
        if let Some(v) = lookup("RULER_MIN_AREA") {
            settings.min_area = parse("RULER_MIN_AREA", &v)?;
        }
        if let Some(v) = lookup("RULER_UNIT") {
            settings.unit = v;
        }
        if let Some(v) = lookup("RULER_FRAME_INTERVAL_MS") {
            settings.frame_interval = Duration::from_millis(parse("RULER_FRAME_INTERVAL_MS", &v)?);
        }
        if let Some(v) = lookup("RULER_HEADLESS") {
            settings.headless = parse_flag("RULER_HEADLESS", &v)?;
        }
        settings.output_dir = lookup("RULER_OUTPUT_DIR").filter(|v| !v.is_empty()).map(PathBuf::from);
        settings.log_dir = lookup("RULER_LOG_DIR").filter(|v| !v.is_empty()).map(PathBuf::from);

        settings.measure_config().validate()?;
        Ok(settings)
    }

    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig::default()
            .with_source(&self.source)
            .with_width(self.width)
            .with_height(self.height)
            .with_looping(self.looping)
    }

    pub fn measure_config(&self) -> MeasureConfig {
        let dictionary = if self.any_marker {
            MarkerDictionary::any_pattern(self.dictionary)
        } else {
            MarkerDictionary::new(self.dictionary)
        };
        MeasureConfig::default()
            .with_marker_dictionary(dictionary)
            .with_marker_perimeter(self.marker_perimeter)
            .with_min_object_area(self.min_area)
            .with_unit(self.unit.clone())
    }
}
