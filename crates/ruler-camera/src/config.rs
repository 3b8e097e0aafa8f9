use std::path::PathBuf;

/// Where frames come from.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceKind {
    /// A V4L2 capture device such as `/dev/video0`.
    Device(String),
    /// A directory of still images, read in file name order.
    Directory(PathBuf),
}

/// Configuration for frame acquisition.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    source: SourceKind,
    width: u32,
    height: u32,
    fps: u32,
    buffer_count: u32,
    looping: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Device("/dev/video0".to_string()),
            width: 640,
            height: 480,
            fps: 30,
            buffer_count: 4,
            looping: false,
        }
    }
}

impl CameraConfig {
    /// Capture from a V4L2 device path (e.g. "/dev/video0").
    pub fn with_device(mut self, device: String) -> Self {
        self.source = SourceKind::Device(device);
        self
    }

    /// Replay the images found in `dir`.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = SourceKind::Directory(dir.into());
        self
    }

    /// Pick the source from a single string: an existing directory replays images,
    /// anything else is treated as a device path.
    pub fn with_source(self, source: &str) -> Self {
        let path = PathBuf::from(source);
        if path.is_dir() {
            self.with_directory(path)
        } else {
            self.with_device(source.to_string())
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Number of frames buffered between the capture thread and `recv`.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Restart finite sources from the beginning instead of ending the stream.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn source(&self) -> &SourceKind {
        &self.source
    }

    /// Device path, if the source is a device.
    pub fn device(&self) -> Option<&str> {
        match &self.source {
            SourceKind::Device(device) => Some(device),
            SourceKind::Directory(_) => None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    pub fn looping(&self) -> bool {
        self.looping
    }
}
