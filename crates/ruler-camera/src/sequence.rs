use crate::{Camera, CameraConfig, CameraError, config::SourceKind};
use ruler_base::Tensor;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp", "gif"];

/// Replays still images as a frame stream.
///
/// Files are served in file name order. A non-looping sequence ends with
/// `CameraError::EndOfStream` after the last image.
#[derive(Debug)]
pub struct ImageSequence {
    paths: Vec<PathBuf>,
    next: usize,
    looping: bool,
    open: bool,
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

impl ImageSequence {
    /// Open the image directory named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the config names a device instead of a
    /// directory, the directory cannot be read, or it holds no images.
    pub fn new(config: &CameraConfig) -> Result<Self, CameraError> {
        let dir = match config.source() {
            SourceKind::Directory(dir) => dir,
            SourceKind::Device(device) => {
                return Err(CameraError::Device(format!(
                    "{device} is a capture device, not an image directory"
                )));
            }
        };

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_image(path))
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(CameraError::Device(format!(
                "no images found in {}",
                dir.display()
            )));
        }

        log::info!("image sequence: {} frames from {}", paths.len(), dir.display());
        Ok(Self::from_paths(paths, config.looping()))
    }

    /// Replay an explicit list of files in the given order.
    pub fn from_paths(paths: Vec<PathBuf>, looping: bool) -> Self {
        Self {
            paths,
            next: 0,
            looping,
            open: true,
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Camera for ImageSequence {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        if !self.open {
            return Err(CameraError::Device("image sequence is closed".to_string()));
        }
        if self.next >= self.paths.len() {
            if !self.looping || self.paths.is_empty() {
                return Err(CameraError::EndOfStream);
            }
            self.next = 0;
        }

        let path = self.paths[self.next].clone();
        self.next += 1;

        // decoding is CPU-bound, keep it off the async workers
        let frame = tokio::task::spawn_blocking(move || ruler_image::load_rgb8(&path))
            .await
            .map_err(|e| CameraError::Channel(e.to_string()))??;
        Ok(frame)
    }

    fn close(&mut self) {
        self.open = false;
        self.paths.clear();
    }
}
