use crate::{Camera, CameraConfig, CameraError, convert::yuyv_to_rgb};
use ruler_base::Tensor;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum WireFormat {
    Mjpeg,
    Yuyv,
}

/// V4L2 capture device.
///
/// Frames are captured on a dedicated thread and handed over through a bounded
/// channel; the thread starts on the first `recv`.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    format: WireFormat,
    size: (u32, u32),
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("format", &self.format)
            .field("size", &self.size)
            .field("running", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("Receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("Channel closed".to_string()))?
    }

    fn close(&mut self) {
        // dropping the receiver makes the capture thread's next send fail
        drop(self.receiver.take());
        self.device.take();
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        self.close();
    }
}

impl V4l2Camera {
    /// Open the device named by `config`.
    ///
    /// MJPEG is requested first; devices that refuse it are driven in YUYV.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened or supports
    /// neither format.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let path = config.device().ok_or_else(|| {
            CameraError::Device("V4l2Camera needs a device path".to_string())
        })?;
        let device = Device::with_path(path)?;

        let mut format = Capture::set_format(
            &device,
            &Format::new(config.width(), config.height(), FourCC::new(b"MJPG")),
        )?;
        let wire = if format.fourcc == FourCC::new(b"MJPG") {
            WireFormat::Mjpeg
        } else {
            format = Capture::set_format(
                &device,
                &Format::new(config.width(), config.height(), FourCC::new(b"YUYV")),
            )?;
            if format.fourcc != FourCC::new(b"YUYV") {
                return Err(CameraError::Device(format!(
                    "device offers neither MJPG nor YUYV (got {})",
                    format.fourcc
                )));
            }
            WireFormat::Yuyv
        };

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        log::info!(
            "v4l2: opened {} at {}x{} {:?}",
            path,
            format.width,
            format.height,
            wire
        );

        Ok(Self {
            config,
            device: Some(device),
            format: wire,
            size: (format.width, format.height),
            receiver: None,
            thread_handle: None,
        })
    }

    /// Negotiated frame size `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("Device closed".to_string()))?;

        let buffer_count = self.config.buffer_count().max(1) as usize;
        let (tx, rx) = mpsc::channel(buffer_count);
        let format = self.format;
        let size = self.size;

        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, tx, buffer_count, format, size) {
                log::error!("v4l2 capture thread stopped: {}", e);
            }
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);
        Ok(())
    }

    fn decode(format: WireFormat, size: (u32, u32), data: &[u8]) -> FrameResult {
        match format {
            WireFormat::Mjpeg => Ok(ruler_image::to_rgb8(ruler_image::decode_image(data)?)?),
            WireFormat::Yuyv => {
                let (width, height) = size;
                let rgb = yuyv_to_rgb(data, width, height).ok_or_else(|| {
                    CameraError::Stream(format!("short YUYV frame: {} bytes", data.len()))
                })?;
                Ok(Tensor::new(vec![height as usize, width as usize, 3], rgb)?)
            }
        }
    }

    fn capture_loop(
        device: Device,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
        format: WireFormat,
        size: (u32, u32),
    ) -> Result<(), CameraError> {
        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)?;

        loop {
            let (frame_data, _metadata) = CaptureStream::next(&mut stream)?;

            // a corrupt frame is reported to the consumer, the stream keeps going
            let frame = Self::decode(format, size, frame_data);

            if tx.blocking_send(frame).is_err() {
                log::debug!("v4l2: receiver dropped, stopping capture");
                break;
            }
        }

        Ok(())
    }
}
