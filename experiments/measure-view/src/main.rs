mod settings;

use minifb::{Key, Window, WindowOptions};
use ruler_base::{Tensor, init_file_logger, init_stdout_logger};
use ruler_camera::config::SourceKind;
use ruler_camera::{Camera, CameraError, ImageSequence};
use ruler_measure::draw::rgb_to_argb;
use ruler_measure::{FrameMeasurements, annotate, process};
use settings::Settings;
use std::error::Error;
use std::time::Instant;

fn open_window(settings: &Settings) -> Result<Window, minifb::Error> {
    let mut window = Window::new(
        "Measure View - ESC to exit",
        settings.width as usize,
        settings.height as usize,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(30);
    Ok(window)
}

fn log_measurements(index: u64, result: &FrameMeasurements, unit: &str) {
    let Some(scale) = result.scale else {
        log::debug!("frame {index}: no marker");
        return;
    };
    log::debug!(
        "frame {index}: {:.2} px/{unit}, {} objects",
        scale.pixels_per_unit(),
        result.objects.len()
    );
    for (i, object) in result.objects.iter().enumerate() {
        let m = &object.measurement;
        log::info!(
            "frame {index} object {i}: {:.1} x {:.1} {unit} at ({:.0}, {:.0})",
            m.width,
            m.height,
            m.center.x,
            m.center.y
        );
    }
}

fn save_frame(settings: &Settings, index: u64, frame: &Tensor<u8>) {
    let Some(dir) = &settings.output_dir else {
        return;
    };
    let path = dir.join(format!("frame_{index:06}.png"));
    if let Err(e) = ruler_image::save_rgb8(&path, frame) {
        log::warn!("cannot write {}: {e}", path.display());
    }
}

/// Calibrate, measure and annotate frames from `camera` until ESC or the end of
/// the stream.
async fn run<C: Camera>(camera: &mut C, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let config = settings.measure_config();
    let mut window = if settings.headless {
        None
    } else {
        Some(open_window(settings)?)
    };

    let mut index = 0u64;
    loop {
        if let Some(window) = &window {
            if !window.is_open() || window.is_key_down(Key::Escape) {
                break;
            }
        }
        let started = Instant::now();

        let mut frame = match camera.recv().await {
            Ok(frame) => frame,
            Err(CameraError::EndOfStream) => {
                log::info!("end of stream after {index} frames");
                break;
            }
            Err(e @ CameraError::Channel(_)) => return Err(e.into()),
            Err(e) => {
                log::warn!("frame {index}: {e}");
                continue;
            }
        };

        match process(&frame, &config) {
            Ok(result) => {
                log_measurements(index, &result, config.unit());
                if let Err(e) = annotate(&mut frame, result.marker.as_ref(), &result.objects, &config) {
                    log::warn!("frame {index}: cannot annotate: {e}");
                }
            }
            Err(e) => log::warn!("frame {index}: {e}"),
        }

        save_frame(settings, index, &frame);
        if let (Some(window), Some((height, width, _))) = (window.as_mut(), frame.hwc()) {
            window.update_with_buffer(&rgb_to_argb(&frame.data), width, height)?;
        }
        index += 1;

        let elapsed = started.elapsed();
        if elapsed < settings.frame_interval {
            tokio::time::sleep(settings.frame_interval - elapsed).await;
        }
    }

    camera.close();
    Ok(())
}

#[cfg(feature = "v4l2")]
async fn run_device(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let mut camera = ruler_camera::V4l2Camera::new(settings.camera_config())?;
    run(&mut camera, settings).await
}

#[cfg(not(feature = "v4l2"))]
async fn run_device(settings: &Settings) -> Result<(), Box<dyn Error>> {
    Err(format!(
        "{} is not a directory and measure-view was built without the v4l2 feature",
        settings.source
    )
    .into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;
    match &settings.log_dir {
        Some(dir) => init_file_logger(dir)?,
        None => init_stdout_logger(),
    }

    log::info!(
        "measure-view: source {}, dictionary {}, marker perimeter {} {}",
        settings.source,
        settings.dictionary,
        settings.marker_perimeter,
        settings.unit
    );
    if let Some(dir) = &settings.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let camera_config = settings.camera_config();
    match camera_config.source() {
        SourceKind::Directory(_) => {
            let mut camera = ImageSequence::new(&camera_config)?;
            run(&mut camera, &settings).await?;
        }
        SourceKind::Device(_) => run_device(&settings).await?,
    }

    log::info!("exiting");
    Ok(())
}
