use ruler_base::Tensor;
use ruler_camera::{Camera, CameraConfig, CameraError, ImageSequence};
use std::path::PathBuf;

fn write_frames(name: &str, shades: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ruler-seq-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    for (i, &shade) in shades.iter().enumerate() {
        let frame = Tensor::filled(vec![4, 6, 3], shade).unwrap();
        ruler_image::save_rgb8(dir.join(format!("frame_{:03}.png", i)), &frame).unwrap();
    }
    std::fs::write(dir.join("notes.txt"), b"not an image").unwrap();
    dir
}

#[tokio::test]
async fn test_sequence_plays_in_name_order_then_ends() {
    let dir = write_frames("order", &[10, 20, 30]);
    let mut seq = ImageSequence::new(&CameraConfig::default().with_directory(&dir)).unwrap();
    assert_eq!(seq.len(), 3);

    for shade in [10u8, 20, 30] {
        let frame = seq.recv().await.unwrap();
        assert_eq!(frame.shape, vec![4, 6, 3]);
        assert_eq!(frame.data[0], shade);
    }
    assert!(matches!(seq.recv().await, Err(CameraError::EndOfStream)));

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_sequence_loops() {
    let dir = write_frames("loop", &[1, 2]);
    let config = CameraConfig::default().with_directory(&dir).with_looping(true);
    let mut seq = ImageSequence::new(&config).unwrap();

    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(seq.recv().await.unwrap().data[0]);
    }
    assert_eq!(seen, vec![1, 2, 1, 2, 1]);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_recv_after_close_fails() {
    let dir = write_frames("close", &[5]);
    let mut seq = ImageSequence::new(&CameraConfig::default().with_directory(&dir)).unwrap();
    seq.close();
    seq.close();
    assert!(matches!(seq.recv().await, Err(CameraError::Device(_))));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_sequence_rejects_device_config() {
    let result = ImageSequence::new(&CameraConfig::default());
    assert!(matches!(result, Err(CameraError::Device(_))));
}

#[test]
fn test_sequence_rejects_empty_directory() {
    let dir = write_frames("empty", &[]);
    let result = ImageSequence::new(&CameraConfig::default().with_directory(&dir));
    assert!(matches!(result, Err(CameraError::Device(_))));
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_camera_trait_is_generic() {
    async fn grab<C: Camera>(camera: &mut C, count: usize) -> Result<Vec<Tensor<u8>>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(camera.recv().await?);
        }
        Ok(frames)
    }

    let dir = write_frames("generic", &[7, 8]);
    let mut seq = ImageSequence::new(&CameraConfig::default().with_directory(&dir)).unwrap();
    let frames = grab(&mut seq, 2).await.unwrap();
    assert_eq!(frames.len(), 2);

    std::fs::remove_dir_all(&dir).ok();
}
