use ruler_camera::CameraConfig;
use ruler_camera::config::SourceKind;

#[test]
fn test_default_config() {
    let config = CameraConfig::default();
    assert_eq!(config.device(), Some("/dev/video0"));
    assert_eq!(config.width(), 640);
    assert_eq!(config.height(), 480);
    assert_eq!(config.fps(), 30);
    assert_eq!(config.buffer_count(), 4);
    assert!(!config.looping());
}

#[test]
fn test_builder_setters() {
    let config = CameraConfig::default()
        .with_device("/dev/video2".to_string())
        .with_width(1280)
        .with_height(720)
        .with_fps(5)
        .with_buffer_count(2)
        .with_looping(true);
    assert_eq!(config.source(), &SourceKind::Device("/dev/video2".to_string()));
    assert_eq!(config.width(), 1280);
    assert_eq!(config.height(), 720);
    assert_eq!(config.fps(), 5);
    assert_eq!(config.buffer_count(), 2);
    assert!(config.looping());
}

#[test]
fn test_with_source_detects_directory() {
    let dir = std::env::temp_dir();
    let config = CameraConfig::default().with_source(dir.to_str().unwrap());
    assert_eq!(config.source(), &SourceKind::Directory(dir));
    assert_eq!(config.device(), None);

    let config = CameraConfig::default().with_source("/dev/nonexistent_camera");
    assert_eq!(config.device(), Some("/dev/nonexistent_camera"));
}
