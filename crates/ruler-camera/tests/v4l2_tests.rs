#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use ruler_camera::{CameraConfig, CameraError, V4l2Camera};

    #[test]
    fn test_v4l2_camera_invalid_device() {
        let config = CameraConfig::default().with_device("/dev/nonexistent_camera".to_string());
        match V4l2Camera::new(config) {
            Err(CameraError::Device(_)) => {}
            other => panic!("Expected CameraError::Device, got {:?}", other),
        }
    }

    #[test]
    fn test_v4l2_camera_rejects_directory_source() {
        let config = CameraConfig::default().with_directory(std::env::temp_dir());
        assert!(matches!(V4l2Camera::new(config), Err(CameraError::Device(_))));
    }
}
