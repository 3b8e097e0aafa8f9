use ruler_camera::CameraError;
use ruler_image::ImageError;
use std::io;

#[test]
fn test_from_io_error() {
    let cam_err: CameraError = io::Error::new(io::ErrorKind::NotFound, "device not found").into();
    match cam_err {
        CameraError::Device(msg) => assert!(msg.contains("device not found")),
        other => panic!("Expected CameraError::Device, got {:?}", other),
    }
}

#[test]
fn test_from_image_error() {
    let cam_err: CameraError = ImageError::Decode("invalid JPEG".to_string()).into();
    assert!(matches!(cam_err, CameraError::Decode(_)));
}

#[test]
fn test_error_display() {
    assert!(CameraError::Device("V4L2 error".to_string()).to_string().contains("V4L2 error"));
    assert!(CameraError::Stream("short frame".to_string()).to_string().contains("short frame"));
    assert!(CameraError::Channel("channel closed".to_string()).to_string().contains("channel closed"));
    assert_eq!(CameraError::EndOfStream.to_string(), "end of stream");
}
