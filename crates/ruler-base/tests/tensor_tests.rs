use ruler_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_frame() {
    let frame = Tensor::new(vec![2, 3, 3], vec![0u8; 18]).unwrap();
    assert_eq!(frame.ndim(), 3);
    assert_eq!(frame.len(), 18);
    assert_eq!(frame.hwc(), Some((2, 3, 3)));
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3, 3], vec![0u8; 17]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch {
            expected: 18,
            got: 17
        }
    );
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<u8>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_filled_and_zeros() {
    let white = Tensor::filled(vec![2, 2, 3], 255u8).unwrap();
    assert!(white.data.iter().all(|&v| v == 255));
    let black = Tensor::<u8>::zeros(vec![0, 4, 3]).unwrap();
    assert!(black.is_empty());
    assert_eq!(black.hwc(), Some((0, 4, 3)));
}

#[test]
fn test_hwc_requires_three_dims() {
    let flat = Tensor::new(vec![6], vec![0u8; 6]).unwrap();
    assert_eq!(flat.hwc(), None);
}

#[test]
fn test_debug_prints_shape_only() {
    let frame = Tensor::new(vec![1, 1, 3], vec![1u8, 2, 3]).unwrap();
    let text = format!("{:?}", frame);
    assert!(text.contains("shape: [1, 1, 3]"));
    assert!(text.contains("len: 3"));
}
