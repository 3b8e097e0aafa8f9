use crate::CameraError;
use ruler_base::Tensor;

/// A frame source with an explicit lifecycle.
///
/// Constructors open the underlying device. `recv` returns the next frame as an
/// RGB `Tensor<u8>` with shape `[height, width, 3]`. `close` releases the device;
/// implementations also release it on drop, and `recv` after `close` fails.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame.
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError>;

    /// Release the device. Calling it more than once is harmless.
    fn close(&mut self);
}
