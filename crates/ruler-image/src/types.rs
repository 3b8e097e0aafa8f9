use ruler_base::Tensor;

/// A decoded image at its original sample precision, HWC layout.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedImage {
    U8(Tensor<u8>),
    U16(Tensor<u16>),
    F32(Tensor<f32>),
}

impl DecodedImage {
    pub fn shape(&self) -> &[usize] {
        match self {
            DecodedImage::U8(t) => &t.shape,
            DecodedImage::U16(t) => &t.shape,
            DecodedImage::F32(t) => &t.shape,
        }
    }

    pub fn height(&self) -> usize {
        self.shape()[0]
    }

    pub fn width(&self) -> usize {
        self.shape()[1]
    }

    pub fn channels(&self) -> usize {
        self.shape()[2]
    }

    /// Samples reduced to 8 bits: u16 keeps the high byte, f32 maps [0, 1] to [0, 255].
    pub fn into_u8(self) -> Tensor<u8> {
        match self {
            DecodedImage::U8(t) => t,
            DecodedImage::U16(t) => Tensor {
                shape: t.shape,
                data: t.data.iter().map(|&v| (v >> 8) as u8).collect(),
            },
            DecodedImage::F32(t) => Tensor {
                shape: t.shape,
                data: t
                    .data
                    .iter()
                    .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
                    .collect(),
            },
        }
    }
}
