use ndarray::Array2;

/// A completed render: packed RGBA pixels, row-major, shape = (height, width).
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub pixels: Array2<u32>,
}

impl Frame {
    pub fn new(pixels: Array2<u32>) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Flat RGBA byte view in row-major order, as texture uploads and image
    /// encoders expect it.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &packed in self.pixels.iter() {
            bytes.extend_from_slice(&packed.to_le_bytes());
        }
        bytes
    }
}
