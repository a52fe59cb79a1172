use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrakturError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot allocate a {width}x{height} frame buffer")]
    FrameAllocation { width: u32, height: u32 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FrakturError>;
