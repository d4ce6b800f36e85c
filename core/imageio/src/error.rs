use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageIoError>;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("pixel buffer length {got} does not match width*height ({expected})")]
    PixelCountMismatch { expected: usize, got: usize },
    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
