use thiserror::Error;

pub type Result<T> = std::result::Result<T, CpsError>;

#[derive(Error, Debug)]
pub enum CpsError {
    #[error("CPS header too small: need at least 10 bytes, got {0}")]
    HeaderTooSmall(usize),
    #[error("CPS palette region ({pal_size} bytes) exceeds file length {file_len}")]
    PaletteOutOfRange { pal_size: usize, file_len: usize },
    #[error("unsupported CPS compression type {0}")]
    UnsupportedCompression(u8),
    #[error("width/height must be supplied for a CPS whose image size isn't the canonical 64000")]
    MissingGeometry,
}
