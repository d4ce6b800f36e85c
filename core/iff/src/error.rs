use thiserror::Error;

pub type Result<T> = std::result::Result<T, IffError>;

#[derive(Error, Debug)]
pub enum IffError {
    #[error("IFF file too small: need at least 12 bytes, got {0}")]
    TooSmall(usize),
    #[error("bad IFF magic: expected \"FORM\", got {0:?}")]
    BadMagic([u8; 4]),
}
