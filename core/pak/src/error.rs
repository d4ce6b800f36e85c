use thiserror::Error;

pub type Result<T> = std::result::Result<T, PakError>;

#[derive(Error, Debug)]
pub enum PakError {
    #[error("PAK file too small to hold a directory offset: {0} bytes")]
    TooSmall(usize),
    #[error("PAK directory has no entries")]
    EmptyDirectory,
}
