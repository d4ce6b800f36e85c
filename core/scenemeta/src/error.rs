use thiserror::Error;

pub type Result<T> = std::result::Result<T, SceneMetaError>;

#[derive(Error, Debug)]
pub enum SceneMetaError {
    #[error("scene .DAT too small: need at least {needed} bytes, got {got}")]
    TooSmall { needed: usize, got: usize },
}
