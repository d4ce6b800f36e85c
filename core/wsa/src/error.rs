use thiserror::Error;

pub type Result<T> = std::result::Result<T, WsaError>;

#[derive(Error, Debug)]
pub enum WsaError {
    #[error("WSA header too small: need at least 14 bytes, got {0}")]
    HeaderTooSmall(usize),
    #[error("WSA header is unreadable with or without a flags word")]
    Unparseable,
}
