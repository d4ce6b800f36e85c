use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmcTextError>;

#[derive(Error, Debug)]
pub enum EmcTextError {
    #[error("IFF container error: {0}")]
    Iff(#[from] iff::IffError),
}
