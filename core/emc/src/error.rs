use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmcError>;

#[derive(Error, Debug)]
pub enum EmcError {
    #[error("IFF container error: {0}")]
    Iff(#[from] iff::IffError),
    #[error("not an EMC2 IFF form (form type was {0:?})")]
    NotEmc2Form([u8; 4]),
    #[error("missing required chunk {0:?}")]
    MissingChunk(&'static str),
}
