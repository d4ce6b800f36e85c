pub mod error;
pub mod reader;
pub mod types;

pub use error::{IffError, Result};
pub use reader::parse;
pub use types::Form;
