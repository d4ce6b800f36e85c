pub mod error;
pub mod reader;
pub mod types;

pub use error::{PakError, Result};
pub use reader::{extract, parse_directory, sanitize_name};
pub use types::{PakEntry, PakRecord};
