use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes `value` as pretty-printed JSON, creating the destination's
/// parent directory if needed.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}
