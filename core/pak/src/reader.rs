use crate::error::{PakError, Result};
use crate::types::PakEntry;
use byteorder::{ByteOrder, LE};

/// Parses the flat directory at the front of a PAK archive.
///
/// The first u32 doubles as both the offset of the first file's data and
/// the sentinel that ends the directory walk: entries are read from byte
/// 0 until the cursor reaches it. A name byte outside 7-bit printable
/// ASCII is treated as directory corruption and truncates parsing at the
/// last good entry rather than raising.
pub fn parse_directory(data: &[u8]) -> Result<Vec<PakEntry>> {
    if data.len() < 4 {
        return Err(PakError::TooSmall(data.len()));
    }
    let first_off = LE::read_u32(&data[0..4]) as usize;

    let mut entries = Vec::new();
    let mut pos = 0usize;
    while pos < first_off && pos < data.len() {
        if pos + 4 > data.len() {
            break;
        }
        let offset = LE::read_u32(&data[pos..pos + 4]);
        pos += 4;

        let Some(nul_rel) = data[pos..].iter().position(|&b| b == 0) else {
            break;
        };
        let name_bytes = &data[pos..pos + nul_rel];
        if !name_bytes.iter().all(|&b| (0x20..=0x7E).contains(&b)) {
            break;
        }
        let name = String::from_utf8_lossy(name_bytes).into_owned();
        pos += nul_rel + 1;

        entries.push(PakEntry {
            name,
            offset,
            size: 0,
        });
    }

    if entries.is_empty() {
        return Err(PakError::EmptyDirectory);
    }

    let file_len = data.len() as u32;
    let n = entries.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| entries[i].offset);
    for k in 0..n {
        let next_offset = if k + 1 < n {
            entries[order[k + 1]].offset
        } else {
            file_len
        };
        let i = order[k];
        entries[i].size = next_offset.saturating_sub(entries[i].offset);
    }

    Ok(entries)
}

/// Sanitizes a directory name for filesystem output: a run of one or more
/// characters outside `[A-Za-z0-9._-]` collapses to a single `_` (matching
/// `re.sub(r"[^A-Za-z0-9._-]+", "_", name)`), then leading/trailing `.`/`_`
/// are trimmed (`str.strip("._")`); an empty result falls back to a
/// positional placeholder.
pub fn sanitize_name(name: &str, index: usize) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
            sanitized.push(c);
            in_run = false;
        } else if !in_run {
            sanitized.push('_');
            in_run = true;
        }
    }
    let trimmed = sanitized.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        format!("entry_{index:03}.bin")
    } else {
        trimmed.to_string()
    }
}

/// Slices each entry's payload out of `data`, clamping to the file bounds.
pub fn extract(data: &[u8], entries: &[PakEntry]) -> Vec<crate::types::PakRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let start = (e.offset as usize).min(data.len());
            let end = (start + e.size as usize).min(data.len());
            crate::types::PakRecord {
                name: sanitize_name(&e.name, i),
                data: data[start..end].to_vec(),
            }
        })
        .collect()
}
