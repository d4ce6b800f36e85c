pub mod error;

use serde::Serialize;

pub use error::{EmcTextError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedText {
    pub format: &'static str,
    pub source: String,
    pub strings: Vec<String>,
}

/// Extracts the `TEXT` chunk's string table from an EMC2 IFF file.
///
/// The chunk is a 16-bit big-endian offset table immediately followed by
/// the NUL-terminated string blob it points into; the table's own length
/// isn't recorded anywhere, so it's inferred as "read offsets until the
/// cursor reaches the smallest non-zero offset seen so far" — the point
/// where the table necessarily gives way to string data.
pub fn extract(data: &[u8], source_name: &str) -> Result<ExtractedText> {
    let strings = parse_strings(data)?;
    Ok(ExtractedText {
        format: "kyra-emc-text",
        source: source_name.to_string(),
        strings,
    })
}

fn parse_strings(data: &[u8]) -> Result<Vec<String>> {
    let form = iff::parse(data)?;
    let Some(text) = form.chunk(b"TEXT") else {
        return Ok(Vec::new());
    };

    let mut offsets = Vec::new();
    let mut min_offset = text.len();
    let mut entries = 0usize;
    let mut i = 0usize;
    while i + 1 < text.len() {
        let off = ((text[i] as usize) << 8) | text[i + 1] as usize;
        offsets.push(off);
        entries += 1;
        if off != 0 && off < min_offset {
            min_offset = off;
        }
        if entries * 2 >= min_offset {
            break;
        }
        i += 2;
    }

    if min_offset == 0 || min_offset == text.len() {
        return Ok(Vec::new());
    }

    let mut strings = Vec::with_capacity(entries);
    for &off in offsets.iter().take(entries) {
        if off == 0 {
            strings.push(String::new());
            continue;
        }
        let end = text[off..]
            .iter()
            .position(|&b| b == 0)
            .map(|p| off + p)
            .unwrap_or(text.len());
        let raw = &text[off..end];
        // The source blob is Latin-1; every byte maps 1:1 onto a Unicode
        // scalar value in that range, so this is a lossless decode.
        let value: String = raw
            .iter()
            .map(|&b| b as char)
            .collect::<String>()
            .replace('\r', " ");
        strings.push(value.trim().to_string());
    }

    Ok(strings)
}
