use crate::error::{IffError, Result};
use crate::types::Form;
use byteorder::{BigEndian, ByteOrder};
use std::collections::HashMap;

/// Parses a `FORM`-rooted IFF container. The total-size field at offset 4
/// is read but never trusted for bounds; the walk is driven purely by
/// chunk headers and the actual buffer length. A chunk header that
/// promises more data than remains in the buffer ends the walk without
/// an error — whatever chunks were fully read are still returned.
pub fn parse(data: &[u8]) -> Result<Form> {
    if data.len() < 12 {
        return Err(IffError::TooSmall(data.len()));
    }
    let magic: [u8; 4] = data[0..4].try_into().unwrap();
    if &magic != b"FORM" {
        return Err(IffError::BadMagic(magic));
    }
    let form_type: [u8; 4] = data[8..12].try_into().unwrap();

    let mut chunks = HashMap::new();
    let mut pos = 12usize;
    while pos + 8 <= data.len() {
        let tag: [u8; 4] = data[pos..pos + 4].try_into().unwrap();
        let size = BigEndian::read_u32(&data[pos + 4..pos + 8]) as usize;
        pos += 8;

        if pos + size > data.len() {
            break;
        }
        let chunk_data = data[pos..pos + size].to_vec();
        pos += size;
        if size % 2 != 0 {
            if pos >= data.len() {
                chunks.insert(tag, chunk_data);
                break;
            }
            pos += 1;
        }

        chunks.insert(tag, chunk_data);
    }

    Ok(Form { form_type, chunks })
}
