//! Codec Format 4 — LZSS-style back-reference and literal decoder.
//!
//! One control byte selects among five forms: a short relative
//! back-reference, a short/long absolute back-reference, a constant-byte
//! run, a literal run, or end-of-stream. Lengths are always clamped to
//! the remaining destination space; back-reference copies go
//! byte-by-byte so overlapping windows replicate correctly (true LZSS
//! semantics, not a `copy_within`).

use bitio::ByteCursor;

/// Decodes exactly `size` bytes from `src`.
pub fn decode(src: &[u8], size: usize) -> Vec<u8> {
    let mut dst = vec![0u8; size];
    let mut cursor = ByteCursor::new(src);
    let mut dst_pos = 0usize;

    loop {
        let remaining = size - dst_pos;
        if remaining == 0 {
            break;
        }
        let Some(code) = cursor.read_u8() else {
            break;
        };

        if code & 0x80 == 0 {
            let length = remaining.min(((code >> 4) as usize) + 3);
            let Some(lo) = cursor.read_u8() else { break };
            let offset = (((code & 0x0F) as usize) << 8) | lo as usize;
            if offset > dst_pos {
                break; // malformed: would read before the buffer start
            }
            let from = dst_pos - offset;
            copy_overlapping(&mut dst, from, dst_pos, length);
            dst_pos += length;
        } else if code & 0x40 != 0 {
            if code == 0xFE {
                let Some(mut length) = cursor.read_u16_le().map(|v| v as usize) else {
                    break;
                };
                length = length.min(remaining);
                let Some(val) = cursor.read_u8() else { break };
                let end = dst_pos + length;
                dst[dst_pos..end].fill(val);
                dst_pos = end;
            } else {
                let mut length = if code == 0xFF {
                    let Some(l) = cursor.read_u16_le() else { break };
                    l as usize
                } else {
                    ((code & 0x3F) as usize) + 3
                };
                length = length.min(remaining);
                let Some(offset) = cursor.read_u16_le().map(|v| v as usize) else {
                    break;
                };
                copy_overlapping(&mut dst, offset, dst_pos, length);
                dst_pos += length;
            }
        } else if code != 0x80 {
            let length = remaining.min((code & 0x3F) as usize);
            let Some(bytes) = cursor.take(length) else {
                break;
            };
            dst[dst_pos..dst_pos + length].copy_from_slice(bytes);
            dst_pos += length;
        } else {
            break; // 0x80: explicit end of stream
        }
    }

    dst
}

/// Copies `length` bytes from `dst[from..]` to `dst[to..]`, one byte at
/// a time so that `from < to` overlapping windows replicate the way
/// LZSS back-references are defined to (each written byte becomes
/// readable for the next step of the same copy).
fn copy_overlapping(dst: &mut [u8], mut from: usize, mut to: usize, length: usize) {
    for _ in 0..length {
        if to >= dst.len() {
            break;
        }
        let b = dst.get(from).copied().unwrap_or(0);
        dst[to] = b;
        from += 1;
        to += 1;
    }
}
