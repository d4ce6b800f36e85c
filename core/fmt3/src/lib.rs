//! Codec Format 3 — signed-byte RLE with a 16-bit extended run.
//!
//! `code == 0` reads a 16-bit length then a fill byte; `code < 0`
//! repeats one byte `-code` times; `code > 0` copies `code` literal
//! bytes. The extended-run length is big-endian for the DOS pipeline
//! and little-endian for the (never auto-selected) Amiga variant.

use bitio::ByteCursor;

/// Decodes exactly `size` bytes from `src`.
///
/// `is_amiga` selects the 16-bit-length byte order for the `code == 0`
/// extended run. The DOS pipeline never sets it; callers choose it
/// explicitly rather than guessing from a file extension.
pub fn decode(src: &[u8], size: usize, is_amiga: bool) -> Vec<u8> {
    let mut dst = vec![0u8; size];
    let mut cursor = ByteCursor::new(src);
    let mut dst_pos = 0usize;

    while dst_pos < size {
        let Some(code) = cursor.read_i8() else {
            break;
        };

        if code == 0 {
            let len = if is_amiga {
                cursor.read_u16_le()
            } else {
                cursor.read_u16_be()
            };
            let (Some(len), Some(val)) = (len, cursor.read_u8()) else {
                break;
            };
            let end = (dst_pos + len as usize).min(size);
            dst[dst_pos..end].fill(val);
            dst_pos = end;
        } else if code < 0 {
            let Some(val) = cursor.read_u8() else {
                break;
            };
            let run = (-(code as i32)) as usize;
            let end = (dst_pos + run).min(size);
            dst[dst_pos..end].fill(val);
            dst_pos = end;
        } else {
            let run = code as usize;
            let want = run.min(size - dst_pos);
            let Some(bytes) = cursor.take(want) else {
                break;
            };
            dst[dst_pos..dst_pos + want].copy_from_slice(bytes);
            dst_pos += want;
            if want < run {
                break;
            }
        }
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rle_scenario_from_spec() {
        // [00 00 05 AA  FD BB  02 CC DD], size=10
        let src = [0x00, 0x00, 0x05, 0xAA, 0xFD, 0xBB, 0x02, 0xCC, 0xDD];
        let out = decode(&src, 10, false);
        assert_eq!(
            out,
            vec![0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xBB, 0xBB, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn output_length_is_exact_even_on_overrun() {
        let src = [0x00, 0x00, 0xFF, 0x01]; // claims a 255-byte run
        let out = decode(&src, 4, false);
        assert_eq!(out.len(), 4);
        assert_eq!(out, vec![1, 1, 1, 1]);
    }

    #[test]
    fn amiga_length_is_little_endian() {
        let src = [0x00, 0x05, 0x00, 0x07];
        let out = decode(&src, 5, true);
        assert_eq!(out, vec![7, 7, 7, 7, 7]);
    }
}
