//! Codec Format 1 — nibble-packed 12-bit-code dictionary decoder.
//!
//! Grows a pattern table (capped at [`MAX_PATTERNS`]) as it decodes;
//! never referenced past the number of patterns recorded so far.

use bitio::NibbleReader;

/// The format's hard cap on the pattern dictionary. Not a safety
/// limit — exceeding it silently stops growing the dictionary, and
/// late bytes of long streams depend on that exact behavior.
pub const MAX_PATTERNS: usize = 3840;

/// Decodes exactly `size` bytes from `src`. Always returns a buffer of
/// length `size`; a truncated `src` simply leaves the undecoded tail
/// as zero.
pub fn decode(src: &[u8], size: usize) -> Vec<u8> {
    let mut dst = vec![0u8; size];
    if size == 0 {
        return dst;
    }

    let mut reader = NibbleReader::new(src);
    let mut patterns: Vec<(usize, usize)> = Vec::new();

    let Some(code0) = reader.next_code() else {
        return dst;
    };
    let mut last = (code0 & 0xFF) as u8;
    let mut dst_pos = 0usize;
    let mut dst_prev = 0usize;
    let mut count = 1usize;
    let mut count_prev = 1usize;

    dst[dst_pos] = last;
    dst_pos += 1;

    while dst_pos < size {
        let Some(code) = reader.next_code() else {
            break;
        };
        let cmd = (code >> 8) & 0xFF;

        if cmd != 0 {
            let idx = (((cmd - 1) as usize) << 8) | (code & 0xFF) as usize;
            let tmp_dst = dst_pos;

            if idx < patterns.len() {
                let (mut src_pos, cp) = patterns[idx];
                count_prev = cp;
                last = dst.get(src_pos).copied().unwrap_or(0);
                for _ in 0..count_prev {
                    if dst_pos >= size {
                        break;
                    }
                    dst[dst_pos] = dst.get(src_pos).copied().unwrap_or(0);
                    dst_pos += 1;
                    src_pos += 1;
                }
            } else {
                let mut src_pos = dst_prev;
                count = count_prev;
                for _ in 0..count_prev {
                    if dst_pos >= size {
                        break;
                    }
                    dst[dst_pos] = dst.get(src_pos).copied().unwrap_or(0);
                    dst_pos += 1;
                    src_pos += 1;
                }
                if dst_pos < size {
                    dst[dst_pos] = last;
                    dst_pos += 1;
                }
                count_prev += 1;
            }

            if patterns.len() < MAX_PATTERNS {
                patterns.push((dst_prev, count + 1));
            }

            dst_prev = tmp_dst;
            count = count_prev;
        } else {
            last = (code & 0xFF) as u8;
            if dst_pos < size {
                dst[dst_pos] = last;
                dst_pos += 1;
            }

            if patterns.len() < MAX_PATTERNS {
                patterns.push((dst_prev, count + 1));
            }

            dst_prev = dst_pos.saturating_sub(1);
            count = 1;
            count_prev = 1;
        }
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_length_is_exact() {
        // A run of plain literal codes: cmd nibble 0, 8-bit literal.
        // Code 0x0_AA packed as nibbles 0,A,A across the stream.
        let src = [0x0A, 0xA0, 0xBB];
        let out = decode(&src, 3);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn truncated_source_still_yields_declared_length() {
        let out = decode(&[0x00], 10);
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn zero_size_is_empty() {
        assert_eq!(decode(&[0xFF, 0xFF], 0).len(), 0);
    }
}
