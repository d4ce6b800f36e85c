//! DAC-to-RGB palette decoding.
//!
//! Source triplets use the 6-bit-per-channel VGA DAC convention; this
//! decoder multiplies by 4 *iff* all three components of a triplet are
//! already ≤ 63, and passes values through unchanged otherwise. Both
//! DAC-scaled and already-upconverted palette data flow through the
//! same code path — do not split this into two paths behind a flag.

pub const MAX_ENTRIES: usize = 256;
pub const PADDED_BYTES: usize = MAX_ENTRIES * 3;

/// Decodes up to [`MAX_ENTRIES`] RGB triplets from a raw byte stream,
/// applying the DAC heuristic per triplet. Stops at input exhaustion;
/// a trailing partial triplet (1 or 2 leftover bytes) is ignored.
pub fn decode(raw: &[u8]) -> Vec<[u8; 3]> {
    raw.chunks_exact(3)
        .take(MAX_ENTRIES)
        .map(|t| decode_triplet([t[0], t[1], t[2]]))
        .collect()
}

/// Applies the DAC heuristic to a single triplet.
pub fn decode_triplet([r, g, b]: [u8; 3]) -> [u8; 3] {
    if r <= 63 && g <= 63 && b <= 63 {
        [r * 4, g * 4, b * 4]
    } else {
        [r, g, b]
    }
}

/// Flattens a decoded palette into a 768-byte (256×3) buffer, padding
/// missing entries with black, as required for §6's PNG palette output.
pub fn pad_to_768(palette: &[[u8; 3]]) -> Vec<u8> {
    let mut out = vec![0u8; PADDED_BYTES];
    for (i, [r, g, b]) in palette.iter().take(MAX_ENTRIES).enumerate() {
        out[i * 3] = *r;
        out[i * 3 + 1] = *g;
        out[i * 3 + 2] = *b;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_six_bit_triplets() {
        assert_eq!(decode_triplet([10, 20, 30]), [40, 80, 120]);
    }

    #[test]
    fn passes_through_already_upconverted_triplets() {
        assert_eq!(decode_triplet([200, 10, 250]), [200, 10, 250]);
        // Mixed: any component > 63 disables scaling for the whole triplet.
        assert_eq!(decode_triplet([64, 1, 1]), [64, 1, 1]);
    }

    #[test]
    fn decode_stops_at_input_exhaustion() {
        let raw = [1, 2, 3, 4, 5, 6, 7]; // one trailing byte ignored
        let pal = decode(&raw);
        assert_eq!(pal, vec![[4, 8, 12], [16, 20, 24]]);
    }

    #[test]
    fn pad_to_768_fills_missing_with_black() {
        let pal = vec![[1u8, 2, 3]];
        let padded = pad_to_768(&pal);
        assert_eq!(padded.len(), 768);
        assert_eq!(&padded[0..3], &[1, 2, 3]);
        assert_eq!(&padded[3..6], &[0, 0, 0]);
    }
}
