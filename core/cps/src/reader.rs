use crate::error::{CpsError, Result};
use crate::types::{CpsHeader, CpsImage};
use byteorder::{ByteOrder, LE};

pub fn parse_header(data: &[u8]) -> Result<CpsHeader> {
    if data.len() < 10 {
        return Err(CpsError::HeaderTooSmall(data.len()));
    }
    Ok(CpsHeader {
        file_size: LE::read_u16(&data[0..2]),
        comp_type: data[2],
        img_size: LE::read_u32(&data[4..8]),
        pal_size: LE::read_u16(&data[8..10]),
    })
}

/// Decodes a CPS image.
///
/// `width`/`height` are required unless `img_size == 64000`, in which case
/// the canonical 320x200 geometry is assumed. When `allow_size_override` is
/// set and `width*height != img_size`, the decoder target length follows
/// `width*height` instead of the header's declared size (kept behind this
/// opt-in flag rather than inferred, per the handful of assets that rely
/// on the mismatch).
pub fn decode(
    data: &[u8],
    width: Option<u32>,
    height: Option<u32>,
    allow_size_override: bool,
    external_palette: Option<&[u8]>,
) -> Result<CpsImage> {
    let header = parse_header(data)?;

    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ if header.img_size == 64000 => (320, 200),
        _ => return Err(CpsError::MissingGeometry),
    };

    let pal_size = header.pal_size as usize;
    if 10 + pal_size > data.len() {
        return Err(CpsError::PaletteOutOfRange {
            pal_size,
            file_len: data.len(),
        });
    }

    let palette = if pal_size > 0 {
        Some(palette::decode(&data[10..10 + pal_size]))
    } else {
        external_palette.map(palette::decode)
    };

    let payload = &data[10 + pal_size..];
    let out_size = (width as usize) * (height as usize);
    let decode_size = if allow_size_override {
        out_size
    } else {
        header.img_size as usize
    };

    let pixels = match header.comp_type {
        0 => {
            let mut buf = vec![0u8; decode_size];
            let n = payload.len().min(decode_size);
            buf[..n].copy_from_slice(&payload[..n]);
            buf
        }
        1 => fmt1::decode(payload, decode_size),
        3 => fmt3::decode(payload, decode_size, false),
        4 => fmt4::decode(payload, decode_size),
        other => return Err(CpsError::UnsupportedCompression(other)),
    };

    Ok(CpsImage {
        width,
        height,
        pixels,
        palette,
    })
}

/// Decodes an MSC image: structurally a CPS, but canonical geometry is
/// 320 wide with height derived from `img_size / 320`.
pub fn decode_msc(data: &[u8], external_palette: Option<&[u8]>) -> Result<CpsImage> {
    let header = parse_header(data)?;
    let width = 320u32;
    let height = (header.img_size / 320).max(1);
    decode(data, Some(width), Some(height), false, external_palette)
}
