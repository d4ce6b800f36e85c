use crate::error::{ImageIoError, Result};
use image::{ImageBuffer, Rgba};
use std::path::Path;

const PALETTE_BYTES: usize = 256 * 3;

fn padded_palette(palette: Option<&[u8]>) -> [u8; PALETTE_BYTES] {
    let mut out = [0u8; PALETTE_BYTES];
    if let Some(p) = palette {
        let n = p.len().min(PALETTE_BYTES);
        out[..n].copy_from_slice(&p[..n]);
    }
    out
}

/// Writes an indexed pixel buffer as a PNG, resolving each index through
/// `palette` (zero-padded to 256 entries) and routing through
/// `image::RgbaImage` rather than a raw indexed-PNG writer.
pub fn write_indexed_png(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    pixels: &[u8],
    palette: Option<&[u8]>,
    transparent_index: Option<u8>,
) -> Result<()> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(ImageIoError::PixelCountMismatch {
            expected,
            got: pixels.len(),
        });
    }

    let table = padded_palette(palette);
    let mut buf: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for (i, &index) in pixels.iter().enumerate() {
        let off = index as usize * 3;
        let alpha = match transparent_index {
            Some(t) if t == index => 0,
            _ => 255,
        };
        let rgba = Rgba([table[off], table[off + 1], table[off + 2], alpha]);
        buf.put_pixel((i as u32) % width, (i as u32) / width, rgba);
    }

    buf.save(path)?;
    Ok(())
}
