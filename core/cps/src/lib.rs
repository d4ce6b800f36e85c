pub mod error;
pub mod reader;
pub mod types;

pub use error::{CpsError, Result};
pub use reader::{decode, decode_msc, parse_header};
pub use types::{CpsHeader, CpsImage};

#[cfg(test)]
mod tests {
    use super::*;

    fn header(comp_type: u8, img_size: u32, pal_size: u16) -> Vec<u8> {
        let mut h = vec![0u8; 10];
        h[2] = comp_type;
        h[4..8].copy_from_slice(&img_size.to_le_bytes());
        h[8..10].copy_from_slice(&pal_size.to_le_bytes());
        h
    }

    #[test]
    fn comp_type_zero_is_raw_pixels() {
        let mut data = header(0, 4, 0);
        data.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        let img = decode(&data, Some(2), Some(2), false, None).unwrap();
        assert_eq!(img.pixels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn canonical_size_defaults_geometry() {
        let mut data = header(0, 64000, 0);
        data.extend(vec![0u8; 64000]);
        let img = decode(&data, None, None, false, None).unwrap();
        assert_eq!((img.width, img.height), (320, 200));
    }

    #[test]
    fn missing_geometry_without_canonical_size_is_an_error() {
        let data = header(0, 12, 0);
        let err = decode(&data, None, None, false, None).unwrap_err();
        assert!(matches!(err, CpsError::MissingGeometry));
    }

    #[test]
    fn embedded_palette_is_decoded_with_dac_heuristic() {
        let mut data = header(0, 2, 6);
        data.extend_from_slice(&[10, 20, 30, 200, 10, 250]); // palette bytes
        data.extend_from_slice(&[0x00, 0x01]); // pixels
        let img = decode(&data, Some(2), Some(1), false, None).unwrap();
        let pal = img.palette.unwrap();
        assert_eq!(pal, vec![[40, 80, 120], [200, 10, 250]]);
    }

    #[test]
    fn unsupported_compression_is_fatal() {
        let data = header(9, 4, 0);
        let err = decode(&data, Some(2), Some(2), false, None).unwrap_err();
        assert!(matches!(err, CpsError::UnsupportedCompression(9)));
    }

    #[test]
    fn msc_derives_width_320_and_height_from_img_size() {
        let mut data = header(0, 640, 0);
        data.extend(vec![7u8; 640]);
        let img = decode_msc(&data, None).unwrap();
        assert_eq!((img.width, img.height), (320, 2));
    }
}
