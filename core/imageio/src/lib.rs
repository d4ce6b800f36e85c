pub mod error;
pub mod json;
pub mod png;

pub use error::{ImageIoError, Result};
pub use json::write_json;
pub use png::write_indexed_png;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn writes_a_two_by_two_indexed_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let palette = [0u8, 0, 0, 255, 0, 0];
        write_indexed_png(&path, 2, 2, &[0, 1, 1, 0], Some(&palette), None).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn transparent_index_zeroes_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let palette = [10u8, 20, 30];
        write_indexed_png(&path, 1, 1, &[0], Some(&palette), Some(0)).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 0]);
    }

    #[test]
    fn missing_palette_entries_resolve_to_black() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_indexed_png(&path, 1, 1, &[200], None, None).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn pixel_count_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let err = write_indexed_png(&path, 2, 2, &[0, 1, 2], None, None).unwrap_err();
        assert!(matches!(err, ImageIoError::PixelCountMismatch { .. }));
    }

    #[derive(Serialize)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn write_json_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        write_json(&path, &Sample { value: 7 }).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"value\": 7"));
    }
}
