/// The 10-byte CPS header, little-endian except `comp_type`/`_pad` which are
/// single bytes.
#[derive(Debug, Clone, Copy)]
pub struct CpsHeader {
    pub file_size: u16,
    pub comp_type: u8,
    pub img_size: u32,
    pub pal_size: u16,
}

/// A fully decoded CPS (or MSC) image: pixel indices plus whatever palette
/// the container carried, if any.
#[derive(Debug, Clone)]
pub struct CpsImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub palette: Option<Vec<[u8; 3]>>,
}
