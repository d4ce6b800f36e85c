use std::collections::HashMap;

/// A parsed IFF `FORM`: the four-byte form type plus every chunk found,
/// keyed by tag. A duplicate tag replaces the earlier chunk, though this
/// format is not expected to produce one.
#[derive(Debug, Clone)]
pub struct Form {
    pub form_type: [u8; 4],
    pub chunks: HashMap<[u8; 4], Vec<u8>>,
}

impl Form {
    pub fn chunk(&self, tag: &[u8; 4]) -> Option<&[u8]> {
        self.chunks.get(tag).map(|v| v.as_slice())
    }
}
