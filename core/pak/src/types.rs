/// One directory record, with its extent resolved from the sorted
/// successor offset (or file end, for the last entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PakEntry {
    pub name: String,
    pub offset: u32,
    pub size: u32,
}

/// A file extracted from a PAK, carrying both the raw directory name and
/// the sanitized form safe to use as an output path.
#[derive(Debug, Clone)]
pub struct PakRecord {
    pub name: String,
    pub data: Vec<u8>,
}
