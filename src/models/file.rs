use serde::Serialize;

/// Whether the torrent describes a single file or a directory of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    Single,
    Multi,
}

/// One entry of the torrent's file manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path fragments relative to the torrent root
    pub path: Vec<String>,
    /// File size in bytes
    pub length: u64,
    /// md5 checksum carried verbatim from the metainfo, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5sum: Option<String>,
    /// Whether this is a padding file (virtual)
    pub is_padding: bool,
}
