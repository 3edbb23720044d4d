use serde::{Serialize, Serializer};

use crate::config::HASH_LEN;

use super::file::{FileMode, FileRecord};

/// Everything extracted from one metainfo file.
///
/// Built once by the mapper and immutable afterwards; the file tree and the
/// magnet link are both derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TorrentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announce: Option<String>,

    /// Tracker tiers from `announce-list`, in original order
    #[serde(rename = "announce-list", skip_serializing_if = "Vec::is_empty")]
    pub announce_list: Vec<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(rename = "created by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(rename = "creation date", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    /// Display name, preferring the `name.utf-8` variant when present
    pub name: String,

    #[serde(rename = "piece length")]
    pub piece_length: u64,

    /// Per-piece SHA-1 checksums sliced from the `pieces` byte string
    #[serde(skip)]
    pub pieces: Vec<[u8; HASH_LEN]>,

    pub mode: FileMode,

    /// File manifest; a one-element list in single-file mode
    pub files: Vec<FileRecord>,

    /// SHA-1 of the raw `info` dictionary bytes
    #[serde(rename = "info hash", serialize_with = "hex_lower")]
    pub info_hash: [u8; HASH_LEN],

    /// Flat tracker list, deduplicated in first-seen order
    pub trackers: Vec<String>,
}

impl TorrentMetadata {
    /// Lowercase hex spelling of the info-hash, as shown to users and used
    /// in magnet links.
    pub fn info_hash_hex(&self) -> String {
        hex::encode(self.info_hash)
    }

    /// Total content size in bytes, padding files included.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.length).sum()
    }

    /// Number of files in the manifest, padding included.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of padding files in the manifest.
    pub fn padding_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_padding).count()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

fn hex_lower<S: Serializer>(hash: &[u8; HASH_LEN], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(hash))
}
