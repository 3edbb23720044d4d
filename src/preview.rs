use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, bounded};
use std::fs;
use std::path::PathBuf;
use std::thread;

use crate::magnet::format_magnet;
use crate::metainfo::{self, MapError};
use crate::models::TorrentMetadata;
use crate::tree::FileTree;

/// The complete output surface for one torrent file: metadata for the
/// header, the file tree for rendering, and the magnet link for export.
#[derive(Debug)]
pub struct TorrentPreview {
    pub metadata: TorrentMetadata,
    pub tree: FileTree,
    pub magnet_uri: String,
    /// Size in bytes of the .torrent file itself
    pub source_len: u64,
}

impl TorrentPreview {
    /// Run the full pipeline over raw metainfo bytes:
    /// decode, map, hash, tree-build, magnet-format.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, MapError> {
        let metadata = metainfo::parse(buf)?;
        let tree = FileTree::build(&metadata.files, &metadata.name);
        let magnet_uri = format_magnet(
            &metadata.info_hash_hex(),
            &metadata.name,
            &metadata.trackers,
        );

        Ok(Self {
            metadata,
            tree,
            magnet_uri,
            source_len: buf.len() as u64,
        })
    }
}

/// Load and parse a torrent file on a background thread.
///
/// The finished preview is handed back exactly once through the returned
/// channel. Dropping the receiver abandons the load: the worker's send
/// fails, its partial state is dropped, and nothing else observes it. The
/// worker performs no writes, so an abandoned load has no side effects.
pub fn load(path: PathBuf) -> Receiver<Result<TorrentPreview>> {
    let (tx, rx) = bounded(1);

    thread::spawn(move || {
        let result = fs::read(&path)
            .with_context(|| format!("Failed to read torrent file: {}", path.display()))
            .and_then(|buf| {
                TorrentPreview::from_bytes(&buf)
                    .context("Failed to parse torrent file. Is it a valid bencoded file?")
            });
        let _ = tx.send(result);
    });

    rx
}
