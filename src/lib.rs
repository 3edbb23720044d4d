//! # torview
//!
//! A library for inspecting BitTorrent metainfo files.
//!
//! This library decodes the bencoded `.torrent` format, computes the
//! canonical info-hash over the raw `info` dictionary bytes, derives a
//! navigable file tree from the flat manifest, and formats a magnet link.
//!
//! ## Example
//!
//! ```no_run
//! use torview::TorrentPreview;
//!
//! let bytes = std::fs::read("my_file.torrent").unwrap();
//! let preview = TorrentPreview::from_bytes(&bytes).unwrap();
//! println!("{}: {}", preview.metadata.name, preview.magnet_uri);
//! ```

pub mod bencode;
pub mod cli;
pub mod config;
pub mod hashing;
pub mod inspect;
pub mod magnet;
pub mod metainfo;
pub mod models;
pub mod preview;
pub mod tree;

// Re-export main types for convenience
pub use bencode::{DecodeError, Value};
pub use metainfo::MapError;
pub use models::{FileMode, FileRecord, TorrentMetadata};
pub use preview::TorrentPreview;
pub use tree::{FileTree, NodeId};
