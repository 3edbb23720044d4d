mod file;
mod metadata;

pub use file::{FileMode, FileRecord};
pub use metadata::TorrentMetadata;
