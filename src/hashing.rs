use sha1::{Digest, Sha1};

use crate::bencode::Span;
use crate::config::HASH_LEN;

/// Compute the v1 info-hash: SHA-1 over the raw bytes the `info` dictionary
/// occupied in the source buffer.
///
/// The digest must cover the original bytes, not a re-serialization of the
/// parsed tree. Torrents in the wild carry non-canonical encodings, and any
/// divergence from the source bytes changes the identity trackers and peers
/// agree on.
pub fn info_hash(buf: &[u8], info_span: Span) -> [u8; HASH_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(info_span.slice(buf));
    let digest = hasher.finalize();

    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(&digest);
    hash
}
