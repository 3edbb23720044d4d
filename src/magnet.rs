/// Format a v1 (BTIH) magnet URI.
///
/// `info_hash_hex` must already be the lowercase hex spelling of the
/// info-hash. The display name is included only when non-empty; trackers
/// keep their order and are expected to be deduplicated upstream. All
/// parameter values are percent-encoded outside the unreserved URI set.
pub fn format_magnet(info_hash_hex: &str, display_name: &str, trackers: &[String]) -> String {
    let mut uri = format!("magnet:?xt=urn:btih:{info_hash_hex}");

    if !display_name.is_empty() {
        uri.push_str("&dn=");
        uri.push_str(&urlencoding::encode(display_name));
    }

    for tracker in trackers {
        uri.push_str("&tr=");
        uri.push_str(&urlencoding::encode(tracker));
    }

    uri
}
