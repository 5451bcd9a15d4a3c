//! Magnet URI composition.
//!
//! Builds a magnet link from an info-hash, a display title and the fixed
//! tracker list.

/// Trackers appended to every synthesized magnet URI, in order.
pub const TRACKERS: [&str; 5] = [
    "udp://tracker.coppersurfer.tk:6969/announce",
    "udp://tracker.openbittorrent.com:6969/announce",
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://exodus.desync.com:6969/announce",
    "udp://tracker.torrent.eu.org:451/announce",
];

/// Builds a magnet URI from an info-hash and a display title.
///
/// Returns `None` when the hash is empty. The hash is embedded with its
/// case preserved; the title and each tracker are percent-encoded. Tracker
/// order follows [`TRACKERS`].
///
/// # Example
/// ```
/// use audiobookbay_core::magnet::build_magnet_uri;
/// let uri = build_magnet_uri("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "Dune").unwrap();
/// assert!(uri.starts_with("magnet:?xt=urn:btih:aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa&dn=Dune"));
/// ```
pub fn build_magnet_uri(hash: &str, title: &str) -> Option<String> {
    if hash.is_empty() {
        return None;
    }

    let mut uri = format!(
        "magnet:?xt=urn:btih:{}&dn={}",
        hash,
        urlencoding::encode(title)
    );
    for tracker in TRACKERS {
        uri.push_str("&tr=");
        uri.push_str(&urlencoding::encode(tracker));
    }

    Some(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn test_empty_hash_yields_none() {
        assert_eq!(build_magnet_uri("", "Some Title"), None);
        assert_eq!(build_magnet_uri("", ""), None);
    }

    #[test]
    fn test_magnet_uri_contains_hash_and_encoded_title() {
        let uri = build_magnet_uri(HASH, "Test & Book").expect("hash is non-empty");
        assert!(uri.contains(&format!("xt=urn:btih:{}", HASH)));
        assert!(uri.contains("dn=Test%20%26%20Book"));
    }

    #[test]
    fn test_magnet_uri_preserves_hash_case() {
        let mixed = "AbCdEf0123456789aBcDeF0123456789abcdef01";
        let uri = build_magnet_uri(mixed, "x").expect("hash is non-empty");
        assert!(uri.contains(&format!("xt=urn:btih:{}", mixed)));
    }

    #[test]
    fn test_magnet_uri_trackers_in_list_order() {
        let uri = build_magnet_uri(HASH, "Dune").expect("hash is non-empty");

        assert_eq!(uri.matches("&tr=").count(), TRACKERS.len());

        let mut last = 0;
        for tracker in TRACKERS {
            let encoded = format!("&tr={}", urlencoding::encode(tracker));
            let pos = uri.find(&encoded).expect("tracker present");
            assert!(pos > last, "trackers out of order");
            last = pos;
        }
    }
}
