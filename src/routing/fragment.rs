//! Conversion between history fragments and routable paths.
//!
//! The host keeps the location in the URL fragment as `#/<path>`. Everything
//! after `#` is the path, except a trailing `?query`, which is not routable and
//! is dropped without being interpreted.

/// Extract the routable path from a fragment.
///
/// An empty fragment (`""` or `"#"`) is the root path `/`.
pub fn path_from_fragment(fragment: &str) -> &str {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let path = match raw.find('?') {
        Some(end) => &raw[..end],
        None => raw,
    };
    if path.is_empty() { "/" } else { path }
}

/// Fragment the host should show for `path`.
pub fn fragment_for_path(path: &str) -> String {
    format!("#{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_fragment() {
        assert_eq!(path_from_fragment("#/"), "/");
        assert_eq!(path_from_fragment("#/settings"), "/settings");
        assert_eq!(path_from_fragment("/settings"), "/settings");
    }

    #[test]
    fn test_empty_fragment_is_root() {
        assert_eq!(path_from_fragment(""), "/");
        assert_eq!(path_from_fragment("#"), "/");
        assert_eq!(path_from_fragment("#?room=1"), "/");
    }

    #[test]
    fn test_query_is_dropped() {
        assert_eq!(path_from_fragment("#/settings?tab=audio"), "/settings");
    }

    #[test]
    fn test_nested_segments_kept_literal() {
        assert_eq!(path_from_fragment("#/settings/audio"), "/settings/audio");
    }

    #[test]
    fn test_fragment_for_path() {
        assert_eq!(fragment_for_path("/"), "#/");
        assert_eq!(fragment_for_path("/settings"), "#/settings");
        assert_eq!(path_from_fragment(&fragment_for_path("/settings")), "/settings");
    }
}
