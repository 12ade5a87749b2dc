use super::parser::ParsedUrl;

/// A path ending in `/` names a directory; anything else ends in a leaf.
pub fn is_directory_shaped(path: &str) -> bool {
    path.ends_with('/')
}

/// Splits a path into its non-empty segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Decomposes a path into every ancestor directory, shallowest first.
///
/// A leaf-shaped path does not contribute its final segment, so `/a/b/c.php`
/// yields `/a/` and `/a/b/`, while `/a/b/` yields the same two prefixes.
/// Root and empty paths yield nothing.
pub fn decompose_path(path: &str) -> Vec<String> {
    let segments = path_segments(path);
    let depth = if is_directory_shaped(path) {
        segments.len()
    } else {
        segments.len().saturating_sub(1)
    };

    let mut current = String::with_capacity(path.len() + 1);
    segments
        .iter()
        .take(depth)
        .map(|segment| {
            current.push('/');
            current.push_str(segment);
            format!("{}/", current)
        })
        .collect()
}

/// Ancestor directories of a parsed URL as absolute URLs.
pub fn directory_prefixes(parsed: &ParsedUrl) -> Vec<String> {
    let origin = parsed.origin();
    decompose_path(&parsed.path)
        .into_iter()
        .map(|prefix| format!("{}{}", origin, prefix))
        .collect()
}
