use super::path_decomposer::{is_directory_shaped, path_segments};

/// Query substrings that mark a cache-busting version parameter.
pub const DEFAULT_VERSION_MARKERS: [&str; 2] = ["ver=", "v="];

/// Shape of a URL as seen by the version/file heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryClass {
    pub has_version_param: bool,
    pub is_file: bool,
}

impl QueryClass {
    /// A file endpoint whose query only carries a version, e.g. `app.php?ver=3`.
    /// These are never kept verbatim.
    pub fn is_versioned_file(&self) -> bool {
        self.is_file && self.has_version_param
    }

    /// A file endpoint with a meaningful query, e.g. `page.php?id=7`.
    pub fn is_parameterised_file(&self) -> bool {
        self.is_file && !self.has_version_param
    }
}

/// True when the raw query contains any of the markers as a literal substring.
///
/// This is a substring test, not a parameter-name match: a parameter called
/// `cover=` trips the `ver=` marker too.
pub fn has_version_param<S: AsRef<str>>(raw_query: &str, markers: &[S]) -> bool {
    markers
        .iter()
        .any(|marker| raw_query.contains(marker.as_ref()))
}

/// True when the path is leaf-shaped and its final segment contains a dot.
pub fn is_file_path(path: &str) -> bool {
    !is_directory_shaped(path)
        && path_segments(path)
            .last()
            .is_some_and(|segment| segment.contains('.'))
}

pub fn classify<S: AsRef<str>>(raw_query: &str, path: &str, markers: &[S]) -> QueryClass {
    QueryClass {
        has_version_param: has_version_param(raw_query, markers),
        is_file: is_file_path(path),
    }
}
