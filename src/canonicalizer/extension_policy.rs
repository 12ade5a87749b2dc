use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::url_parser::{path_segments, rebuild_as_directory, ParsedUrl};

/// Extensions whose parameterised URLs are kept as endpoints.
pub const DEFAULT_RETAINED_EXTENSIONS: [&str; 6] =
    [".php", ".html", ".aspx", ".jsp", ".htm", ".asp"];

/// Number of leading clean segments a demoted URL keeps.
pub const DEFAULT_MAX_STEM_SEGMENTS: usize = 2;

static DEFAULT_RETAIN_MAP: Lazy<HashMap<String, bool>> = Lazy::new(|| {
    DEFAULT_RETAINED_EXTENSIONS
        .iter()
        .map(|ext| (ext.to_string(), true))
        .collect()
});

/// What happens to a query-carrying URL that survived grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retention {
    /// Emit the original line, query included.
    Keep,
    /// Emit this directory stem instead.
    Demote(String),
    /// Emit nothing.
    Drop,
}

/// Extension of the final path segment, from its last `.` to the end.
///
/// Empty when the final segment has no dot (or the path is directory-shaped).
pub fn extension_of(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.rfind('.').map_or("", |dot| &last[dot..])
}

/// Leading run of path segments with neither `.` nor `=`, capped at `max`.
pub fn stem_segments(path: &str, max: usize) -> Vec<&str> {
    path_segments(path)
        .into_iter()
        .take_while(|segment| !segment.contains(|c: char| c == '.' || c == '='))
        .take(max)
        .collect()
}

/// Decides whether parameterised URLs stay endpoints or collapse to a stem.
#[derive(Debug, Clone)]
pub struct ExtensionPolicy {
    retain: HashMap<String, bool>,
    max_stem_segments: usize,
}

impl Default for ExtensionPolicy {
    fn default() -> Self {
        Self {
            retain: DEFAULT_RETAIN_MAP.clone(),
            max_stem_segments: DEFAULT_MAX_STEM_SEGMENTS,
        }
    }
}

impl ExtensionPolicy {
    /// Builds a policy from an allow-list. Matching is case-sensitive and
    /// entries are expected with their leading dot (`.php`).
    pub fn new<I, S>(extensions: I, max_stem_segments: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            retain: extensions.into_iter().map(|ext| (ext.into(), true)).collect(),
            max_stem_segments,
        }
    }

    /// URLs with no extension are always retained.
    pub fn retains(&self, extension: &str) -> bool {
        extension.is_empty() || self.retain.get(extension).copied().unwrap_or(false)
    }

    pub fn apply(&self, parsed: &ParsedUrl) -> Retention {
        if self.retains(extension_of(&parsed.path)) {
            return Retention::Keep;
        }

        let stem = stem_segments(&parsed.path, self.max_stem_segments);
        if stem.is_empty() {
            return Retention::Drop;
        }
        Retention::Demote(rebuild_as_directory(parsed, &stem))
    }
}
