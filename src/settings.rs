//! Layered settings: built-in defaults, then an optional file, then
//! `CRAWL_SEED_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

use crate::canonicalizer::extension_policy::{
    DEFAULT_MAX_STEM_SEGMENTS, DEFAULT_RETAINED_EXTENSIONS,
};
use crate::canonicalizer::grouping::GroupingScope;
use crate::url_parser::DEFAULT_VERSION_MARKERS;

/// Prefix for environment overrides, e.g. `CRAWL_SEED_WORKERS=4`.
pub const ENV_PREFIX: &str = "CRAWL_SEED";

/// Separator for list values in the environment, e.g.
/// `CRAWL_SEED_RETAINED_EXTENSIONS=.php,.html`.
pub const ENV_LIST_SEPARATOR: &str = ",";

const LIST_KEYS: [&str; 2] = ["retained_extensions", "version_markers"];

/// Settings for a canonicalization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Worker tasks used for per-line parsing. 0 is treated as 1.
    pub workers: usize,

    /// Extensions (with leading dot) whose parameterised URLs stay endpoints.
    pub retained_extensions: Vec<String>,

    /// Query substrings that mark a version/cache-busting parameter.
    pub version_markers: Vec<String>,

    /// Leading segments a demoted URL keeps.
    pub max_stem_segments: usize,

    /// Emit `scheme://host/` for every accepted URL.
    pub emit_host_root: bool,

    pub grouping_scope: GroupingScope,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            retained_extensions: DEFAULT_RETAINED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            version_markers: DEFAULT_VERSION_MARKERS.iter().map(|m| m.to_string()).collect(),
            max_stem_segments: DEFAULT_MAX_STEM_SEGMENTS,
            emit_host_root: true,
            grouping_scope: GroupingScope::default(),
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn environment() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(ENV_LIST_SEPARATOR),
        |env, key| env.with_list_parse_key(key),
    )
}

/// Loads settings, reading `path` if given (format chosen by extension).
///
/// # Errors
/// Fails when the file is missing or malformed, or when a value cannot be
/// converted to its field type.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    builder = builder.add_source(environment());

    let source = path.map_or_else(|| "environment".to_string(), |p| p.display().to_string());
    let settings = builder
        .build()
        .and_then(|cfg| cfg.try_deserialize::<Settings>())
        .with_context(|| format!("Failed to load settings from {}", source))?;

    tracing::debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}
