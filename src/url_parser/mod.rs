//! Parsing and per-URL analysis.
//!
//! Everything in here works on a single URL: validating a raw line, splitting
//! its path into ancestor directories, classifying its query and rebuilding a
//! directory stem. Batch behaviour (grouping, the extension policy, the output
//! set) lives in [`crate::canonicalizer`].

pub mod parser;
pub mod path_decomposer;
pub mod query_classifier;
pub mod url_reconstructor;
pub mod url_validator;


pub use parser::ParsedUrl;
pub use path_decomposer::{decompose_path, directory_prefixes, is_directory_shaped, path_segments};
pub use query_classifier::{classify, QueryClass, DEFAULT_VERSION_MARKERS};
pub use url_reconstructor::rebuild_as_directory;
pub use url_validator::UrlRejection;
