//! Canonicalizes URL lists into crawl seeds.
//!
//! Each URL contributes its ancestor directories, its host root and, when it
//! looks like a parameterised file endpoint, itself. URLs that differ only in
//! parameter values are grouped, and parameterised static assets collapse to
//! their directory. The result is a sorted list with no duplicates.
//!
//! ```
//! use crawl_seed::canonicalizer::Canonicalizer;
//!
//! let (seeds, _report) = Canonicalizer::default().canonicalize(&[
//!     "http://x.com/a/b/c.php?id=1",
//!     "http://x.com/a/b/c.php?id=2",
//!     "http://x.com/img.png?t=1",
//! ]);
//! assert!(seeds.contains(&"http://x.com/a/b/".to_string()));
//! ```

pub mod canonicalizer;
pub mod cli;
pub mod io;
pub mod settings;
pub mod url_parser;
pub mod utils;
