use tracing::{instrument, trace};
use url::Url;

use super::path_decomposer::is_directory_shaped;
use super::url_validator::{extract_authority, validate_line, UrlRejection};

/// A URL accepted into the pipeline.
///
/// `scheme` and `host` are always non-empty. `path` is the escaped form the
/// `url` crate produces and `raw_query` is the undecoded query, kept verbatim
/// so the classifier can run substring tests over it.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    pub original: String, // The line as it appeared in the input (trimmed)
    pub url: Url,         // Fully parsed form, used for rebuilding stems
    pub scheme: String,
    pub host: String, // host[:port]
    pub path: String,
    pub raw_query: Option<String>, // None when absent or empty
}

impl ParsedUrl {
    /// Parses a single trimmed input line.
    ///
    /// # Errors
    /// Returns a [`UrlRejection`] when the line is empty, is not a valid URL,
    /// or has no host.
    #[instrument(level = "trace", skip_all, fields(line = %line))]
    pub fn new(line: &str) -> Result<Self, UrlRejection> {
        validate_line(line)?;
        let line = line.trim();

        let url = Url::parse(line)?;
        let host = extract_authority(&url)?;
        let raw_query = url.query().filter(|q| !q.is_empty()).map(str::to_string);

        trace!("Parsed URL: scheme={} host={} path={}", url.scheme(), host, url.path());

        Ok(ParsedUrl {
            original: line.to_string(),
            scheme: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
            raw_query,
            url,
        })
    }

    /// `scheme://host[:port]` with no trailing slash
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// The host root entry, `scheme://host/`
    pub fn root(&self) -> String {
        format!("{}/", self.origin())
    }

    pub fn has_query(&self) -> bool {
        self.raw_query.is_some()
    }

    pub fn query(&self) -> &str {
        self.raw_query.as_deref().unwrap_or("")
    }

    pub fn is_directory_shaped(&self) -> bool {
        is_directory_shaped(&self.path)
    }
}

impl TryFrom<&str> for ParsedUrl {
    type Error = UrlRejection;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        ParsedUrl::new(line)
    }
}
