use thiserror::Error;
use tracing::trace;
use url::Url;

/// Reasons a line is refused by the parser.
///
/// None of these are fatal: the offending line is logged and skipped.
#[derive(Debug, Error)]
pub enum UrlRejection {
    #[error("URL cannot be empty")]
    Empty,

    #[error("failed to parse URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("URL has no host component")]
    MissingHost,
}

/// Validates basic line requirements before handing it to the URL parser
pub fn validate_line(line: &str) -> Result<(), UrlRejection> {
    if line.trim().is_empty() {
        return Err(UrlRejection::Empty);
    }
    Ok(())
}

/// Returns `host[:port]` for a parsed URL, or rejects it when the host is absent.
///
/// The port is only present when it differs from the scheme default, since
/// the `url` crate drops default ports while parsing.
pub fn extract_authority(parsed_url: &Url) -> Result<String, UrlRejection> {
    let host = match parsed_url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => {
            trace!("URL has no host: {}", parsed_url);
            return Err(UrlRejection::MissingHost);
        }
    };

    Ok(match parsed_url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
