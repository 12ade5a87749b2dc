use super::parser::ParsedUrl;

/// Rebuilds a URL as a directory stem made of `segments`.
///
/// Only scheme, host and port survive, the same origin the directory
/// prefixes use; credentials, query and fragment are dropped. The path
/// becomes `/seg1/.../segN/`.
pub fn rebuild_as_directory(parsed: &ParsedUrl, segments: &[&str]) -> String {
    format!("{}/{}/", parsed.origin(), segments.join("/"))
}
