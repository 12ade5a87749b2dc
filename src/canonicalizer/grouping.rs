use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

use crate::url_parser::ParsedUrl;

/// How wide a structural key reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingScope {
    /// Key on path and parameter names only, so the same path on two hosts
    /// collapses to the first one seen.
    #[default]
    Path,
    /// Also key on `scheme://host`.
    Origin,
}

/// Signature of a URL that ignores parameter values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuralKey {
    scope: Option<String>,
    path: String,
    params: BTreeSet<String>,
}

impl StructuralKey {
    /// Returns `None` for URLs without a query; those are never grouped.
    pub fn of(parsed: &ParsedUrl, scope: GroupingScope) -> Option<Self> {
        if !parsed.has_query() {
            return None;
        }

        let params = parsed
            .url
            .query_pairs()
            .map(|(name, _)| name.into_owned())
            .collect();

        Some(StructuralKey {
            scope: match scope {
                GroupingScope::Path => None,
                GroupingScope::Origin => Some(parsed.origin()),
            },
            path: parsed.path.clone(),
            params,
        })
    }
}

/// Result of structural grouping: survivors in input order.
#[derive(Debug, Default)]
pub struct Grouped<'a> {
    pub survivors: Vec<&'a ParsedUrl>,
    pub grouped_away: usize,
}

/// Keeps the first URL seen for each structural key.
///
/// URLs without a query pass straight through. Input order decides which
/// representative wins, so callers must hand URLs over in their original
/// order.
pub fn group_structural<'a, I>(urls: I, scope: GroupingScope) -> Grouped<'a>
where
    I: IntoIterator<Item = &'a ParsedUrl>,
{
    let mut seen = HashSet::new();
    let mut grouped = Grouped::default();

    for parsed in urls {
        let duplicate = StructuralKey::of(parsed, scope).is_some_and(|key| !seen.insert(key));
        if duplicate {
            trace!("Structural duplicate dropped: {}", parsed.original);
            grouped.grouped_away += 1;
        } else {
            grouped.survivors.push(parsed);
        }
    }

    grouped
}
