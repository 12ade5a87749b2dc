use std::collections::HashSet;

/// Deduplicating accumulator for output entries.
///
/// Insertion order is irrelevant; [`CanonicalSet::into_sorted`] imposes a
/// byte-wise order at the end.
#[derive(Debug, Default, Clone)]
pub struct CanonicalSet {
    entries: HashSet<String>,
}

impl CanonicalSet {
    /// Returns false if the entry was already present
    pub fn insert(&mut self, entry: impl Into<String>) -> bool {
        self.entries.insert(entry.into())
    }

    /// Consumes the set into a lexicographically sorted list.
    pub fn into_sorted(self) -> Vec<String> {
        let mut sorted: Vec<String> = self.entries.into_iter().collect();
        sorted.sort_unstable();
        sorted
    }
}

impl FromIterator<String> for CanonicalSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Renders entries one per line, each followed by `\n`.
pub fn render(entries: &[String]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.len() + 1).sum());
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}
