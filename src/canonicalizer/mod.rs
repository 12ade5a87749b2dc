//! The canonicalization pipeline.
//!
//! A run has two stages. The per-line stage parses each URL and emits its
//! ancestor directories and host root. It is independent per line and runs on
//! a worker pool. The batch stage then walks the parsed URLs in input order,
//! drops structural duplicates and decides what each surviving parameterised
//! URL becomes:
//!
//! * a disallowed extension collapses to a directory stem (or disappears);
//! * a file endpoint whose query only looks like a version marker is not
//!   kept, since its directories already cover it;
//! * anything else is kept verbatim.
//!
//! Everything lands in a [`CanonicalSet`] that is sorted once at the end.

pub mod canonical_set;
pub mod extension_policy;
pub mod grouping;
pub mod report;
pub mod workers;

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, trace, warn};

use crate::settings::Settings;
use crate::url_parser::{classify, directory_prefixes, ParsedUrl, QueryClass, UrlRejection};
use crate::utils::timing::StageTimings;

pub use canonical_set::CanonicalSet;
pub use extension_policy::{ExtensionPolicy, Retention};
pub use grouping::{group_structural, GroupingScope, StructuralKey};
pub use report::RunReport;

/// Output of the per-line stage for one accepted URL
#[derive(Debug, Clone)]
pub struct LineOutcome {
    pub parsed: ParsedUrl,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Canonicalizer {
    policy: ExtensionPolicy,
    version_markers: Vec<String>,
    scope: GroupingScope,
    emit_host_root: bool,
    workers: usize,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Canonicalizer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            policy: ExtensionPolicy::new(
                settings.retained_extensions.iter().cloned(),
                settings.max_stem_segments,
            ),
            version_markers: settings.version_markers.clone(),
            scope: settings.grouping_scope,
            emit_host_root: settings.emit_host_root,
            workers: settings.workers.max(1),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Per-line stage for a single URL.
    pub fn process_line(&self, line: &str) -> Result<LineOutcome, UrlRejection> {
        let parsed = ParsedUrl::new(line)?;

        let mut entries = Vec::new();
        if self.emit_host_root {
            entries.push(parsed.root());
        }
        entries.extend(directory_prefixes(&parsed));

        trace!("{} -> {} entries", parsed.original, entries.len());
        Ok(LineOutcome { parsed, entries })
    }

    /// Like [`process_line`](Self::process_line), but logs and swallows rejections.
    pub(crate) fn ingest(&self, line: &str) -> Option<LineOutcome> {
        match self.process_line(line) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                warn!("Skipping invalid URL {:?}: {}", line, err);
                None
            }
        }
    }

    pub fn classify(&self, parsed: &ParsedUrl) -> QueryClass {
        classify(parsed.query(), &parsed.path, &self.version_markers)
    }

    /// What a parameterised URL that survived grouping turns into.
    pub fn retention(&self, parsed: &ParsedUrl) -> Retention {
        self.retention_with(parsed, &self.classify(parsed))
    }

    fn retention_with(&self, parsed: &ParsedUrl, class: &QueryClass) -> Retention {
        match self.policy.apply(parsed) {
            Retention::Keep if class.is_versioned_file() => Retention::Drop,
            other => other,
        }
    }

    /// Batch stage: grouping, retention and the final sorted set.
    ///
    /// `outcomes` must be in input order; the first URL per structural key wins.
    pub fn finish(&self, outcomes: Vec<LineOutcome>, report: &mut RunReport) -> Vec<String> {
        report.accepted = outcomes.len();
        report.rejected = report.lines.saturating_sub(outcomes.len());
        let mut set: CanonicalSet = outcomes
            .iter()
            .flat_map(|outcome| outcome.entries.iter().cloned())
            .collect();

        let grouped = group_structural(outcomes.iter().map(|o| &o.parsed), self.scope);
        report.grouped_away = grouped.grouped_away;

        for parsed in grouped.survivors.into_iter().filter(|p| p.has_query()) {
            let class = self.classify(parsed);
            match self.retention_with(parsed, &class) {
                Retention::Keep => {
                    if class.is_parameterised_file() {
                        report.file_endpoints += 1;
                    }
                    report.kept += 1;
                    set.insert(parsed.original.clone());
                }
                Retention::Demote(stem) => {
                    trace!("Demoted {} to {}", parsed.original, stem);
                    report.demoted += 1;
                    set.insert(stem);
                }
                Retention::Drop => {
                    debug!("Dropping {}", parsed.original);
                    report.dropped += 1;
                }
            }
        }

        let sorted = set.into_sorted();
        report.output_entries = sorted.len();
        sorted
    }

    /// Runs the whole pipeline on the current thread.
    pub fn canonicalize<S: AsRef<str>>(&self, lines: &[S]) -> (Vec<String>, RunReport) {
        let mut report = RunReport::default();
        let mut timings = StageTimings::new();

        let lines: Vec<&str> = lines
            .iter()
            .map(|line| line.as_ref())
            .filter(|line| !line.trim().is_empty())
            .collect();
        report.lines = lines.len();

        let outcomes: Vec<LineOutcome> = timings.time("ingest", || {
            lines.iter().filter_map(|line| self.ingest(line)).collect()
        });
        let sorted = timings.time("batch", || self.finish(outcomes, &mut report));

        report.timings = timings;
        (sorted, report)
    }

    /// Runs the pipeline with the per-line stage spread over the worker pool.
    ///
    /// # Errors
    /// Fails only if a worker task panics or is cancelled.
    #[instrument(level = "debug", skip_all, fields(lines = lines.len(), workers = self.workers))]
    pub async fn run(&self, lines: Vec<String>) -> Result<(Vec<String>, RunReport)> {
        let mut report = RunReport::default();
        let mut timings = StageTimings::new();

        let lines: Vec<String> = lines.into_iter().filter(|l| !l.trim().is_empty()).collect();
        report.lines = lines.len();

        let start = Instant::now();
        let outcomes =
            workers::process_in_workers(Arc::new(self.clone()), lines, self.workers).await?;
        timings.record("ingest", start.elapsed());

        let sorted = timings.time("batch", || self.finish(outcomes, &mut report));

        report.timings = timings;
        Ok((sorted, report))
    }
}
