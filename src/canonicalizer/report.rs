use tracing::{debug, info};

use crate::utils::timing::StageTimings;

/// Counters describing one canonicalization run.
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    pub lines: usize,             // non-blank input lines
    pub accepted: usize,          // lines that parsed into a URL with a host
    pub rejected: usize,          // lines skipped with a warning
    pub grouped_away: usize,      // structural duplicates discarded
    pub kept: usize,              // parameterised URLs kept verbatim
    pub file_endpoints: usize,    // of those, file-shaped ones (`page.php?id=7`)
    pub demoted: usize,           // parameterised URLs collapsed to a directory stem
    pub dropped: usize,           // no stem, or a versioned file
    pub output_entries: usize,
    pub timings: StageTimings,
}

impl RunReport {
    pub fn log(&self) {
        info!(
            "Canonicalized {} lines ({} accepted, {} rejected) into {} entries",
            self.lines, self.accepted, self.rejected, self.output_entries
        );
        info!(
            "Grouping dropped {} duplicates; kept {} ({} file endpoints), demoted {}, dropped {}",
            self.grouped_away, self.kept, self.file_endpoints, self.demoted, self.dropped
        );
        debug!("Stage timings:\n{}", self.timings.generate_report());
    }
}
