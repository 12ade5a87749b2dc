use std::future::Future;
use std::time::{Duration, Instant};

/// A completed stage with its wall-clock duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingInfo {
    pub name: &'static str,
    pub duration: Duration,
}

/// Ordered record of how long each pipeline stage took.
#[derive(Debug, Default, Clone)]
pub struct StageTimings {
    completed: Vec<TimingInfo>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, duration: Duration) {
        self.completed.push(TimingInfo { name, duration });
    }

    /// Times a synchronous stage
    pub fn time<T>(&mut self, name: &'static str, operation: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = operation();
        self.record(name, start.elapsed());
        result
    }

    /// Times an async stage
    pub async fn time_async<F>(&mut self, name: &'static str, operation: F) -> F::Output
    where
        F: Future,
    {
        let start = Instant::now();
        let result = operation.await;
        self.record(name, start.elapsed());
        result
    }

    /// Appends another set of timings after this one.
    pub fn merge(&mut self, other: StageTimings) {
        self.completed.extend(other.completed);
    }

    pub fn get(&self, name: &str) -> Option<Duration> {
        self.completed
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.duration)
    }

    pub fn stages(&self) -> &[TimingInfo] {
        &self.completed
    }

    pub fn total(&self) -> Duration {
        self.completed.iter().map(|info| info.duration).sum()
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        for (idx, info) in self.completed.iter().enumerate() {
            report.push_str(&format!(
                "{}. {} - {} ms\n",
                idx + 1,
                info.name,
                info.duration.as_millis()
            ));
        }
        report.push_str(&format!("Total: {} ms\n", self.total().as_millis()));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_keep_order() {
        let mut timings = StageTimings::new();
        let value = timings.time("parse", || 21 * 2);
        timings.record("write", Duration::from_millis(5));

        assert_eq!(value, 42);
        let names: Vec<_> = timings.stages().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["parse", "write"]);
        assert_eq!(timings.get("write"), Some(Duration::from_millis(5)));
        assert!(timings.get("missing").is_none());
    }

    #[test]
    fn test_merge_and_report() {
        let mut first = StageTimings::new();
        first.record("read", Duration::from_millis(2));
        let mut second = StageTimings::new();
        second.record("ingest", Duration::from_millis(3));

        first.merge(second);
        assert_eq!(first.total(), Duration::from_millis(5));
        assert_eq!(first.generate_report(), "1. read - 2 ms\n2. ingest - 3 ms\nTotal: 5 ms\n");
    }

    #[test]
    fn test_time_async() {
        let mut timings = StageTimings::new();
        let value = tokio_test::block_on(timings.time_async("read", async { "done" }));
        assert_eq!(value, "done");
        assert!(timings.get("read").is_some());
    }
}
