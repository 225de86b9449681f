//! Playback Timeline
//!
//! Records when each step was rendered, for generating playback
//! reports after a run.

use std::time::{Duration, Instant};

use crate::algorithm::StepRecord;

/// A single rendered-step event.
#[derive(Debug, Clone)]
pub struct StepEvent {
    /// 1-based step count at the time of rendering
    pub index: usize,
    /// The step's renderer tag
    pub kind: String,
    /// The step's message
    pub message: String,
    /// When the step was rendered
    pub timestamp: Instant,
}

/// Tracks the timeline of a playback run.
///
/// Records each rendered step, enabling timing reports and a
/// human-readable summary once playback finishes.
#[derive(Debug, Clone)]
pub struct PlaybackTimeline {
    events: Vec<StepEvent>,
    start_time: Instant,
}

impl PlaybackTimeline {
    /// Creates a new timeline starting now.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Records a rendered step.
    pub fn record(&mut self, index: usize, step: &StepRecord) {
        self.events.push(StepEvent {
            index,
            kind: step.kind.clone(),
            message: step.message.clone(),
            timestamp: Instant::now(),
        });
    }

    /// Returns all recorded events.
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total elapsed time since the timeline was (re)started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Gaps between consecutive rendered steps, in milliseconds.
    pub fn gaps(&self) -> Vec<u128> {
        self.events
            .windows(2)
            .map(|pair| pair[1].timestamp.duration_since(pair[0].timestamp).as_millis())
            .collect()
    }

    /// Clears all events and restarts the clock.
    pub fn clear(&mut self) {
        self.events.clear();
        self.start_time = Instant::now();
    }

    /// Generates a human-readable summary of the run.
    pub fn summary(&self) -> String {
        let mut output = String::from("Playback summary:\n");

        output.push_str(&format!("  Steps rendered: {}\n", self.events.len()));
        output.push_str(&format!(
            "  Total time: {} ms\n",
            self.elapsed().as_millis()
        ));

        let gaps = self.gaps();
        if !gaps.is_empty() {
            let avg = gaps.iter().sum::<u128>() / gaps.len() as u128;
            output.push_str(&format!("  Average step gap: {} ms\n", avg));
        }

        output
    }
}

impl Default for PlaybackTimeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::thread;

    fn step(kind: &str, message: &str) -> StepRecord {
        StepRecord::new(kind, Value::Null, message)
    }

    #[test]
    fn test_timeline_creation() {
        let timeline = PlaybackTimeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.len(), 0);
    }

    #[test]
    fn test_record_events() {
        let mut timeline = PlaybackTimeline::new();
        timeline.record(1, &step("start", "go"));
        timeline.record(2, &step("highlight", "first"));

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.events()[0].index, 1);
        assert_eq!(timeline.events()[1].kind, "highlight");
    }

    #[test]
    fn test_gaps_between_steps() {
        let mut timeline = PlaybackTimeline::new();
        timeline.record(1, &step("start", "go"));
        thread::sleep(Duration::from_millis(20));
        timeline.record(2, &step("finish", "done"));

        let gaps = timeline.gaps();
        assert_eq!(gaps.len(), 1);
        assert!(gaps[0] >= 20);
    }

    #[test]
    fn test_gaps_empty_with_single_event() {
        let mut timeline = PlaybackTimeline::new();
        timeline.record(1, &step("start", "go"));

        assert!(timeline.gaps().is_empty());
    }

    #[test]
    fn test_clear_restarts_clock() {
        let mut timeline = PlaybackTimeline::new();
        timeline.record(1, &step("start", "go"));
        thread::sleep(Duration::from_millis(10));

        timeline.clear();

        assert!(timeline.is_empty());
        assert!(timeline.elapsed().as_millis() < 10);
    }

    #[test]
    fn test_elapsed_grows() {
        let timeline = PlaybackTimeline::new();
        thread::sleep(Duration::from_millis(20));

        assert!(timeline.elapsed().as_millis() >= 20);
    }

    #[test]
    fn test_summary_contents() {
        let mut timeline = PlaybackTimeline::new();
        timeline.record(1, &step("start", "go"));
        timeline.record(2, &step("finish", "done"));

        let summary = timeline.summary();
        assert!(summary.contains("Steps rendered: 2"));
        assert!(summary.contains("Total time:"));
        assert!(summary.contains("Average step gap:"));
    }

    #[test]
    fn test_summary_empty_run() {
        let timeline = PlaybackTimeline::new();
        let summary = timeline.summary();

        assert!(summary.contains("Steps rendered: 0"));
        assert!(!summary.contains("Average"));
    }

    #[test]
    fn test_timeline_default() {
        let timeline = PlaybackTimeline::default();
        assert!(timeline.is_empty());
    }
}
