//! Linear Scan Algorithm
//!
//! The reference implementation of the [`Algorithm`] contract: walks an
//! input array left to right, yielding one highlight step per element.
//! Useful as a template when writing new algorithms, and as the default
//! algorithm for the CLI.

use serde_json::{json, Value};

use super::model::{Algorithm, StepRecord, StepSequence};

/// Walks an input JSON array element by element.
///
/// Yields a `start` step carrying the whole array, one `highlight` step
/// per element with an `{index, value}` payload, and a final `finish`
/// step.
#[derive(Debug, Default)]
pub struct LinearScan {
    items: Vec<Value>,
}

impl LinearScan {
    /// Creates a linear scan with no input yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of input elements currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no input has been loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Algorithm for LinearScan {
    fn name(&self) -> &str {
        "scan"
    }

    /// Stores the array to walk. Non-array input is treated as a
    /// single-element array.
    fn init(&mut self, input: Value) {
        self.items = match input {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        };
    }

    fn run(&self) -> StepSequence {
        let items = self.items.clone();

        let start = std::iter::once(StepRecord::new(
            "start",
            Value::Array(items.clone()),
            format!("Starting scan of {} elements", items.len()),
        ));

        let body = items.into_iter().enumerate().map(|(index, value)| {
            let message = format!("Processing index {}, value is {}", index, value);
            StepRecord::new("highlight", json!({ "index": index, "value": value }), message)
        });

        let finish = std::iter::once(StepRecord::new("finish", Value::Null, "Scan complete"));

        Box::new(start.chain(body).chain(finish))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_name() {
        assert_eq!(LinearScan::new().name(), "scan");
    }

    #[test]
    fn test_scan_init_with_array() {
        let mut scan = LinearScan::new();
        scan.init(json!([1, 2, 3]));

        assert_eq!(scan.len(), 3);
        assert!(!scan.is_empty());
    }

    #[test]
    fn test_scan_init_with_scalar() {
        let mut scan = LinearScan::new();
        scan.init(json!(42));

        assert_eq!(scan.len(), 1);
    }

    #[test]
    fn test_scan_init_with_null() {
        let mut scan = LinearScan::new();
        scan.init(Value::Null);

        assert!(scan.is_empty());
    }

    #[test]
    fn test_scan_step_count() {
        let mut scan = LinearScan::new();
        scan.init(json!([10, 20, 30]));

        // start + one per element + finish
        let steps: Vec<_> = scan.run().collect();
        assert_eq!(steps.len(), 5);
    }

    #[test]
    fn test_scan_step_order_and_kinds() {
        let mut scan = LinearScan::new();
        scan.init(json!(["a", "b"]));

        let steps: Vec<_> = scan.run().collect();

        assert_eq!(steps[0].kind, "start");
        assert_eq!(steps[1].kind, "highlight");
        assert_eq!(steps[2].kind, "highlight");
        assert_eq!(steps[3].kind, "finish");
    }

    #[test]
    fn test_scan_highlight_payload() {
        let mut scan = LinearScan::new();
        scan.init(json!([7]));

        let steps: Vec<_> = scan.run().collect();

        assert_eq!(steps[1].data, json!({"index": 0, "value": 7}));
        assert!(steps[1].message.contains("index 0"));
    }

    #[test]
    fn test_scan_empty_input_yields_start_and_finish() {
        let mut scan = LinearScan::new();
        scan.init(json!([]));

        let steps: Vec<_> = scan.run().collect();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].kind, "start");
        assert_eq!(steps[1].kind, "finish");
    }

    #[test]
    fn test_scan_run_is_restartable() {
        let mut scan = LinearScan::new();
        scan.init(json!([1, 2]));

        let first: Vec<_> = scan.run().collect();
        let second: Vec<_> = scan.run().collect();

        assert_eq!(first, second);
    }
}
