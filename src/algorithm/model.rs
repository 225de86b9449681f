//! Algorithm Data Model
//!
//! Core data structures for pluggable algorithms: the step records they
//! yield, the optional controls they expose, and the [`Algorithm`] trait
//! every concrete algorithm implements.
//!
//! # Example Step Record (JSON form)
//!
//! ```json
//! {
//!   "type": "highlight",
//!   "data": { "index": 3, "value": 42 },
//!   "message": "Processing index 3, value is 42"
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single step in an algorithm's execution trace.
///
/// Steps are produced one at a time, are immutable once yielded, and have
/// no identity beyond their position in the sequence. The `kind` tag is
/// interpreted by the renderer alone; the engine never looks at it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// Renderer-defined tag (e.g. "start", "highlight", "finish")
    #[serde(rename = "type")]
    pub kind: String,

    /// Arbitrary payload the renderer knows how to display
    #[serde(default)]
    pub data: Value,

    /// Human-readable description of this step
    #[serde(default)]
    pub message: String,
}

impl StepRecord {
    /// Creates a new step record.
    pub fn new(kind: impl Into<String>, data: Value, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data,
            message: message.into(),
        }
    }
}

/// Kind of control an algorithm may expose to its host UI.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// One-shot action
    Button,
    /// Numeric range
    Slider,
    /// On/off switch
    Toggle,
}

/// Descriptor for an algorithm-specific control.
///
/// The engine does not interpret controls; hosts may use them to build
/// extra UI next to the standard transport buttons.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Control {
    /// Unique identifier within the algorithm
    pub id: String,

    /// Label shown to the user
    pub label: String,

    /// What kind of widget this control is
    pub kind: ControlKind,
}

impl Control {
    /// Creates a new control descriptor.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}

/// A lazily-evaluated, finite, single-pass sequence of step records.
///
/// A sequence is consumed exactly once, left to right, with no rewind.
/// Restarting means asking the algorithm for a fresh sequence via
/// [`Algorithm::run`].
pub type StepSequence = Box<dyn Iterator<Item = StepRecord>>;

/// Contract every concrete algorithm implements.
///
/// An algorithm encapsulates one unit of work: its input data and the
/// step-by-step trace of its execution. Step production is the one
/// required capability; everything else has a default.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use stepplay::algorithm::{Algorithm, StepRecord, StepSequence};
///
/// struct Countdown {
///     from: u64,
/// }
///
/// impl Algorithm for Countdown {
///     fn name(&self) -> &str {
///         "countdown"
///     }
///
///     fn init(&mut self, input: Value) {
///         self.from = input.as_u64().unwrap_or(0);
///     }
///
///     fn run(&self) -> StepSequence {
///         let from = self.from;
///         Box::new((0..=from).rev().map(|n| {
///             StepRecord::new("update", json!(n), format!("Counting down: {}", n))
///         }))
///     }
/// }
/// ```
pub trait Algorithm {
    /// Stable identifier used by registries, the CLI, and log output.
    fn name(&self) -> &str;

    /// Stores the input data and performs any algorithm-specific
    /// precomputation. The caller guarantees the input has the shape
    /// this algorithm expects; there are no failure modes.
    fn init(&mut self, input: Value);

    /// Starts a fresh pass over the algorithm and returns its step
    /// sequence. Each call restarts from scratch.
    fn run(&self) -> StepSequence;

    /// Controls this algorithm exposes beyond the standard transport.
    fn controls(&self) -> Vec<Control> {
        Vec::new()
    }

    /// Tears down any algorithm-owned external resources.
    fn destroy(&mut self) {}
}
