//! Algorithm Module
//!
//! Provides the contract pluggable algorithms implement and the data
//! structures they produce.
//!
//! # Structure
//!
//! - [`model`]: Core data structures ([`StepRecord`], [`Control`]) and the
//!   [`Algorithm`] trait
//! - [`scan`]: Reference linear-scan algorithm
//! - [`input`]: JSON input-file loading

pub mod input;
pub mod model;
pub mod scan;

pub use input::{load_input, InputError};
pub use model::{Algorithm, Control, ControlKind, StepRecord, StepSequence};
pub use scan::LinearScan;
