//! Rendering Module
//!
//! The boundary between the playback engine and whatever presents steps
//! to a human.
//!
//! # Structure
//!
//! - [`terminal`]: One-line-per-step colored terminal output
//! - [`capture`]: In-memory step recording for tests and headless use

pub mod capture;
pub mod terminal;

use crate::algorithm::StepRecord;

/// Accepts step records and updates a presentation surface.
///
/// The engine forwards each step here synchronously and makes no
/// assumption about what a step's `kind` means; interpreting the tag is
/// entirely the renderer's business.
pub trait Renderer {
    /// Presents one step.
    fn render(&mut self, step: &StepRecord);
}

pub use capture::CaptureRenderer;
pub use terminal::TerminalRenderer;
