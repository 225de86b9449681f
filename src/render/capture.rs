//! Capture Renderer
//!
//! Records every step it receives instead of displaying anything.
//! Used by the engine tests and by hosts that want a transcript of a
//! run without a presentation surface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::algorithm::StepRecord;

use super::Renderer;

/// Shared buffer of captured steps.
pub type CaptureBuffer = Rc<RefCell<Vec<StepRecord>>>;

/// A renderer that appends each step to a shared buffer.
///
/// The buffer is reference-counted so the caller can keep a handle and
/// inspect what was rendered while the engine owns the renderer itself.
#[derive(Debug, Default)]
pub struct CaptureRenderer {
    steps: CaptureBuffer,
}

impl CaptureRenderer {
    /// Creates a capture renderer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the shared step buffer.
    pub fn buffer(&self) -> CaptureBuffer {
        Rc::clone(&self.steps)
    }
}

impl Renderer for CaptureRenderer {
    fn render(&mut self, step: &StepRecord) {
        self.steps.borrow_mut().push(step.clone());
    }
}
