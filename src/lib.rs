//! StepPlay - Step-Playback Engine for Algorithm Visualization
//!
//! A small framework that plays back algorithm execution as a
//! step-by-step animation. Algorithms produce lazy, finite sequences of
//! step records; a renderer presents each record; the engine drives the
//! sequence at a configurable cadence with full transport controls.
//!
//! # Architecture
//!
//! The library is organized into three main modules:
//!
//! - [`algorithm`]: The contract pluggable algorithms implement and the
//!   step records they yield
//! - [`playback`]: The engine with play/pause/step/reset/speed controls
//! - [`render`]: The renderer boundary plus terminal and capture
//!   renderers
//!
//! # Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use stepplay::algorithm::{Algorithm, LinearScan};
//! use stepplay::playback::PlaybackEngine;
//! use stepplay::render::TerminalRenderer;
//!
//! // Construct and initialize an algorithm
//! let mut algorithm = LinearScan::new();
//! algorithm.init(json!([5, 3, 8, 1]));
//!
//! // Hand it to the engine and play it back
//! let mut engine = PlaybackEngine::new(Box::new(TerminalRenderer::new()));
//! engine.load_algorithm(Box::new(algorithm));
//! engine.set_speed(std::time::Duration::from_millis(200));
//! engine.run();
//! ```

pub mod algorithm;
pub mod playback;
pub mod render;

// Re-export commonly used types
pub use algorithm::{Algorithm, LinearScan, StepRecord, StepSequence};
pub use playback::{PlaybackEngine, PlaybackStatus, StatusUpdate};
pub use render::Renderer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "StepPlay";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "StepPlay");
    }

    #[test]
    fn test_module_exports_step_record() {
        let step = StepRecord::new("start", serde_json::Value::Null, "go");
        assert_eq!(step.kind, "start");
    }

    #[test]
    fn test_module_exports_engine() {
        let engine = PlaybackEngine::new(Box::new(render::CaptureRenderer::new()));
        assert_eq!(engine.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "Version components should be numeric");
        }
    }
}
