//! Playback Module
//!
//! Provides the engine that drives an algorithm's step sequence at a
//! configurable cadence, plus the status machinery observers consume.
//!
//! # Architecture
//!
//! - [`engine`]: The playback engine with transport controls
//! - [`status`]: Status state machine and notification payload
//! - [`timeline`]: Per-run timing record

pub mod engine;
pub mod status;
pub mod timeline;

pub use engine::{PlaybackEngine, StatusHook, DEFAULT_SPEED};
pub use status::{PlaybackStatus, StatusUpdate};
pub use timeline::PlaybackTimeline;
