//! Playback Status
//!
//! The engine's state machine and the payload it hands to status
//! observers on every observable transition.

use std::fmt;

/// State of the playback engine.
///
/// Transitions: `Idle → Ready → Playing ⇄ Paused → Finished`, with
/// reset returning to `Ready` from any state once an algorithm is
/// loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No algorithm loaded yet
    Idle,
    /// Algorithm loaded, sequence fresh, nothing rendered
    Ready,
    /// Timed loop is running
    Playing,
    /// Timed loop suspended; pending step cancelled
    Paused,
    /// Sequence exhausted; terminal until reset
    Finished,
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Finished => "finished",
        };
        write!(f, "{}", name)
    }
}

/// Notification payload delivered to the engine's status hook.
///
/// Consumers (transport buttons, progress labels) are expected to update
/// their presentation from this alone.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    /// The status being reported
    pub status: PlaybackStatus,

    /// Current step count, when meaningful for this transition
    pub step: Option<usize>,

    /// The rendered step's message, when one was just forwarded
    pub message: Option<String>,
}

impl StatusUpdate {
    /// An update carrying only a status.
    pub fn status(status: PlaybackStatus) -> Self {
        Self {
            status,
            step: None,
            message: None,
        }
    }

    /// An update carrying a status and a step count.
    pub fn with_step(status: PlaybackStatus, step: usize) -> Self {
        Self {
            status,
            step: Some(step),
            message: None,
        }
    }

    /// An update carrying a status, step count, and step message.
    pub fn with_message(status: PlaybackStatus, step: usize, message: impl Into<String>) -> Self {
        Self {
            status,
            step: Some(step),
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(PlaybackStatus::Idle.to_string(), "idle");
        assert_eq!(PlaybackStatus::Ready.to_string(), "ready");
        assert_eq!(PlaybackStatus::Playing.to_string(), "playing");
        assert_eq!(PlaybackStatus::Paused.to_string(), "paused");
        assert_eq!(PlaybackStatus::Finished.to_string(), "finished");
    }

    #[test]
    fn test_status_equality() {
        assert_eq!(PlaybackStatus::Playing, PlaybackStatus::Playing);
        assert_ne!(PlaybackStatus::Playing, PlaybackStatus::Paused);
    }

    #[test]
    fn test_update_constructors() {
        let plain = StatusUpdate::status(PlaybackStatus::Paused);
        assert_eq!(plain.status, PlaybackStatus::Paused);
        assert!(plain.step.is_none());
        assert!(plain.message.is_none());

        let stepped = StatusUpdate::with_step(PlaybackStatus::Ready, 0);
        assert_eq!(stepped.step, Some(0));

        let full = StatusUpdate::with_message(PlaybackStatus::Playing, 3, "third");
        assert_eq!(full.step, Some(3));
        assert_eq!(full.message.as_deref(), Some("third"));
    }
}
