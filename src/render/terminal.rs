//! Terminal Renderer
//!
//! Prints one line per step, colored by the step's tag. Tags the
//! renderer does not recognize are printed uncolored, so algorithms are
//! free to invent their own.

use std::collections::HashMap;

use colored::{Color, Colorize};
use log::debug;
use once_cell::sync::Lazy;

use crate::algorithm::StepRecord;

use super::Renderer;

/// Colors for the well-known step tags.
static KIND_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("start", Color::Green),
        ("highlight", Color::Yellow),
        ("update", Color::Cyan),
        ("finish", Color::Green),
    ])
});

/// Renders steps as colored lines on stdout.
#[derive(Debug)]
pub struct TerminalRenderer {
    use_color: bool,
    lines_written: usize,
}

impl TerminalRenderer {
    /// Creates a terminal renderer with color enabled.
    pub fn new() -> Self {
        Self {
            use_color: true,
            lines_written: 0,
        }
    }

    /// Enables or disables colored output.
    pub fn set_use_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    /// Number of step lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Formats a step as the line that will be printed.
    fn format_line(&self, step: &StepRecord) -> String {
        let tag = format!("[{:>9}]", step.kind);

        let tag = match KIND_COLORS.get(step.kind.as_str()) {
            Some(&color) if self.use_color => tag.color(color).to_string(),
            _ => tag,
        };

        if step.message.is_empty() {
            format!("{} {}", tag, step.data)
        } else {
            format!("{} {}", tag, step.message)
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, step: &StepRecord) {
        let line = self.format_line(step);
        println!("{}", line);

        self.lines_written += 1;
        debug!("Rendered step kind '{}'", step.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_line_includes_tag_and_message() {
        let mut renderer = TerminalRenderer::new();
        renderer.set_use_color(false);

        let line = renderer.format_line(&StepRecord::new("start", json!(null), "Starting"));

        assert!(line.contains("start"));
        assert!(line.contains("Starting"));
    }

    #[test]
    fn test_format_line_falls_back_to_data() {
        let mut renderer = TerminalRenderer::new();
        renderer.set_use_color(false);

        let line = renderer.format_line(&StepRecord::new("update", json!(7), ""));

        assert!(line.contains('7'));
    }

    #[test]
    fn test_unknown_kind_not_colored() {
        let renderer = TerminalRenderer::new();

        let line = renderer.format_line(&StepRecord::new("custom", json!(null), "hello"));

        // No ANSI escape for unrecognized tags even with color on
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    fn test_lines_written_counter() {
        let mut renderer = TerminalRenderer::new();
        renderer.set_use_color(false);

        renderer.render(&StepRecord::new("start", json!(null), "go"));
        renderer.render(&StepRecord::new("finish", json!(null), "done"));

        assert_eq!(renderer.lines_written(), 2);
    }

    #[test]
    fn test_known_kinds_have_colors() {
        for kind in ["start", "highlight", "update", "finish"] {
            assert!(KIND_COLORS.contains_key(kind));
        }
    }
}
