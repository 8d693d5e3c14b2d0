//! Rendering surfaces.
//!
//! States and systems never know what they are drawing to. They receive a
//! `&mut dyn Surface` and write lines into it; the hosting loop decides
//! whether those lines end up in a test transcript, a log, or a terminal.

use tracing::info;

/// Opaque sink for drawing and printing calls.
pub trait Surface {
    /// Emit one line of output.
    fn write_line(&mut self, line: &str);
}

/// Surface that records every line it receives.
///
/// # Example
///
/// ```rust
/// use statecraft::surface::{Surface, Transcript};
///
/// let mut transcript = Transcript::new();
/// transcript.write_line("hello");
/// assert_eq!(transcript.last(), Some("hello"));
/// assert_eq!(transcript.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The most recently written line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Number of lines written.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drain the recorded lines, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Surface for Transcript {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Surface that forwards every line to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceSurface;

impl Surface for TraceSurface {
    fn write_line(&mut self, line: &str) {
        info!(target: "statecraft::surface", "{line}");
    }
}

impl Surface for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
