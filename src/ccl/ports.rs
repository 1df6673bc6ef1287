//! Host-effect ports
//!
//! The engine itself is pure; the only outward effect it ever requests is
//! copying assembled text to the system clipboard. That effect lives behind a
//! trait so library users (and tests) can supply their own sink.

use std::fmt;

/// Errors surfaced by a host port.
#[derive(Debug)]
pub enum PortError {
    /// The clipboard backend refused or failed the copy.
    Clipboard(String),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::Clipboard(msg) => write!(f, "clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for PortError {}

/// Destination for assembled letter text.
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), PortError>;
}

/// Clipboard that discards everything. Used in tests and headless runs.
#[derive(Debug, Default)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), PortError> {
        Ok(())
    }
}
