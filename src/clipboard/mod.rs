// Clipboard access
//
// The terminal implementation asks the emulator to set the system clipboard
// through an OSC 52 escape sequence. Terminals that don't support it simply
// ignore the sequence, so a successful write is not a guarantee of delivery.

use crossterm::{clipboard::CopyToClipboard, execute};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to write clipboard escape sequence: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard is unavailable")]
    Unavailable,
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes OSC 52 to the given terminal output
pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalClipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))?;
        Ok(())
    }
}

/// Keeps the last copied value in memory (`--no-clipboard` and tests)
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    disabled: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every copy fails
    #[cfg(test)]
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            disabled: true,
        }
    }

    #[cfg(test)]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.disabled {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut cb = MemoryClipboard::new();
        assert_eq!(cb.contents(), None);
        cb.copy("SHA256:a1:b2").unwrap();
        assert_eq!(cb.contents(), Some("SHA256:a1:b2"));
    }

    #[test]
    fn test_unavailable_clipboard_errors() {
        let mut cb = MemoryClipboard::unavailable();
        assert!(matches!(cb.copy("x"), Err(ClipboardError::Unavailable)));
        assert_eq!(cb.contents(), None);
    }

    #[test]
    fn test_terminal_clipboard_emits_osc52() {
        let mut cb = TerminalClipboard::new(Vec::new());
        cb.copy("hello").unwrap();
        let written = String::from_utf8(cb.out).unwrap();
        assert!(written.starts_with("\x1b]52;"));
        // base64("hello")
        assert!(written.contains("aGVsbG8="));
    }
}
