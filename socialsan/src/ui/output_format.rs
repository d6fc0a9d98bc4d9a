// socialsan/src/ui/output_format.rs
//! Formatting of status messages written to stderr.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

/// The kind of a status message, which decides its prefix and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warn,
    Error,
}

impl MessageKind {
    fn prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "done",
            MessageKind::Warn => "warning",
            MessageKind::Error => "error",
        }
    }

    fn color(self) -> AnsiColors {
        match self {
            MessageKind::Info => AnsiColors::Cyan,
            MessageKind::Success => AnsiColors::Green,
            MessageKind::Warn => AnsiColors::Yellow,
            MessageKind::Error => AnsiColors::Red,
        }
    }
}

/// Writes `prefix: message`, colouring the prefix when `supports_color` is set.
pub fn print_message<W: Write>(
    writer: &mut W,
    kind: MessageKind,
    message: &str,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}: {}", kind.prefix().color(kind.color()).bold(), message)
    } else {
        writeln!(writer, "{}: {}", kind.prefix(), message)
    }
}
