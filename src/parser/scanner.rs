//! # Line Scanner
//!
//! Splits ticket text into `(CommandType, raw argument)` pairs.
//!
//! ```text
//! INIT                      → (Init, "")
//!   # comment               → skipped
//! PRINTLF  hello   world    → (PrintLf, "hello   world")
//! PRINTRAW                  ┐
//! first line                │ → (PrintRaw, "first line\n\nthird\n")
//!                           │
//! third                     │
//! >>>                       ┘
//! ```
//!
//! Comments are full-line only: `#` must be the first non-whitespace
//! character. A `#` anywhere else is ordinary argument text.

use std::io::BufRead;
use tracing::warn;

use crate::error::{TicketError, TicketResult};

use super::command::CommandType;

/// Line that closes a block capture.
pub const BLOCK_TERMINATOR: &str = ">>>";

/// Token separators: tab, vertical tab, form feed, carriage return, space.
pub fn is_separator(c: char) -> bool {
    matches!(c, '\t' | '\u{0B}' | '\u{0C}' | '\r' | ' ')
}

/// Split off the first token; the rest starts after the separator run.
pub(crate) fn split_token(s: &str) -> (&str, &str) {
    match s.find(is_separator) {
        Some(i) => (&s[..i], s[i..].trim_start_matches(is_separator)),
        None => (s, ""),
    }
}

/// One directive as found in the source, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub kind: CommandType,
    pub argument: String,
    /// 1-based line of the directive name
    pub line: usize,
}

enum Mode {
    Normal,
    Capturing {
        kind: CommandType,
        line: usize,
        buffer: String,
    },
}

/// Scan the whole input.
///
/// Fails on the first unknown directive. A block that is still open at end
/// of input is an error rather than being closed implicitly.
pub fn scan<R: BufRead>(reader: R) -> TicketResult<Vec<ScannedLine>> {
    let mut scanned = Vec::new();
    let mut mode = Mode::Normal;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        if let Mode::Capturing { kind, line: start, buffer } = &mut mode {
            if line != BLOCK_TERMINATOR {
                buffer.push_str(&line);
                buffer.push('\n');
                continue;
            }
            scanned.push(ScannedLine {
                kind: *kind,
                argument: std::mem::take(buffer),
                line: *start,
            });
            mode = Mode::Normal;
            continue;
        }

        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (name, argument) = split_token(trimmed);
        let kind = CommandType::from_name(name).ok_or_else(|| TicketError::UnknownCommand {
            line: number,
            name: name.to_string(),
        })?;

        if kind.is_block() {
            if !argument.is_empty() {
                warn!(line = number, command = %kind, ignored = argument, "text after block command");
            }
            mode = Mode::Capturing {
                kind,
                line: number,
                buffer: String::new(),
            };
            continue;
        }

        scanned.push(ScannedLine {
            kind,
            argument: argument.to_string(),
            line: number,
        });
    }

    if let Mode::Capturing { kind, line, .. } = mode {
        return Err(TicketError::UnterminatedBlock {
            line,
            command: kind,
        });
    }

    Ok(scanned)
}
