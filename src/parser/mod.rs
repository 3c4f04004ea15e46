//! # Ticket Language Parser
//!
//! Turns ticket text into validated [`Command`]s.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌──────────────────────┐     ┌───────────────────┐
//! │ Ticket    │ ──► │ Scanner              │ ──► │ Grammar           │ ──► Vec<Command>
//! │ (text)    │     │ (type, raw argument) │     │ (typed payload)   │
//! └───────────┘     └──────────────────────┘     └───────────────────┘
//! ```
//!
//! Parsing is eager: the whole input is scanned and compiled before the
//! first command is returned, so an error never leaves half a ticket behind.
//!
//! ## Example
//!
//! ```
//! use ticketfile::parser::{self, CommandType};
//!
//! let commands = parser::parse_str("INIT\nPRINTLF hello\nCUT\n").unwrap();
//! let kinds: Vec<CommandType> = commands.iter().map(|c| c.kind()).collect();
//! assert_eq!(kinds, [CommandType::Init, CommandType::PrintLf, CommandType::Cut]);
//! ```

mod command;
mod grammar;
pub mod scanner;

pub use command::{Command, CommandType, Payload};
pub use grammar::MAX_TAB_STOPS;
pub use scanner::{BLOCK_TERMINATOR, ScannedLine, scan};

use std::io::BufRead;
use tracing::debug;

use crate::error::{TicketError, TicketResult};

/// Scan and compile a whole ticket.
pub fn parse<R: BufRead>(reader: R) -> TicketResult<Vec<Command>> {
    scan(reader)?
        .into_iter()
        .map(|scanned| {
            let command = Command::compile(scanned.kind, &scanned.argument)
                .map_err(|source| TicketError::Validation {
                    line: scanned.line,
                    command: scanned.kind,
                    argument: scanned.argument.clone(),
                    source,
                })?
                .at_line(scanned.line);
            debug!(line = command.line(), command = %command.kind(), payload = ?command.payload(), "compiled");
            Ok(command)
        })
        .collect()
}

/// [`parse`] for in-memory tickets.
pub fn parse_str(input: &str) -> TicketResult<Vec<Command>> {
    parse(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::protocol::text::Alignment;
    use pretty_assertions::assert_eq;

    const TICKET: &str = "
INIT

PRINTLF print this

# This is a comment

ALIGN RIGHT
PRINTRAW
This is
multiline
>>>

\t";

    #[test]
    fn test_parse() {
        let commands = parse_str(TICKET).unwrap();
        let summary: Vec<(CommandType, &str, usize)> = commands
            .iter()
            .map(|c| (c.kind(), c.argument(), c.line()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (CommandType::Init, "", 2),
                (CommandType::PrintLf, "print this", 4),
                (CommandType::Align, "RIGHT", 8),
                (CommandType::PrintRaw, "This is\nmultiline\n", 9),
            ]
        );
        assert_eq!(commands[2].payload(), &Payload::Align(Alignment::Right));
    }

    #[test]
    fn test_comments_and_blank_lines_do_not_change_commands() {
        let plain = parse_str("INIT\nPRINT a\nCUT PARTIAL\n").unwrap();
        let noisy = parse_str("\n# head\nINIT\n\n\n  # mid\nPRINT a\n#\n\nCUT PARTIAL\n# tail\n").unwrap();
        let strip = |cmds: Vec<Command>| -> Vec<(CommandType, String, Payload)> {
            cmds.into_iter()
                .map(|c| (c.kind(), c.argument().to_string(), c.payload().clone()))
                .collect()
        };
        assert_eq!(strip(plain), strip(noisy));
    }

    #[test]
    fn test_validation_error_carries_location() {
        let err = parse_str("INIT\nMARGINLEFT 65536\n").unwrap_err();
        match err {
            TicketError::Validation {
                line,
                command,
                argument,
                source,
            } => {
                assert_eq!(line, 2);
                assert_eq!(command, CommandType::LeftMargin);
                assert_eq!(argument, "65536");
                assert_eq!(
                    source,
                    ValidationError::OutOfRange {
                        value: 65536,
                        min: 0,
                        max: 65535
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_message() {
        let err = parse_str("PRINTMODE BOLD\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: PRINTMODE \"BOLD\": unsupported print mode flag \"BOLD\""
        );
        let err = parse_str("FOO bar\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown command \"FOO\"");
    }

    #[test]
    fn test_barcode_subform_keeps_source_argument() {
        let commands = parse_str("BARCODE HRI DISPLAY TOP\n").unwrap();
        assert_eq!(commands[0].kind(), CommandType::BarcodeHri);
        assert_eq!(commands[0].argument(), "HRI DISPLAY TOP");
    }
}
