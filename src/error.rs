//! # Error Types
//!
//! This module defines error types used throughout the ticketfile library.
//!
//! Every error is fatal for the render that raised it. [`TicketError`]
//! carries the source line so the faulty directive can be located.

use thiserror::Error;

use crate::parser::CommandType;
use crate::protocol::codepage::CodePage;

/// Main error type for ticketfile operations
#[derive(Debug, Error)]
pub enum TicketError {
    /// Directive name not in the vocabulary
    #[error("line {line}: unknown command {name:?}")]
    UnknownCommand { line: usize, name: String },

    /// Block command still capturing at end of input
    #[error("line {line}: {command} block is never closed with \">>>\"")]
    UnterminatedBlock { line: usize, command: CommandType },

    /// Argument does not match the command's grammar
    #[error("line {line}: {command} {argument:?}: {source}")]
    Validation {
        line: usize,
        command: CommandType,
        argument: String,
        #[source]
        source: ValidationError,
    },

    /// Valid command that the backend cannot realize
    #[error("line {line}: {command}: {source}")]
    Encode {
        line: usize,
        command: CommandType,
        #[source]
        source: EncodeError,
    },

    /// I/O error wrapper (reading the ticket or writing the output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A previous render panicked while holding the engine lock
    #[error("engine lock poisoned by a panicked render")]
    Poisoned,
}

/// Why an argument failed its command's grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("{value} is out of range {min}..={max}")]
    OutOfRange { value: u64, min: u64, max: u64 },

    #[error("expected {expected} arguments, found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("unsupported {what} {value:?}")]
    Unsupported { what: &'static str, value: String },

    #[error("missing argument")]
    MissingArgument,

    #[error("at most {max} tab stops, found {found}")]
    TooManyTabStops { max: usize, found: usize },
}

/// Why a backend could not realize a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("character {ch:?} is not in code page {codepage}")]
    Unencodable { ch: char, codepage: CodePage },
}

/// Result type for ticketfile operations
pub type TicketResult<T> = Result<T, TicketError>;
