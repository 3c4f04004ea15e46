//! # Ticketfile - Receipt Description Language
//!
//! Ticketfile turns a small line-oriented ticket language into ESC/POS
//! printer bytes, or into HTML for preview. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders and code pages
//! - **Parser**: line scanner and per-command argument grammars
//! - **Encoders**: ESC/POS and HTML backends behind one trait
//! - **Engine**: buffered, mutually exclusive rendering into any `Write`
//!
//! ## Quick Start
//!
//! ```
//! use ticketfile::{Engine, RenderConfig};
//!
//! let ticket = "\
//! INIT
//! ALIGN CENTER
//! PRINTLF Thank you!
//! ## feed before cutting
//! LF 3
//! CUT PARTIAL
//! ";
//!
//! let engine = Engine::with_config(Vec::new(), &RenderConfig::default());
//! engine.render(ticket.as_bytes())?;
//!
//! let bytes = engine.into_inner()?;
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! assert_eq!(&bytes[bytes.len() - 3..], &[0x1D, 0x56, 0x01]);
//!
//! # Ok::<(), ticketfile::TicketError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and code page tables |
//! | [`parser`] | Ticket text to validated commands |
//! | [`encoder`] | ESC/POS and HTML backends |
//! | [`engine`] | Render orchestration |
//! | [`config`] | Backend and code page selection |
//! | [`error`] | Error types |

pub mod config;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod parser;
pub mod protocol;

// Re-exports for convenience
pub use config::{OutputFormat, RenderConfig};
pub use encoder::{Encoder, EscPosEncoder, HtmlEncoder, RenderState};
pub use engine::Engine;
pub use error::{TicketError, TicketResult};
pub use parser::{Command, CommandType, Payload};
