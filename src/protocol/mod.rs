//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! used by most thermal receipt printers (Epson TM series and compatibles).
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, cut, feed, tabs, margins)
//! - [`text`]: Text styling (alignment, fonts, color, print mode, code page)
//! - [`barcode`]: 1D barcodes and HRI settings
//! - [`codepage`]: Unicode to legacy 8-bit character table encoding
//!
//! ## Usage Example
//!
//! ```
//! use ticketfile::protocol::{codepage::CodePage, commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(CodePage::Pc437.encode("RECEIPT\n").unwrap());
//! data.extend(commands::cut(commands::CutMode::Full));
//! ```

pub mod barcode;
pub mod codepage;
pub mod commands;
pub mod text;
