//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands for ESC/POS printers.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right justification |
//! | Font | ESC M n | Character font A, B or C |
//! | Color | ESC r n | Black or red (two-color printers) |
//! | Print mode | ESC ! n | Font B, emphasized, double size, underline |
//! | Code page | ESC t n | Character table for bytes 0x80–0xFF |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use bitflags::bitflags;
use serde::Serialize;

use super::codepage::CodePage;
use super::commands::ESC;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Lowercase name, as used by CSS `text-align`.
    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Behavior
///
/// - Only takes effect at the beginning of a line
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::text::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available character fonts
///
/// Discriminants are the ASCII parameter bytes sent with `ESC M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A = b'0' as isize,
    /// Font B: 9×17 dots
    B = b'1' as isize,
    /// Font C: model dependent
    C = b'2' as isize,
}

/// # Select Character Font (ESC M n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
/// | Decimal | 27 77 n |
///
/// ## Parameters
///
/// | Font | n |
/// |------|---|
/// | A | `'0'` (0x30) |
/// | B | `'1'` (0x31) |
/// | C | `'2'` (0x32) |
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), b"\x1BM1".to_vec());
/// ```
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// PRINT COLOR
// ============================================================================

/// Print color on two-color printers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    #[default]
    Black = b'0' as isize,
    Red = b'1' as isize,
}

impl Color {
    /// Lowercase name, as used by CSS `color`.
    pub fn css(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
        }
    }
}

/// # Select Print Color (ESC r n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC r n |
/// | Hex     | 1B 72 n |
///
/// `n` is `'0'` for black and `'1'` for red. Ignored by single-color heads.
pub fn color(c: Color) -> Vec<u8> {
    vec![ESC, b'r', c as u8]
}

// ============================================================================
// PRINT MODE
// ============================================================================

bitflags! {
    /// Print mode bitmask for `ESC ! n`
    ///
    /// Flags combine with `|`:
    ///
    /// ```
    /// use ticketfile::protocol::text::PrintMode;
    ///
    /// let mode = PrintMode::FONT_B | PrintMode::UNDERLINE;
    /// assert_eq!(mode.bits(), 0x81);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct PrintMode: u8 {
        const FONT_B = 0x01;
        const EMPHASIZED = 0x08;
        const DOUBLE_HEIGHT = 0x10;
        const DOUBLE_WIDTH = 0x20;
        const UNDERLINE = 0x80;
    }
}

impl PrintMode {
    /// Flag names accepted in ticket files, with their bits.
    pub const KEYWORDS: [(&'static str, Self); 5] = [
        ("FONTB", Self::FONT_B),
        ("EMPHASIZED", Self::EMPHASIZED),
        ("DOUBLE_WIDTH", Self::DOUBLE_WIDTH),
        ("DOUBLE_HEIGHT", Self::DOUBLE_HEIGHT),
        ("UNDERLINE", Self::UNDERLINE),
    ];

    /// Look up a flag by its ticket-file name.
    pub fn flag(name: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == name)
            .map(|(_, mode)| *mode)
    }
}

/// # Select Print Mode (ESC ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// ## Bits
///
/// | Bit | Hex | Meaning |
/// |-----|-----|---------|
/// | 0 | 0x01 | Font B |
/// | 3 | 0x08 | Emphasized |
/// | 4 | 0x10 | Double height |
/// | 5 | 0x20 | Double width |
/// | 7 | 0x80 | Underline |
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::text::{print_mode, PrintMode};
///
/// assert_eq!(print_mode(PrintMode::EMPHASIZED), vec![0x1B, 0x21, 0x08]);
/// ```
pub fn print_mode(mode: PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.bits()]
}

// ============================================================================
// CODE PAGE SELECTION
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// Selects the character table used for bytes 0x80–0xFF.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
/// | Decimal | 27 116 n |
///
/// ## Supported Tables
///
/// | n | Code Page |
/// |---|-----------|
/// | 0 | PC437 (USA, standard Europe) |
/// | 2 | PC850 (Multilingual) |
/// | 3 | PC860 (Portuguese) |
/// | 4 | PC863 (Canadian-French) |
/// | 5 | PC865 (Nordic) |
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::codepage::CodePage;
/// use ticketfile::protocol::text::codepage;
///
/// assert_eq!(codepage(CodePage::Pc850), vec![0x1B, 0x74, 0x02]);
/// ```
pub fn codepage(cp: CodePage) -> Vec<u8> {
    vec![ESC, b't', cp.table()]
}

// ============================================================================
// TESTS
// ============================================================================
