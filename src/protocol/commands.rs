//! # ESC/POS Printer Control Commands
//!
//! This module implements the basic ESC/POS control commands: initialization,
//! cutting, paper feed, tabulation and print-area geometry.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `HT`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC d n`, `GS L nL nH`, `ESC D n1..nk NUL`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

use serde::Serialize;

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for geometry, cutter and barcode commands.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

/// NUL - Terminator for variable-length parameter lists
pub const NUL: u8 = 0x00;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Print mode, alignment and color return to defaults
/// - Character table returns to PC437
/// - Tab positions return to every 8 characters
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Cutter mode for `GS V m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CutMode {
    /// Cut the paper completely.
    #[default]
    Full = 0,
    /// Leave one point uncut so the ticket hangs from the roll.
    Partial = 1,
}

/// # Select Cut Mode and Cut Paper (GS V m)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V m |
/// | Hex     | 1D 56 m |
/// | Decimal | 29 86 m |
///
/// ## Parameters
///
/// - `m = 0`: Full cut
/// - `m = 1`: Partial cut
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::commands::{cut, CutMode};
///
/// assert_eq!(cut(CutMode::Full), vec![0x1D, 0x56, 0x00]);
/// assert_eq!(cut(CutMode::Partial), vec![0x1D, 0x56, 0x01]);
/// ```
#[inline]
pub fn cut(mode: CutMode) -> Vec<u8> {
    vec![GS, b'V', mode as u8]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Line Feed (LF)
///
/// Prints the line buffer and advances one line.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Print and Feed n Lines (ESC d n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC d n |
/// | Hex     | 1B 64 n |
/// | Decimal | 27 100 n |
///
/// A single line is sent as a bare `LF`, which every printer understands,
/// so `feed_lines(1)` is `[0x0A]`.
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::commands;
///
/// assert_eq!(commands::feed_lines(1), vec![0x0A]);
/// assert_eq!(commands::feed_lines(12), vec![0x1B, 0x64, 12]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    if n == 1 {
        line_feed()
    } else {
        vec![ESC, b'd', n]
    }
}

// ============================================================================
// TABULATION
// ============================================================================

/// # Horizontal Tab (HT)
///
/// Moves the print position to the next horizontal tab position.
#[inline]
pub fn tab() -> Vec<u8> {
    vec![HT]
}

/// # Set Horizontal Tab Positions (ESC D n1 ... nk NUL)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC D n1 ... nk NUL |
/// | Hex     | 1B 44 n1 ... nk 00 |
///
/// Positions are column numbers counted in character widths; at most 32
/// positions are accepted by the printer.
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::commands;
///
/// assert_eq!(commands::tab_stops(&[8, 16]), vec![0x1B, 0x44, 8, 16, 0x00]);
/// ```
pub fn tab_stops(positions: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(positions.len() + 3);
    cmd.extend([ESC, b'D']);
    cmd.extend_from_slice(positions);
    cmd.push(NUL);
    cmd
}

// ============================================================================
// PRINT AREA GEOMETRY
// ============================================================================

/// # Set Left Margin (GS L nL nH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS L nL nH |
/// | Hex     | 1D 4C nL nH |
///
/// The margin is `(nL + nH × 256)` horizontal motion units.
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::commands;
///
/// assert_eq!(commands::left_margin(500), vec![0x1D, 0x4C, 0xF4, 0x01]);
/// ```
#[inline]
pub fn left_margin(dots: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(dots);
    vec![GS, b'L', lo, hi]
}

/// # Set Print Area Width (GS W nL nH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS W nL nH |
/// | Hex     | 1D 57 nL nH |
#[inline]
pub fn print_width(dots: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(dots);
    vec![GS, b'W', lo, hi]
}

/// # Set Horizontal and Vertical Motion Units (GS P x y)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS P x y |
/// | Hex     | 1D 50 x y |
///
/// Units are `1/x` and `1/y` inches; `0` restores the printer default.
#[inline]
pub fn motion_units(x: u8, y: u8) -> Vec<u8> {
    vec![GS, b'P', x, y]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(65535), [0xFF, 0xFF]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(CutMode::Full), vec![0x1D, 0x56, 0x00]);
        assert_eq!(cut(CutMode::Partial), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(0), vec![0x1B, 0x64, 0x00]);
        assert_eq!(feed_lines(1), vec![0x0A]);
        assert_eq!(feed_lines(255), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_tab_stops() {
        assert_eq!(tab_stops(&[]), vec![0x1B, 0x44, 0x00]);
        assert_eq!(tab_stops(&[4, 10, 20]), vec![0x1B, 0x44, 4, 10, 20, 0x00]);
    }

    #[test]
    fn test_left_margin() {
        assert_eq!(left_margin(0), vec![0x1D, 0x4C, 0x00, 0x00]);
        assert_eq!(left_margin(500), vec![0x1D, 0x4C, 0xF4, 0x01]);
        assert_eq!(left_margin(1024), vec![0x1D, 0x4C, 0x00, 0x04]);
        assert_eq!(left_margin(65535), vec![0x1D, 0x4C, 0xFF, 0xFF]);
    }

    #[test]
    fn test_print_width() {
        assert_eq!(print_width(576), vec![0x1D, 0x57, 0x40, 0x02]);
    }

    #[test]
    fn test_motion_units() {
        assert_eq!(motion_units(5, 10), vec![0x1D, 0x50, 5, 10]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(500), [0xF4, 0x01]);
    }
}
