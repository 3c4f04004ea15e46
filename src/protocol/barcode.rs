//! # ESC/POS Barcode Commands
//!
//! This module implements 1D barcode commands for ESC/POS printers.
//!
//! A barcode is configured with sticky settings (module width, height, HRI
//! font and position) and then printed with `GS k`:
//!
//! ```
//! use ticketfile::protocol::barcode::{self, HriPosition, Symbology};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::module_width(3));
//! data.extend(barcode::height(80));
//! data.extend(barcode::hri_position(HriPosition::Bottom));
//! data.extend(barcode::print(Symbology::Code39, b"HELLO123"));
//! ```
//!
//! HRI stands for Human Readable Interpretation: the text printed next to
//! the bars.

use serde::Serialize;

use super::commands::{GS, NUL};

/// Barcode symbology, with its `GS k` function A format code `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbology {
    /// Code39 (A-Z, 0-9, space, - . $ / % +)
    Code39 = 4,
}

impl Symbology {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "CODE39" => Some(Symbology::Code39),
            _ => None,
        }
    }
}

/// HRI character position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HriPosition {
    /// No HRI text printed (printer default)
    #[default]
    None = 0,
    /// HRI above the barcode
    Top = 1,
    /// HRI below the barcode
    Bottom = 2,
    /// HRI above and below
    Both = 3,
}

impl HriPosition {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "NONE" => Some(HriPosition::None),
            "TOP" => Some(HriPosition::Top),
            "BOTTOM" => Some(HriPosition::Bottom),
            "BOTH" => Some(HriPosition::Both),
            _ => None,
        }
    }
}

/// HRI character font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HriFont {
    #[default]
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl HriFont {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "A" => Some(HriFont::A),
            "B" => Some(HriFont::B),
            "C" => Some(HriFont::C),
            "D" => Some(HriFont::D),
            "E" => Some(HriFont::E),
            _ => None,
        }
    }
}

/// # Print Barcode (GS k m d1 ... dk NUL)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m d1 ... dk NUL |
/// | Hex     | 1D 6B m d1 ... dk 00 |
///
/// Function A form: the data is NUL terminated, so it must not itself
/// contain NUL.
///
/// ## Example
///
/// ```
/// use ticketfile::protocol::barcode::{print, Symbology};
///
/// assert_eq!(print(Symbology::Code39, b"AB"), vec![0x1D, 0x6B, 4, b'A', b'B', 0x00]);
/// ```
pub fn print(symbology: Symbology, data: &[u8]) -> Vec<u8> {
    print_raw(&[&[symbology as u8], data, &[NUL]].concat())
}

/// `GS k` followed by pre-framed parameters (`m`, data, NUL).
#[inline]
pub fn print_raw(params: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(params.len() + 2);
    cmd.extend([GS, b'k']);
    cmd.extend_from_slice(params);
    cmd
}

/// # Set Barcode Module Width (GS w n)
///
/// | Hex | 1D 77 n |
/// |-----|---------|
#[inline]
pub fn module_width(n: u8) -> Vec<u8> {
    vec![GS, b'w', n]
}

/// # Set Barcode Height (GS h n)
///
/// Height in dots, 1–255.
///
/// | Hex | 1D 68 n |
/// |-----|---------|
#[inline]
pub fn height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n]
}

/// # Select HRI Font (GS f n)
///
/// | Hex | 1D 66 n |
/// |-----|---------|
#[inline]
pub fn hri_font(font: HriFont) -> Vec<u8> {
    vec![GS, b'f', font as u8]
}

/// # Select HRI Print Position (GS H n)
///
/// | Hex | 1D 48 n |
/// |-----|---------|
#[inline]
pub fn hri_position(position: HriPosition) -> Vec<u8> {
    vec![GS, b'H', position as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code39() {
        let cmd = print(Symbology::Code39, b"AZERTY123");
        assert_eq!(cmd[0], 0x1D); // GS
        assert_eq!(cmd[1], b'k');
        assert_eq!(cmd[2], 4); // m = CODE39
        assert_eq!(&cmd[3..12], b"AZERTY123");
        assert_eq!(cmd[12], 0x00); // NUL terminator
        assert_eq!(cmd.len(), 3 + 9 + 1);
    }

    #[test]
    fn test_settings() {
        assert_eq!(module_width(50), vec![0x1D, 0x77, 50]);
        assert_eq!(height(10), vec![0x1D, 0x68, 10]);
        assert_eq!(hri_font(HriFont::B), vec![0x1D, 0x66, 1]);
        assert_eq!(hri_position(HriPosition::Top), vec![0x1D, 0x48, 1]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Symbology::parse("CODE39"), Some(Symbology::Code39));
        assert_eq!(Symbology::parse("CODE128"), None);
        assert_eq!(HriPosition::parse("BOTH"), Some(HriPosition::Both));
        assert_eq!(HriPosition::parse("LEFT"), None);
        assert_eq!(HriFont::parse("E"), Some(HriFont::E));
        assert_eq!(HriFont::parse("F"), None);
    }
}
