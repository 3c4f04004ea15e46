//! # Legacy 8-bit Code Pages
//!
//! Converts Unicode strings to the single-byte character tables selected
//! with `ESC t n`.
//!
//! ASCII (U+0000–U+007F) passes through unchanged in every table. The upper
//! half (0x80–0xFF) is table specific. PC860, PC863 and PC865 differ from
//! PC437 only in 0x80–0xAF; the box drawing and symbol block 0xB0–0xFF is
//! shared. PC850 replaces most of that block with Latin-1 letters.
//!
//! Unlike a best-effort printer driver, characters that the active table
//! cannot represent are reported instead of being replaced, so a ticket
//! never prints something other than what was written.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

/// Character code tables supported by the ticket language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CodePage {
    /// USA, standard Europe
    #[default]
    #[serde(rename = "PC437")]
    Pc437,
    /// Multilingual Latin-1
    #[serde(rename = "PC850")]
    Pc850,
    /// Portuguese
    #[serde(rename = "PC860")]
    Pc860,
    /// Canadian-French
    #[serde(rename = "PC863")]
    Pc863,
    /// Nordic
    #[serde(rename = "PC865")]
    Pc865,
}

impl CodePage {
    pub const ALL: [CodePage; 5] = [
        CodePage::Pc437,
        CodePage::Pc850,
        CodePage::Pc860,
        CodePage::Pc863,
        CodePage::Pc865,
    ];

    /// Name used by the `CHARSET` directive.
    pub fn name(self) -> &'static str {
        match self {
            CodePage::Pc437 => "PC437",
            CodePage::Pc850 => "PC850",
            CodePage::Pc860 => "PC860",
            CodePage::Pc863 => "PC863",
            CodePage::Pc865 => "PC865",
        }
    }

    /// Look up a code page by its `CHARSET` name (case-sensitive).
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cp| cp.name() == name)
    }

    /// Table number `n` for `ESC t n`.
    pub fn table(self) -> u8 {
        match self {
            CodePage::Pc437 => 0,
            CodePage::Pc850 => 2,
            CodePage::Pc860 => 3,
            CodePage::Pc863 => 4,
            CodePage::Pc865 => 5,
        }
    }

    fn upper_half(self) -> (&'static [char; 48], &'static [char; 80]) {
        match self {
            CodePage::Pc437 => (&PC437_HEAD, &PC437_TAIL),
            CodePage::Pc850 => (&PC850_HEAD, &PC850_TAIL),
            CodePage::Pc860 => (&PC860_HEAD, &PC437_TAIL),
            CodePage::Pc863 => (&PC863_HEAD, &PC437_TAIL),
            CodePage::Pc865 => (&PC865_HEAD, &PC437_TAIL),
        }
    }

    /// Map a single character to its byte in this table.
    ///
    /// Returns `None` if the character has no representation.
    pub fn encode_char(self, ch: char) -> Option<u8> {
        if ch.is_ascii() {
            return Some(ch as u8);
        }
        let (head, tail) = self.upper_half();
        if let Some(i) = head.iter().position(|&c| c == ch) {
            return Some(0x80 + i as u8);
        }
        tail.iter().position(|&c| c == ch).map(|i| 0xB0 + i as u8)
    }

    /// Encode a Unicode string through this table.
    ///
    /// ## Example
    ///
    /// ```
    /// use ticketfile::protocol::codepage::CodePage;
    ///
    /// assert_eq!(CodePage::Pc437.encode("Año").unwrap(), vec![0x41, 0xA4, 0x6F]);
    /// assert!(CodePage::Pc437.encode("Ø").is_err());
    /// assert_eq!(CodePage::Pc865.encode("Ø").unwrap(), vec![0x9D]);
    /// ```
    pub fn encode(self, s: &str) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(s.len());
        for ch in s.chars() {
            let byte = self
                .encode_char(ch)
                .ok_or(EncodeError::Unencodable { ch, codepage: self })?;
            out.push(byte);
        }
        Ok(out)
    }
}

impl std::fmt::Display for CodePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TABLES
// ============================================================================

// 0x80–0xAF
const PC437_HEAD: [char; 48] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
];

// 0xB0–0xFF: shade, box drawing, Greek and math
const PC437_TAIL: [char; 80] = [
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{A0}',
];

const PC850_HEAD: [char; 48] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '×', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '®', '¬', '½', '¼', '¡', '«', '»',
];

const PC850_TAIL: [char; 80] = [
    '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'À', '©', '╣', '║', '╗', '╝', '¢', '¥', '┐', //
    '└', '┴', '┬', '├', '─', '┼', 'ã', 'Ã', '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤', //
    'ð', 'Ð', 'Ê', 'Ë', 'È', 'ı', 'Í', 'Î', 'Ï', '┘', '┌', '█', '▄', '¦', 'Ì', '▀', //
    'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'µ', 'þ', 'Þ', 'Ú', 'Û', 'Ù', 'ý', 'Ý', '¯', '´', //
    '\u{AD}', '±', '‗', '¾', '¶', '§', '÷', '¸', '°', '¨', '·', '¹', '³', '²', '■', '\u{A0}',
];

const PC860_HEAD: [char; 48] = [
    'Ç', 'ü', 'é', 'â', 'ã', 'à', 'Á', 'ç', 'ê', 'Ê', 'è', 'Í', 'Ô', 'ì', 'Ã', 'Â', //
    'É', 'À', 'È', 'ô', 'õ', 'ò', 'Ú', 'ù', 'Ì', 'Õ', 'Ü', '¢', '£', 'Ù', '₧', 'Ó', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', 'Ò', '¬', '½', '¼', '¡', '«', '»',
];

const PC863_HEAD: [char; 48] = [
    'Ç', 'ü', 'é', 'â', 'Â', 'à', '¶', 'ç', 'ê', 'ë', 'è', 'ï', 'î', '‗', 'À', '§', //
    'É', 'È', 'Ê', 'ô', 'Ë', 'Ï', 'û', 'ù', '¤', 'Ô', 'Ü', '¢', '£', 'Ù', 'Û', 'ƒ', //
    '¦', '´', 'ó', 'ú', '¨', '¸', '³', '¯', 'Î', '⌐', '¬', '½', '¼', '¾', '«', '»',
];

const PC865_HEAD: [char; 48] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '¤',
];
