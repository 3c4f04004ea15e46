//! # Ticket Commands
//!
//! The closed vocabulary of ticket directives and the typed, validated
//! [`Command`] the parser hands to encoders.
//!
//! ```text
//! "MARGINLEFT 500"  ──scan──►  (LeftMargin, "500")  ──compile──►  Command {
//!                                                                  kind: LeftMargin,
//!                                                                  payload: LeftMargin(500),
//!                                                                }
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;
use crate::protocol::barcode::{HriFont, HriPosition, Symbology};
use crate::protocol::codepage::CodePage;
use crate::protocol::commands::{CutMode, NUL, u16_le};
use crate::protocol::text::{Alignment, Color, Font, PrintMode};

use super::grammar;

/// Every directive the ticket language understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandType {
    Align,
    Charset,
    Color,
    Cut,
    Font,
    Init,
    LineFeed,
    LeftMargin,
    Units,
    PrintWidth,
    /// Print a barcode. `BARCODE` sub-forms compile to the settings types below.
    Barcode,
    BarcodeWidth,
    BarcodeHeight,
    /// HRI font
    BarcodeFont,
    /// HRI display position
    BarcodeHri,
    Print,
    PrintLf,
    PrintRaw,
    Tab,
    TabStops,
    PrintMode,
}

impl CommandType {
    pub const ALL: [CommandType; 21] = [
        CommandType::Align,
        CommandType::Charset,
        CommandType::Color,
        CommandType::Cut,
        CommandType::Font,
        CommandType::Init,
        CommandType::LineFeed,
        CommandType::LeftMargin,
        CommandType::Units,
        CommandType::PrintWidth,
        CommandType::Barcode,
        CommandType::BarcodeWidth,
        CommandType::BarcodeHeight,
        CommandType::BarcodeFont,
        CommandType::BarcodeHri,
        CommandType::Print,
        CommandType::PrintLf,
        CommandType::PrintRaw,
        CommandType::Tab,
        CommandType::TabStops,
        CommandType::PrintMode,
    ];

    /// Directive name as written in ticket files.
    pub fn name(self) -> &'static str {
        match self {
            CommandType::Align => "ALIGN",
            CommandType::Charset => "CHARSET",
            CommandType::Color => "COLOR",
            CommandType::Cut => "CUT",
            CommandType::Font => "FONT",
            CommandType::Init => "INIT",
            CommandType::LineFeed => "LF",
            CommandType::LeftMargin => "MARGINLEFT",
            CommandType::Units => "UNITS",
            CommandType::PrintWidth => "WIDTH",
            CommandType::Barcode => "BARCODE",
            CommandType::BarcodeWidth => "BARCODE_WIDTH",
            CommandType::BarcodeHeight => "BARCODE_HEIGHT",
            CommandType::BarcodeFont => "BARCODE_FONT",
            CommandType::BarcodeHri => "BARCODE_HRI",
            CommandType::Print => "PRINT",
            CommandType::PrintLf => "PRINTLF",
            CommandType::PrintRaw => "PRINTRAW",
            CommandType::Tab => "TAB",
            CommandType::TabStops => "TABS",
            CommandType::PrintMode => "PRINTMODE",
        }
    }

    /// Resolve a directive name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Block commands take the following lines, up to `>>>`, as argument.
    pub fn is_block(self) -> bool {
        match self {
            CommandType::PrintRaw => true,
            CommandType::Align
            | CommandType::Charset
            | CommandType::Color
            | CommandType::Cut
            | CommandType::Font
            | CommandType::Init
            | CommandType::LineFeed
            | CommandType::LeftMargin
            | CommandType::Units
            | CommandType::PrintWidth
            | CommandType::Barcode
            | CommandType::BarcodeWidth
            | CommandType::BarcodeHeight
            | CommandType::BarcodeFont
            | CommandType::BarcodeHri
            | CommandType::Print
            | CommandType::PrintLf
            | CommandType::Tab
            | CommandType::TabStops
            | CommandType::PrintMode => false,
        }
    }

    /// One-line description for `ticketfile commands`.
    pub fn summary(self) -> &'static str {
        match self {
            CommandType::Align => "LEFT | CENTER | RIGHT",
            CommandType::Charset => "PC437 | PC850 | PC860 | PC863 | PC865",
            CommandType::Color => "BLACK | RED",
            CommandType::Cut => "[FULL | PARTIAL]",
            CommandType::Font => "A | B | C",
            CommandType::Init => "reset the printer",
            CommandType::LineFeed => "[lines 0-255]",
            CommandType::LeftMargin => "dots 0-65535",
            CommandType::Units => "x y (0-255 each)",
            CommandType::PrintWidth => "dots 0-65535",
            CommandType::Barcode => {
                "PRINT CODE39 data | WIDTH n | HEIGHT n | HRI FONT f | HRI DISPLAY pos"
            }
            CommandType::BarcodeWidth => "0-255",
            CommandType::BarcodeHeight => "1-255",
            CommandType::BarcodeFont => "A | B | C | D | E",
            CommandType::BarcodeHri => "NONE | TOP | BOTTOM | BOTH",
            CommandType::Print => "text",
            CommandType::PrintLf => "text, then a line feed",
            CommandType::PrintRaw => "lines of text up to >>>",
            CommandType::Tab => "jump to the next tab stop",
            CommandType::TabStops => "1 to 32 columns (0-255)",
            CommandType::PrintMode => "[FONTB] [EMPHASIZED] [DOUBLE_WIDTH] [DOUBLE_HEIGHT] [UNDERLINE]",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for CommandType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Validated argument of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    /// INIT, TAB
    None,
    Align(Alignment),
    Charset(CodePage),
    Color(Color),
    Cut(CutMode),
    Font(Font),
    LineFeed(u8),
    LeftMargin(u16),
    PrintWidth(u16),
    Units { x: u8, y: u8 },
    Barcode { symbology: Symbology, data: Vec<u8> },
    BarcodeWidth(u8),
    BarcodeHeight(u8),
    HriFont(HriFont),
    HriPosition(HriPosition),
    TabStops(Vec<u8>),
    PrintMode(PrintMode),
    /// PRINT, PRINTLF, PRINTRAW. Encoded by the backend.
    Text(String),
}

impl Payload {
    /// Parameter bytes, without the ESC/POS prefix and opcode.
    ///
    /// Text is returned as UTF-8; encoders re-encode it through the active
    /// code page.
    ///
    /// ```
    /// use ticketfile::parser::{Command, CommandType};
    ///
    /// let margin = Command::compile(CommandType::LeftMargin, "500").unwrap();
    /// assert_eq!(margin.payload().params(), vec![0xF4, 0x01]);
    /// ```
    pub fn params(&self) -> Vec<u8> {
        match self {
            Payload::None => Vec::new(),
            Payload::Align(alignment) => vec![*alignment as u8],
            Payload::Charset(cp) => vec![cp.table()],
            Payload::Color(color) => vec![*color as u8],
            Payload::Cut(mode) => vec![*mode as u8],
            Payload::Font(font) => vec![*font as u8],
            Payload::LineFeed(n) | Payload::BarcodeWidth(n) | Payload::BarcodeHeight(n) => vec![*n],
            Payload::LeftMargin(dots) | Payload::PrintWidth(dots) => u16_le(*dots).to_vec(),
            Payload::Units { x, y } => vec![*x, *y],
            Payload::Barcode { symbology, data } => {
                let mut params = Vec::with_capacity(data.len() + 2);
                params.push(*symbology as u8);
                params.extend_from_slice(data);
                params.push(NUL);
                params
            }
            Payload::HriFont(font) => vec![*font as u8],
            Payload::HriPosition(position) => vec![*position as u8],
            Payload::TabStops(stops) => stops.clone(),
            Payload::PrintMode(mode) => vec![mode.bits()],
            Payload::Text(text) => text.as_bytes().to_vec(),
        }
    }
}

/// One validated directive.
///
/// Built by the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    kind: CommandType,
    argument: String,
    payload: Payload,
    line: usize,
}

impl Command {
    /// Validate `argument` against the grammar of `kind`.
    ///
    /// `BARCODE` sub-forms refine the type: `BARCODE HEIGHT 80` compiles to a
    /// [`CommandType::BarcodeHeight`] command.
    pub fn compile(kind: CommandType, argument: &str) -> Result<Self, ValidationError> {
        let (kind, payload) = grammar::compile(kind, argument)?;
        Ok(Self {
            kind,
            argument: argument.to_string(),
            payload,
            line: 0,
        })
    }

    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn kind(&self) -> CommandType {
        self.kind
    }

    /// The argument exactly as written.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// 1-based source line, 0 when built outside the parser.
    pub fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vocabulary_is_injective() {
        for kind in CommandType::ALL {
            assert_eq!(CommandType::from_name(kind.name()), Some(kind));
        }
        let mut names: Vec<&str> = CommandType::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CommandType::ALL.len());
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(CommandType::from_name("FOO"), None);
        assert_eq!(CommandType::from_name("print"), None);
        assert_eq!(CommandType::from_name(""), None);
    }

    #[test]
    fn test_only_printraw_is_block() {
        let blocks: Vec<CommandType> =
            CommandType::ALL.into_iter().filter(|k| k.is_block()).collect();
        assert_eq!(blocks, vec![CommandType::PrintRaw]);
    }

    #[test]
    fn test_barcode_params_are_nul_terminated() {
        let payload = Payload::Barcode {
            symbology: Symbology::Code39,
            data: b"AZ1".to_vec(),
        };
        assert_eq!(payload.params(), vec![4, b'A', b'Z', b'1', 0x00]);
    }

    #[test]
    fn test_params() {
        assert_eq!(Payload::None.params(), Vec::<u8>::new());
        assert_eq!(Payload::LeftMargin(65535).params(), vec![0xFF, 0xFF]);
        assert_eq!(Payload::Units { x: 5, y: 10 }.params(), vec![5, 10]);
        assert_eq!(
            Payload::PrintMode(PrintMode::FONT_B | PrintMode::UNDERLINE).params(),
            vec![0x81]
        );
        assert_eq!(Payload::Charset(CodePage::Pc863).params(), vec![4]);
    }

    #[test]
    fn test_serialize_command() {
        let cmd = Command::compile(CommandType::Align, "CENTER").unwrap().at_line(3);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "ALIGN",
                "argument": "CENTER",
                "payload": { "type": "align", "value": "CENTER" },
                "line": 3
            })
        );
    }

    #[test]
    fn test_serialize_print_mode_as_flag_names() {
        let cmd = Command::compile(CommandType::PrintMode, "UNDERLINE FONTB").unwrap();
        let json = serde_json::to_value(cmd.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "print_mode", "value": "FONT_B | UNDERLINE" })
        );
    }
}
