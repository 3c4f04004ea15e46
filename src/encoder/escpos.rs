//! # ESC/POS Backend
//!
//! Maps each [`Command`] to its literal printer bytes.
//!
//! Text is converted through the code page selected by the last `CHARSET`
//! (or the power-on table), so `CHARSET PC850` followed by `PRINT é` emits
//! `1B 74 02 82`.

use tracing::trace;

use super::{Encoder, RenderState};
use crate::error::EncodeError;
use crate::parser::{Command, CommandType, Payload};
use crate::protocol::{barcode, commands, text};

/// Encoder producing ESC/POS byte streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscPosEncoder;

impl EscPosEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for EscPosEncoder {
    fn encode(&mut self, command: &Command, state: &mut RenderState) -> Result<Vec<u8>, EncodeError> {
        let bytes = match command.payload() {
            // ===== Argument-less =====
            Payload::None => match command.kind() {
                CommandType::Init => {
                    state.reset();
                    commands::init()
                }
                CommandType::Tab => commands::tab(),
                _ => Vec::new(),
            },

            // ===== Style =====
            Payload::Align(alignment) => {
                state.alignment = *alignment;
                text::align(*alignment)
            }
            Payload::Color(color) => {
                state.color = *color;
                text::color(*color)
            }
            Payload::Charset(codepage) => {
                state.codepage = *codepage;
                text::codepage(*codepage)
            }
            Payload::Font(font) => text::font(*font),
            Payload::PrintMode(mode) => text::print_mode(*mode),

            // ===== Paper and layout =====
            Payload::Cut(mode) => commands::cut(*mode),
            Payload::LineFeed(count) => commands::feed_lines(*count),
            Payload::LeftMargin(dots) => commands::left_margin(*dots),
            Payload::PrintWidth(dots) => commands::print_width(*dots),
            Payload::Units { x, y } => commands::motion_units(*x, *y),
            Payload::TabStops(stops) => commands::tab_stops(stops),

            // ===== Barcode =====
            Payload::Barcode { .. } => barcode::print_raw(&command.payload().params()),
            Payload::BarcodeWidth(n) => barcode::module_width(*n),
            Payload::BarcodeHeight(n) => barcode::height(*n),
            Payload::HriFont(font) => barcode::hri_font(*font),
            Payload::HriPosition(position) => barcode::hri_position(*position),

            // ===== Text =====
            Payload::Text(content) => {
                let mut bytes = state.codepage.encode(content)?;
                if command.kind() == CommandType::PrintLf {
                    bytes.push(commands::LF);
                }
                bytes
            }
        };
        trace!(command = %command.kind(), len = bytes.len(), "encoded");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::codepage::CodePage;
    use crate::protocol::text::{Alignment, Color};
    use pretty_assertions::assert_eq;

    fn encode_one(kind: CommandType, argument: &str) -> Vec<u8> {
        let command = Command::compile(kind, argument).unwrap();
        EscPosEncoder::new()
            .encode(&command, &mut RenderState::default())
            .unwrap()
    }

    #[test]
    fn test_command_bytes() {
        let cases: &[(CommandType, &str, &[u8])] = &[
            (CommandType::Init, "", b"\x1B@"),
            (CommandType::Print, "test", b"test"),
            (CommandType::LineFeed, "", b"\n"),
            (CommandType::LineFeed, "12", b"\x1Bd\x0C"),
            (CommandType::LineFeed, "0", b"\x1Bd\x00"),
            (CommandType::PrintLf, "test", b"test\n"),
            (CommandType::PrintRaw, "test\ntest2\n", b"test\ntest2\n"),
            (CommandType::Units, "5 10", b"\x1DP\x05\x0A"),
            (CommandType::LeftMargin, "500", b"\x1DL\xF4\x01"),
            (CommandType::LeftMargin, "1024", b"\x1DL\x00\x04"),
            (CommandType::LeftMargin, "65535", b"\x1DL\xFF\xFF"),
            (CommandType::PrintWidth, "512", b"\x1DW\x00\x02"),
            (CommandType::Align, "LEFT", b"\x1Ba\x00"),
            (CommandType::Align, "CENTER", b"\x1Ba\x01"),
            (CommandType::Align, "RIGHT", b"\x1Ba\x02"),
            (CommandType::Cut, "", b"\x1DV\x00"),
            (CommandType::Cut, "PARTIAL", b"\x1DV\x01"),
            (CommandType::Cut, "FULL", b"\x1DV\x00"),
            (CommandType::Font, "A", b"\x1BM0"),
            (CommandType::Font, "B", b"\x1BM1"),
            (CommandType::Font, "C", b"\x1BM2"),
            (CommandType::Color, "BLACK", b"\x1Br0"),
            (CommandType::Color, "RED", b"\x1Br1"),
            (CommandType::Charset, "PC850", b"\x1Bt\x02"),
            (CommandType::Barcode, "PRINT CODE39 AZERTY123", b"\x1Dk\x04AZERTY123\x00"),
            (CommandType::Barcode, "PRINT CODE39 AB ", b"\x1Dk\x04AB \x00"),
            (CommandType::Barcode, "WIDTH 50", b"\x1Dw\x32"),
            (CommandType::Barcode, "HEIGHT 10", b"\x1Dh\x0A"),
            (CommandType::Barcode, "HRI FONT A", b"\x1Df\x00"),
            (CommandType::Barcode, "HRI FONT B", b"\x1Df\x01"),
            (CommandType::Barcode, "HRI DISPLAY TOP", b"\x1DH\x01"),
            (CommandType::BarcodeHri, "BOTH", b"\x1DH\x03"),
            (CommandType::Tab, "", b"\x09"),
            (CommandType::TabStops, "8 16", b"\x1BD\x08\x10\x00"),
            (CommandType::PrintMode, "FONTB UNDERLINE", b"\x1B!\x81"),
            (CommandType::PrintMode, "", b"\x1B!\x00"),
        ];
        for (kind, argument, expected) in cases {
            assert_eq!(
                encode_one(*kind, argument),
                expected.to_vec(),
                "{kind} {argument:?}"
            );
        }
    }

    #[test]
    fn test_charset_switches_text_encoding() {
        let mut encoder = EscPosEncoder::new();
        let mut state = RenderState::default();
        let print = Command::compile(CommandType::Print, "Ø").unwrap();

        let err = encoder.encode(&print, &mut state).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Unencodable {
                ch: 'Ø',
                codepage: CodePage::Pc437
            }
        );

        let charset = Command::compile(CommandType::Charset, "PC865").unwrap();
        encoder.encode(&charset, &mut state).unwrap();
        assert_eq!(state.codepage, CodePage::Pc865);
        assert_eq!(encoder.encode(&print, &mut state).unwrap(), vec![0x9D]);
    }

    #[test]
    fn test_init_resets_state() {
        let mut encoder = EscPosEncoder::new();
        let mut state = RenderState::default();
        for (kind, argument) in [
            (CommandType::Charset, "PC850"),
            (CommandType::Align, "CENTER"),
            (CommandType::Color, "RED"),
        ] {
            encoder
                .encode(&Command::compile(kind, argument).unwrap(), &mut state)
                .unwrap();
        }
        assert_eq!(state.alignment, Alignment::Center);
        assert_eq!(state.color, Color::Red);

        let init = Command::compile(CommandType::Init, "").unwrap();
        encoder.encode(&init, &mut state).unwrap();
        assert_eq!(state, RenderState::default());
    }
}
