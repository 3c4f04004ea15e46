//! # Argument Grammars
//!
//! One grammar per [`CommandType`]. A grammar either yields a complete
//! [`Payload`] or fails as a whole; there is no partial result.
//!
//! Keyword and numeric grammars ignore separator whitespace around their
//! tokens. Text grammars keep the argument verbatim.

use crate::error::ValidationError;
use crate::protocol::barcode::{HriFont, HriPosition, Symbology};
use crate::protocol::codepage::CodePage;
use crate::protocol::commands::CutMode;
use crate::protocol::text::{Alignment, Color, Font, PrintMode};

use super::command::{CommandType, Payload};
use super::scanner::{is_separator, split_token};

/// Maximum number of positions accepted by `ESC D`.
pub const MAX_TAB_STOPS: usize = 32;

/// Compile `raw` for `kind`, returning the (possibly refined) type and payload.
pub(crate) fn compile(
    kind: CommandType,
    raw: &str,
) -> Result<(CommandType, Payload), ValidationError> {
    let payload = match kind {
        CommandType::Align => Payload::Align(alignment(keyword(raw))?),
        CommandType::Charset => {
            let name = keyword(raw);
            Payload::Charset(CodePage::parse(name).ok_or_else(|| unsupported("charset", name))?)
        }
        CommandType::Color => Payload::Color(color(keyword(raw))?),
        CommandType::Cut => Payload::Cut(cut_mode(keyword(raw))?),
        CommandType::Font => Payload::Font(font(keyword(raw))?),
        CommandType::Init | CommandType::Tab => Payload::None,
        CommandType::LineFeed => {
            let count = keyword(raw);
            if count.is_empty() {
                Payload::LineFeed(1)
            } else {
                Payload::LineFeed(byte(count, 0)?)
            }
        }
        CommandType::LeftMargin => Payload::LeftMargin(word(required(raw)?)?),
        CommandType::PrintWidth => Payload::PrintWidth(word(required(raw)?)?),
        CommandType::Units => match fields(raw).as_slice() {
            [x, y] => Payload::Units {
                x: byte(x, 0)?,
                y: byte(y, 0)?,
            },
            other => {
                return Err(ValidationError::WrongArity {
                    expected: 2,
                    found: other.len(),
                });
            }
        },
        CommandType::Barcode => return barcode(raw),
        CommandType::BarcodeWidth => Payload::BarcodeWidth(byte(required(raw)?, 0)?),
        CommandType::BarcodeHeight => Payload::BarcodeHeight(byte(required(raw)?, 1)?),
        CommandType::BarcodeFont => Payload::HriFont(hri_font(keyword(raw))?),
        CommandType::BarcodeHri => Payload::HriPosition(hri_position(keyword(raw))?),
        CommandType::Print | CommandType::PrintLf | CommandType::PrintRaw => {
            Payload::Text(raw.to_string())
        }
        CommandType::TabStops => Payload::TabStops(tab_stops(raw)?),
        CommandType::PrintMode => Payload::PrintMode(print_mode(raw)?),
    };
    Ok((kind, payload))
}

// ============================================================================
// BARCODE SUB-FORMS
// ============================================================================

/// `BARCODE PRINT <SYM> <DATA>` and the settings sub-forms.
///
/// `BARCODE <SYM> <DATA>` is accepted as a short form of `PRINT`.
fn barcode(raw: &str) -> Result<(CommandType, Payload), ValidationError> {
    let (form, rest) = split_token(raw.trim_start_matches(is_separator));
    match form {
        "" => Err(ValidationError::MissingArgument),
        "PRINT" => barcode_print(rest),
        "WIDTH" => compile(CommandType::BarcodeWidth, rest),
        "HEIGHT" => compile(CommandType::BarcodeHeight, rest),
        "FONT" => compile(CommandType::BarcodeFont, rest),
        "HRI" => match split_token(rest) {
            ("FONT", value) => compile(CommandType::BarcodeFont, value),
            ("DISPLAY", value) => compile(CommandType::BarcodeHri, value),
            ("", _) => Err(ValidationError::MissingArgument),
            (setting, _) => Err(unsupported("barcode HRI setting", setting)),
        },
        _ if Symbology::parse(form).is_some() => barcode_print(raw),
        _ => Err(unsupported("barcode form", form)),
    }
}

/// DATA runs to the end of the line; trailing spaces are part of it.
fn barcode_print(raw: &str) -> Result<(CommandType, Payload), ValidationError> {
    let (name, data) = split_token(raw.trim_start_matches(is_separator));
    if name.is_empty() {
        return Err(ValidationError::WrongArity {
            expected: 2,
            found: 0,
        });
    }
    let symbology = Symbology::parse(name).ok_or_else(|| unsupported("barcode symbology", name))?;
    if data.is_empty() {
        return Err(ValidationError::WrongArity {
            expected: 2,
            found: 1,
        });
    }
    // GS k function A data is NUL terminated
    if data.contains('\0') {
        return Err(unsupported("barcode data", data));
    }
    Ok((
        CommandType::Barcode,
        Payload::Barcode {
            symbology,
            data: data.as_bytes().to_vec(),
        },
    ))
}

// ============================================================================
// ENUMERATED VALUES
// ============================================================================

fn alignment(value: &str) -> Result<Alignment, ValidationError> {
    match value {
        "LEFT" => Ok(Alignment::Left),
        "CENTER" => Ok(Alignment::Center),
        "RIGHT" => Ok(Alignment::Right),
        _ => Err(unsupported("alignment", value)),
    }
}

fn color(value: &str) -> Result<Color, ValidationError> {
    match value {
        "BLACK" => Ok(Color::Black),
        "RED" => Ok(Color::Red),
        _ => Err(unsupported("color", value)),
    }
}

fn cut_mode(value: &str) -> Result<CutMode, ValidationError> {
    match value {
        "" | "FULL" => Ok(CutMode::Full),
        "PARTIAL" => Ok(CutMode::Partial),
        _ => Err(unsupported("cut mode", value)),
    }
}

fn font(value: &str) -> Result<Font, ValidationError> {
    match value {
        "A" => Ok(Font::A),
        "B" => Ok(Font::B),
        "C" => Ok(Font::C),
        _ => Err(unsupported("font", value)),
    }
}

fn hri_font(value: &str) -> Result<HriFont, ValidationError> {
    HriFont::parse(value).ok_or_else(|| unsupported("barcode font", value))
}

fn hri_position(value: &str) -> Result<HriPosition, ValidationError> {
    HriPosition::parse(value).ok_or_else(|| unsupported("barcode HRI position", value))
}

fn print_mode(raw: &str) -> Result<PrintMode, ValidationError> {
    fields(raw).into_iter().try_fold(PrintMode::empty(), |mode, name| {
        PrintMode::flag(name)
            .map(|flag| mode | flag)
            .ok_or_else(|| unsupported("print mode flag", name))
    })
}

fn tab_stops(raw: &str) -> Result<Vec<u8>, ValidationError> {
    let stops = fields(raw);
    if stops.is_empty() {
        return Err(ValidationError::MissingArgument);
    }
    if stops.len() > MAX_TAB_STOPS {
        return Err(ValidationError::TooManyTabStops {
            max: MAX_TAB_STOPS,
            found: stops.len(),
        });
    }
    stops.into_iter().map(|stop| byte(stop, 0)).collect()
}

// ============================================================================
// TOKENS AND NUMBERS
// ============================================================================

fn keyword(raw: &str) -> &str {
    raw.trim_matches(is_separator)
}

fn required(raw: &str) -> Result<&str, ValidationError> {
    match keyword(raw) {
        "" => Err(ValidationError::MissingArgument),
        value => Ok(value),
    }
}

fn fields(raw: &str) -> Vec<&str> {
    raw.split(is_separator).filter(|token| !token.is_empty()).collect()
}

fn unsupported(what: &'static str, value: &str) -> ValidationError {
    ValidationError::Unsupported {
        what,
        value: value.to_string(),
    }
}

/// Parse a plain decimal integer and check it against `min..=max`.
///
/// Signs, spaces and other radixes are rejected.
fn unsigned(token: &str, min: u64, max: u64) -> Result<u64, ValidationError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidNumber(token.to_string()));
    }
    let value: u64 = token
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(token.to_string()))?;
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange { value, min, max });
    }
    Ok(value)
}

fn byte(token: &str, min: u8) -> Result<u8, ValidationError> {
    unsigned(token, min.into(), u8::MAX.into()).map(|v| v as u8)
}

fn word(token: &str) -> Result<u16, ValidationError> {
    unsigned(token, 0, u16::MAX.into()).map(|v| v as u16)
}
