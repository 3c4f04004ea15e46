//! # Output Encoders
//!
//! An [`Encoder`] turns one validated [`Command`] into output bytes.
//!
//! | Backend | Output |
//! |---------|--------|
//! | [`EscPosEncoder`] | Literal ESC/POS printer bytes |
//! | [`HtmlEncoder`] | Styled HTML fragments for preview |
//!
//! Style that outlives a single command (code page, alignment, color) lives
//! in a [`RenderState`] owned by the caller and passed into every call.

pub mod escpos;
pub mod html;

pub use escpos::EscPosEncoder;
pub use html::HtmlEncoder;

use crate::error::EncodeError;
use crate::parser::Command;
use crate::protocol::codepage::CodePage;
use crate::protocol::text::{Alignment, Color};

/// A rendering backend.
pub trait Encoder {
    /// Encode one command, updating `state` when the command changes style.
    fn encode(&mut self, command: &Command, state: &mut RenderState) -> Result<Vec<u8>, EncodeError>;
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn encode(&mut self, command: &Command, state: &mut RenderState) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(command, state)
    }
}

/// Style carried from one command to the next during a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub codepage: CodePage,
    pub alignment: Alignment,
    pub color: Color,
    power_on: CodePage,
}

impl RenderState {
    /// Fresh state whose code page after reset is `power_on`.
    pub fn new(power_on: CodePage) -> Self {
        Self {
            codepage: power_on,
            alignment: Alignment::default(),
            color: Color::default(),
            power_on,
        }
    }

    /// Back to power-on values, as after `ESC @`.
    pub fn reset(&mut self) {
        *self = Self::new(self.power_on);
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(CodePage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = RenderState::default();
        assert_eq!(state.codepage, CodePage::Pc437);
        assert_eq!(state.alignment, Alignment::Left);
        assert_eq!(state.color, Color::Black);
    }

    #[test]
    fn test_reset_keeps_power_on_codepage() {
        let mut state = RenderState::new(CodePage::Pc850);
        state.codepage = CodePage::Pc865;
        state.alignment = Alignment::Right;
        state.color = Color::Red;
        state.reset();
        assert_eq!(state, RenderState::new(CodePage::Pc850));
    }
}
