//! # HTML Preview Backend
//!
//! Renders a ticket as a sequence of HTML fragments:
//!
//! ```text
//! ALIGN CENTER              →
//! PRINTLF Total: 3 < 4      → <div style="text-align:center;color:black">Total:&nbsp;3&nbsp;&lt;&nbsp;4<br /></div>
//! CUT                       → <hr />
//! ```
//!
//! Only alignment and color are reflected; every other printer setting is
//! dropped from the preview. `LF` is a single break whatever its count.

use super::{Encoder, RenderState};
use crate::error::EncodeError;
use crate::parser::{Command, CommandType, Payload};

const BREAK: &str = "<br />";
const RULE: &str = "<hr />";

/// Encoder producing HTML markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEncoder;

impl HtmlEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for HtmlEncoder {
    fn encode(&mut self, command: &Command, state: &mut RenderState) -> Result<Vec<u8>, EncodeError> {
        let markup = match command.payload() {
            Payload::None if command.kind() == CommandType::Init => {
                state.reset();
                String::new()
            }
            Payload::Align(alignment) => {
                state.alignment = *alignment;
                String::new()
            }
            Payload::Color(color) => {
                state.color = *color;
                String::new()
            }
            Payload::Cut(_) => RULE.to_string(),
            Payload::LineFeed(_) => BREAK.to_string(),
            Payload::Text(content) => {
                let mut body = escape(content);
                if command.kind() == CommandType::PrintLf {
                    body.push_str(BREAK);
                }
                format!(
                    "<div style=\"text-align:{};color:{}\">{body}</div>",
                    state.alignment.css(),
                    state.color.css()
                )
            }
            _ => String::new(),
        };
        Ok(markup.into_bytes())
    }
}

/// Escape markup characters and keep whitespace visible.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            ' ' => out.push_str("&nbsp;"),
            '\n' => out.push_str(BREAK),
            _ => out.push(ch),
        }
    }
    out
}
