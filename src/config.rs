//! # Render Configuration
//!
//! Settings chosen once per [`Engine`](crate::engine::Engine).
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `format` | `escpos` | Output backend |
//! | `codepage` | `PC437` | Table the printer uses after power-on and `INIT` |
//! | `buffer_capacity` | 8192 | Pending bytes that trigger a write to the sink |
//!
//! ## Usage
//!
//! ```
//! use ticketfile::config::{OutputFormat, RenderConfig};
//! use ticketfile::protocol::codepage::CodePage;
//!
//! let config = RenderConfig {
//!     format: OutputFormat::Html,
//!     codepage: CodePage::Pc850,
//!     ..RenderConfig::default()
//! };
//! assert_eq!(config.buffer_capacity, 8192);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encoder::{Encoder, EscPosEncoder, HtmlEncoder};
use crate::protocol::codepage::CodePage;

/// Output backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    EscPos,
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::EscPos, OutputFormat::Html];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::EscPos => "escpos",
            OutputFormat::Html => "html",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// # Render Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub format: OutputFormat,

    /// Code page in effect at the start of a render and after `INIT`
    pub codepage: CodePage,

    /// Flush threshold in bytes; 0 writes after every command
    pub buffer_capacity: usize,
}

impl RenderConfig {
    pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

    /// Instantiate the configured backend.
    pub fn encoder(&self) -> Box<dyn Encoder + Send> {
        match self.format {
            OutputFormat::EscPos => Box::new(EscPosEncoder::new()),
            OutputFormat::Html => Box::new(HtmlEncoder::new()),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            codepage: CodePage::default(),
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::RenderState;
    use crate::parser::{Command, CommandType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("escpos"), Some(OutputFormat::EscPos));
        assert_eq!(OutputFormat::parse("HTML"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse("pdf"), None);
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::parse(&format.to_string()), Some(format));
        }
    }

    #[test]
    fn test_encoder_follows_format() {
        let cut = Command::compile(CommandType::Cut, "").unwrap();
        let mut state = RenderState::default();

        let mut escpos = RenderConfig::default().encoder();
        assert_eq!(escpos.encode(&cut, &mut state).unwrap(), vec![0x1D, 0x56, 0x00]);

        let html = RenderConfig {
            format: OutputFormat::Html,
            ..RenderConfig::default()
        };
        assert_eq!(html.encoder().encode(&cut, &mut state).unwrap(), b"<hr />".to_vec());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "format": "html", "codepage": "PC865" }"#).unwrap();
        assert_eq!(
            config,
            RenderConfig {
                format: OutputFormat::Html,
                codepage: CodePage::Pc865,
                buffer_capacity: RenderConfig::DEFAULT_BUFFER_CAPACITY,
            }
        );
    }
}
