//! # Render Engine
//!
//! Drives a ticket through the whole pipeline and into a byte sink.
//!
//! ```text
//! ┌─────────┐   parse    ┌──────────────┐  encode   ┌────────┐  threshold / end  ┌──────┐
//! │ BufRead │ ─────────► │ Vec<Command> │ ────────► │ buffer │ ────────────────► │ sink │
//! └─────────┘  (eager)   └──────────────┘           └────────┘                   └──────┘
//! ```
//!
//! A ticket that fails to parse writes nothing. An encoding failure drops
//! the bytes still buffered; bytes already handed to the sink stay there.
//!
//! Renders on one engine are mutually exclusive, so concurrent callers
//! never interleave their output.
//!
//! ## Example
//!
//! ```
//! use ticketfile::encoder::EscPosEncoder;
//! use ticketfile::engine::Engine;
//!
//! let engine = Engine::new(Vec::new(), EscPosEncoder::new());
//! engine.render("INIT\nPRINTLF hello\nCUT\n".as_bytes())?;
//! assert_eq!(engine.into_inner()?, b"\x1B@hello\n\x1DV\x00");
//! # Ok::<(), ticketfile::TicketError>(())
//! ```

use std::io::{BufRead, Write};
use std::sync::Mutex;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::encoder::{Encoder, RenderState};
use crate::error::{TicketError, TicketResult};
use crate::parser::{self, Command};

struct Inner<W, E> {
    sink: W,
    encoder: E,
}

/// Render orchestrator owning a sink and an encoder.
pub struct Engine<W, E = Box<dyn Encoder + Send>> {
    inner: Mutex<Inner<W, E>>,
    config: RenderConfig,
}

impl<W: Write, E: Encoder> Engine<W, E> {
    /// Engine with default settings around an explicit encoder.
    pub fn new(sink: W, encoder: E) -> Self {
        Self::with_encoder(sink, encoder, RenderConfig::default())
    }

    /// Engine with explicit settings. `config.format` is ignored in favour
    /// of `encoder`.
    pub fn with_encoder(sink: W, encoder: E, config: RenderConfig) -> Self {
        Self {
            inner: Mutex::new(Inner { sink, encoder }),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Parse `input` completely, then encode it into the sink.
    pub fn render<R: BufRead>(&self, input: R) -> TicketResult<()> {
        let mut guard = self.inner.lock().map_err(|_| TicketError::Poisoned)?;

        let commands = parser::parse(input)?;
        debug!(commands = commands.len(), "parsed ticket");

        self.encode_into(&mut guard, &commands)
    }

    /// Encode an already parsed ticket into the sink.
    pub fn render_commands(&self, commands: &[Command]) -> TicketResult<()> {
        let mut guard = self.inner.lock().map_err(|_| TicketError::Poisoned)?;
        self.encode_into(&mut guard, commands)
    }

    fn encode_into(&self, inner: &mut Inner<W, E>, commands: &[Command]) -> TicketResult<()> {
        let Inner { sink, encoder } = inner;

        let capacity = self.config.buffer_capacity;
        let mut state = RenderState::new(self.config.codepage);
        let mut pending = Vec::with_capacity(capacity);
        let mut written = 0;

        for command in commands {
            let bytes = encoder
                .encode(command, &mut state)
                .map_err(|source| TicketError::Encode {
                    line: command.line(),
                    command: command.kind(),
                    source,
                })?;
            pending.extend_from_slice(&bytes);

            if pending.len() >= capacity {
                sink.write_all(&pending)?;
                written += pending.len();
                pending.clear();
            }
        }

        sink.write_all(&pending)?;
        written += pending.len();
        sink.flush()?;

        info!(commands = commands.len(), bytes = written, "rendered ticket");
        Ok(())
    }

    /// [`render`](Self::render) for in-memory tickets.
    pub fn render_str(&self, input: &str) -> TicketResult<()> {
        self.render(input.as_bytes())
    }

    /// Consume the engine and hand back the sink.
    pub fn into_inner(self) -> TicketResult<W> {
        self.inner
            .into_inner()
            .map(|inner| inner.sink)
            .map_err(|_| TicketError::Poisoned)
    }
}

impl<W: Write> Engine<W> {
    /// Engine using the backend selected by `config.format`.
    pub fn with_config(sink: W, config: &RenderConfig) -> Self {
        Self::with_encoder(sink, config.encoder(), *config)
    }
}
