//! # Ticketfile CLI
//!
//! Command-line interface for rendering ticket files.
//!
//! ## Usage
//!
//! ```bash
//! # Render to ESC/POS and send straight to a printer device
//! ticketfile render receipt.ticket > /dev/usb/lp0
//!
//! # Preview as HTML
//! ticketfile render --html -o preview.html receipt.ticket
//!
//! # Printer configured for the Nordic table
//! cat receipt.ticket | ticketfile render --charset PC865
//!
//! # Show how each line was understood
//! ticketfile parse --json receipt.ticket
//!
//! # List the directives
//! ticketfile commands
//! ```

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use ticketfile::{
    CommandType, Engine, OutputFormat, RenderConfig, TicketError, parser,
    protocol::codepage::CodePage,
};

/// Ticketfile - receipt description language for ESC/POS printers
#[derive(Parser, Debug)]
#[command(name = "ticketfile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every parsed command to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a ticket to ESC/POS bytes or HTML
    Render {
        /// Ticket file (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Produce an HTML preview instead of printer bytes
        #[arg(long)]
        html: bool,

        /// Code page the printer starts with
        #[arg(long, default_value = "PC437", value_parser = parse_codepage)]
        charset: CodePage,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a ticket and list the commands it contains
    Parse {
        /// Ticket file (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Dump commands as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the directives of the ticket language
    Commands,
}

fn parse_codepage(name: &str) -> Result<CodePage, String> {
    CodePage::parse(name).ok_or_else(|| {
        let known: Vec<&str> = CodePage::ALL.iter().map(|cp| cp.name()).collect();
        format!("unknown code page '{}' (expected one of {})", name, known.join(", "))
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean byte stream.
fn init_logging(verbose: bool) {
    let default = if verbose { "ticketfile=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), TicketError> {
    match command {
        Commands::Render {
            input,
            html,
            charset,
            output,
        } => {
            let config = RenderConfig {
                format: if html { OutputFormat::Html } else { OutputFormat::EscPos },
                codepage: charset,
                ..RenderConfig::default()
            };
            tracing::debug!(format = %config.format, codepage = %config.codepage, "render settings");

            // An invalid ticket must not truncate an existing output file
            let commands = parser::parse(open_input(input.as_deref())?)?;
            let engine = Engine::with_config(open_output(output.as_deref())?, &config);
            engine.render_commands(&commands)?;
        }

        Commands::Parse { input, json } => {
            let commands = parser::parse(open_input(input.as_deref())?)?;
            let mut out = io::stdout().lock();

            if json {
                serde_json::to_writer_pretty(&mut out, &commands).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                for command in &commands {
                    writeln!(
                        out,
                        "{:>4}  {:<15} {:?}",
                        command.line(),
                        command.kind(),
                        command.argument()
                    )?;
                }
            }
        }

        Commands::Commands => {
            let mut out = io::stdout().lock();
            for kind in CommandType::ALL {
                let block = if kind.is_block() { " (block, ends with >>>)" } else { "" };
                writeln!(out, "  {:<15} {}{}", kind.name(), kind.summary(), block)?;
            }
        }
    }

    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, TicketError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>, TicketError> {
    match path {
        None => Ok(Box::new(io::stdout())),
        Some(p) => Ok(Box::new(BufWriter::new(File::create(p)?))),
    }
}
