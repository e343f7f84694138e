use anyhow::{Context, Result};
use clap::Parser;
use lru_demo::command::parse_line;
use lru_demo::session::{Flow, Session};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Interactive LRU cache explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of entries). Prompted for when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    capacity: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Do not print the "> " prompt (useful when piping commands in)
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the rendered cache on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let session = match &args.capacity {
        Some(text) => Session::from_capacity_text(text)
            .with_context(|| format!("cannot start with capacity '{text}'"))?,
        None => match prompt_capacity(&mut input, &mut out, !args.no_prompt)? {
            Some(session) => session,
            None => return Ok(()),
        },
    };

    info!(capacity = session.cache().cap().get(), "session started");
    run(session, &mut input, &mut out, !args.no_prompt)
}

/// Asks for a capacity until a valid one is entered. Returns `None` on EOF.
fn prompt_capacity<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: bool,
) -> Result<Option<Session>> {
    loop {
        if prompt {
            write!(out, "capacity> ")?;
            out.flush()?;
        }
        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read capacity")? == 0 {
            return Ok(None);
        }
        match Session::from_capacity_text(&line) {
            Ok(session) => return Ok(Some(session)),
            Err(err) => {
                warn!(%err, "rejected capacity");
                writeln!(out, "error: {err}")?;
            }
        }
    }
}

/// Reads commands until `quit` or end of input.
fn run<R: BufRead, W: Write>(
    mut session: Session,
    input: &mut R,
    out: &mut W,
    prompt: bool,
) -> Result<()> {
    writeln!(
        out,
        "LRU cache with capacity {} (type 'help' for commands)",
        session.cache().cap()
    )?;
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read command")? == 0 {
            break;
        }
        match parse_line(&line) {
            Ok(Some(command)) => {
                if session.execute(command, out)? == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }
    out.flush()?;
    Ok(())
}
