//! Interactive session state
//!
//! A [`Session`] owns one cache for its whole lifetime and applies parsed
//! commands to it. Output goes to any `io::Write`, which keeps the session
//! testable without a terminal.

use crate::command::{parse_capacity, Command, InputError, HELP};
use crate::render::{render_list, render_stats};
use lru_ring::LruCache;
use std::io::{self, Write};
use tracing::{debug, info};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop reading and end the session
    Quit,
}

/// An interactive session over a string-to-string cache.
#[derive(Debug)]
pub struct Session {
    cache: LruCache<String, String>,
}

impl Session {
    /// Starts a session over an existing cache.
    pub fn new(cache: LruCache<String, String>) -> Self {
        Session { cache }
    }

    /// Starts a session from capacity text as typed by the user.
    pub fn from_capacity_text(text: &str) -> Result<Self, InputError> {
        let capacity = parse_capacity(text)?;
        let cache = LruCache::try_new(capacity)?;
        info!(capacity, "created cache");
        Ok(Session::new(cache))
    }

    /// The cache driven by this session.
    pub fn cache(&self) -> &LruCache<String, String> {
        &self.cache
    }

    /// Applies one command and writes its result to `out`.
    ///
    /// Commands that read or write the cache are followed by the rendered
    /// recency list.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::Put { key, value } => {
                if let Some((old_key, old_value)) = self.cache.put(key, value) {
                    info!(key = %old_key, "evicted least recently used entry");
                    writeln!(out, "evicted: {old_key}={old_value}")?;
                }
                self.show(out)?;
            }
            Command::Get { key } => {
                match self.cache.get(&key) {
                    Some(value) => writeln!(out, "{key} = {value}")?,
                    None => writeln!(out, "miss: {key}")?,
                }
                self.show(out)?;
            }
            Command::Peek { key } => match self.cache.peek(&key) {
                Some(value) => writeln!(out, "{key} = {value}")?,
                None => writeln!(out, "miss: {key}")?,
            },
            Command::Delete { key } => {
                match self.cache.remove(&key) {
                    Some(value) => writeln!(out, "removed: {key}={value}")?,
                    None => writeln!(out, "miss: {key}")?,
                }
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Stats => write!(out, "{}", render_stats(&self.cache))?,
            Command::Clear => {
                self.cache.clear();
                writeln!(out, "cleared")?;
                self.show(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", render_list(&self.cache))
    }
}
