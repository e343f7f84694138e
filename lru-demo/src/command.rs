//! Command parsing for the interactive session
//!
//! Turns one line of user input into a [`Command`]. Input is validated here,
//! before anything reaches the cache: empty keys and values are rejected and a
//! capacity must parse as an integer.

use lru_ring::CacheError;
use std::fmt;

/// One action requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write `value` under `key`
    Put { key: String, value: String },
    /// Read `key`, marking it most recently used
    Get { key: String },
    /// Read `key` without changing recency
    Peek { key: String },
    /// Remove `key`
    Delete { key: String },
    /// Render the recency list
    Show,
    /// Render hit/miss/eviction counters
    Stats,
    /// Remove every entry
    Clear,
    /// List the available commands
    Help,
    /// End the session
    Quit,
}

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The command word is not recognised
    UnknownCommand(String),
    /// A key argument was missing or blank
    EmptyKey,
    /// A value argument was missing or blank
    EmptyValue,
    /// Capacity text that is not an integer
    NotANumber(String),
    /// Capacity the cache refused
    Capacity(CacheError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownCommand(word) => {
                write!(f, "unknown command '{word}' (type 'help' for a list)")
            }
            InputError::EmptyKey => write!(f, "key must not be empty"),
            InputError::EmptyValue => write!(f, "value must not be empty"),
            InputError::NotANumber(text) => {
                write!(f, "invalid capacity '{text}': capacity must be a positive integer")
            }
            InputError::Capacity(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<CacheError> for InputError {
    fn from(err: CacheError) -> Self {
        InputError::Capacity(err)
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  put <key> <value>   write a value (the value may contain spaces)
  get <key>           read a value and mark it most recently used
  peek <key>          read a value without touching recency
  del <key>           remove a key
  show                print the cache from most to least recently used
  stats               print hit/miss/eviction counters
  clear               remove every entry
  help                print this message
  quit                leave the session";

/// Parses a single line into a [`Command`].
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "put" | "set" => {
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim()),
                None => (rest, ""),
            };
            Command::Put {
                key: non_empty(key, InputError::EmptyKey)?,
                value: non_empty(value, InputError::EmptyValue)?,
            }
        }
        "get" => Command::Get {
            key: single_key(rest)?,
        },
        "peek" => Command::Peek {
            key: single_key(rest)?,
        },
        "del" | "delete" | "rm" => Command::Delete {
            key: single_key(rest)?,
        },
        "show" | "ls" => Command::Show,
        "stats" => Command::Stats,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(InputError::UnknownCommand(word.to_string())),
    };

    Ok(Some(command))
}

/// Parses capacity text the way a user would type it.
///
/// Non-integer text is reported as [`InputError::NotANumber`]; integers that
/// are not positive come back as [`CacheError::InvalidCapacity`].
pub fn parse_capacity(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

fn single_key(rest: &str) -> Result<String, InputError> {
    // Keys are single words; anything after the first one is ignored.
    let key = rest.split_whitespace().next().unwrap_or("");
    non_empty(key, InputError::EmptyKey)
}

fn non_empty(text: &str, err: InputError) -> Result<String, InputError> {
    if text.is_empty() {
        Err(err)
    } else {
        Ok(text.to_string())
    }
}
