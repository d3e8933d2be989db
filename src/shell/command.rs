//! Command definitions
//!
//! One line of input parses into one command.

use std::str::FromStr;

use crate::config::StrategyKind;
use crate::error::{HashLabError, Result};
use crate::hashing::HashMethod;

/// Collision-resolution method a workbench can switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Probing(StrategyKind),
    Chaining,
}

impl FromStr for Method {
    type Err = HashLabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Method::Probing(StrategyKind::Linear)),
            "quadratic" => Ok(Method::Probing(StrategyKind::Quadratic)),
            "double" | "double-hash" => Ok(Method::Probing(StrategyKind::DoubleHash)),
            "chaining" | "chain" => Ok(Method::Chaining),
            other => Err(HashLabError::Parse(format!("unknown method '{}'", other))),
        }
    }
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the active table
    Use { method: Method },

    /// Insert a key into the active table
    Insert { key: i64 },

    /// Search the active table
    Search { key: i64 },

    /// Delete from the active table
    Delete { key: i64 },

    /// Print the active table
    Print,

    /// Show the probe path of a key (open addressing only)
    Probe { key: i64 },

    /// Evaluate a hash function
    Hash { method: HashMethod, key: i64 },

    /// Occupancy of every table
    Stats,

    Help,

    Quit,
}

/// Parse one line of input
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();

    let name = match words.next() {
        Some(name) => name.to_ascii_lowercase(),
        None => return Ok(None),
    };

    let command = match name.as_str() {
        "use" => Command::Use {
            method: required(&mut words, "method")?.parse()?,
        },
        "insert" | "i" => Command::Insert {
            key: parse_key(required(&mut words, "key")?)?,
        },
        "search" | "s" => Command::Search {
            key: parse_key(required(&mut words, "key")?)?,
        },
        "delete" | "d" => Command::Delete {
            key: parse_key(required(&mut words, "key")?)?,
        },
        "print" | "p" => Command::Print,
        "probe" => Command::Probe {
            key: parse_key(required(&mut words, "key")?)?,
        },
        "hash" => {
            let method = required(&mut words, "hash method")?.parse()?;
            let key = parse_key(required(&mut words, "key")?)?;
            Command::Hash { method, key }
        }
        "stats" => Command::Stats,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(HashLabError::Parse(format!("unknown command '{}'", other)));
        }
    };

    if let Some(extra) = words.next() {
        return Err(HashLabError::Parse(format!("unexpected argument '{}'", extra)));
    }

    Ok(Some(command))
}

fn required<'a>(words: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    words
        .next()
        .ok_or_else(|| HashLabError::Parse(format!("missing {}", what)))
}

fn parse_key(word: &str) -> Result<i64> {
    word.parse()
        .map_err(|_| HashLabError::Parse(format!("invalid key '{}'", word)))
}
