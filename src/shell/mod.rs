//! Shell Module
//!
//! Line-oriented command interpreter over a [`Workbench`].
//!
//! ## Commands
//! ```text
//! use <linear|quadratic|double|chaining>
//! insert <key> | search <key> | delete <key>
//! print | probe <key> | stats
//! hash <division|mid-square|folding|multiplication|universal> <key>
//! help | quit
//! ```
//!
//! Parse errors are printed and the loop continues; I/O errors end it.

mod command;
mod workbench;

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{HashLabError, Result};

pub use command::{parse_command, Command, Method};
pub use workbench::{Outcome, Workbench};

/// Prompt written before every line
pub const PROMPT: &str = "hashlab> ";

/// Read commands from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(workbench: &mut Workbench, input: R, mut output: W) -> Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match workbench.execute(command)? {
                Outcome::Output(text) => writeln!(output, "{}", text)?,
                Outcome::Quit => return Ok(()),
            },
            Err(HashLabError::Parse(reason)) => {
                warn!(line = %line, "rejected input");
                writeln!(output, "Invalid input: {} (type 'help')", reason)?;
            }
            Err(e) => return Err(e),
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}
