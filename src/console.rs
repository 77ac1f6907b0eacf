//! Line-oriented input and output providers.
//!
//! Every interactive flow talks to a [`Console`] instead of touching stdin
//! directly, so the same prompting code runs against the terminal in
//! production and against a canned script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{AccountError, Result};

/// A source of user lines and a sink for user-facing messages.
pub trait Console {
    /// Display `prompt` (no trailing newline) and read one line of input.
    ///
    /// The returned line has its trailing newline removed but is otherwise
    /// untouched; leading and trailing spaces are data. A closed input
    /// source yields [`AccountError::InputClosed`].
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Display one full line of output.
    fn write_line(&mut self, text: &str);
}

/// The terminal-backed console used by the real program.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(AccountError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// A console driven by a pre-seeded list of responses.
///
/// Responses are handed out in order; asking for more than were seeded
/// reports [`AccountError::InputClosed`], which is also how tests exercise
/// EOF handling. Every prompt and every written line is recorded in a
/// chronological transcript for assertions.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    responses: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            responses: responses.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything displayed so far, prompts and output lines interleaved in
    /// the order the user would have seen them.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// True if any transcript entry contains `needle`.
    pub fn transcript_contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|entry| entry.contains(needle))
    }

    /// Number of seeded responses not yet consumed.
    pub fn remaining_responses(&self) -> usize {
        self.responses.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.responses.pop_front().ok_or(AccountError::InputClosed)
    }

    fn write_line(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
