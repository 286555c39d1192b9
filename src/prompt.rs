//! Line-oriented console prompts with bounded retry.
//!
//! [`Prompter`] is generic over its reader and writer so the interactive
//! sessions can be driven from in-memory buffers.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::{InputError, PromptError};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `prompt` and reads one trimmed line.
    ///
    /// Returns [`PromptError::Eof`] once the input is exhausted.
    pub fn line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(buf.trim().to_string())
    }

    /// Re-prompts until `parse` accepts the answer or the attempt budget
    /// runs out.
    pub fn until<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let answer = self.line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.max_attempts => {
                    return Err(PromptError::TooManyAttempts {
                        attempts: attempt,
                        last: e,
                    });
                }
                Err(e) => {
                    debug!(attempt, error = %e, "Rejected input");
                    self.say(&format!("\t{}. Please try again.", capitalize(&e.to_string())))?;
                }
            }
        }
    }

    /// Asks a yes/no question; only `y` or `yes` (any case) count as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.line(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
