//! Interactive drivers for the two tools.
//!
//! Each driver runs one session against a [`Prompter`]; [`repeat`] wraps a
//! driver in the "run again?" loop.

pub mod calories;
pub mod gradebook;

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::error::PromptError;
use crate::prompt::Prompter;

/// Runs `session` until the user declines another round or input ends.
///
/// A session that exhausts its retry budget is abandoned with a message and
/// the user is offered another round; end of input stops the loop cleanly.
pub fn repeat<R, W, F>(
    p: &mut Prompter<R, W>,
    again_prompt: &str,
    goodbye: &str,
    mut session: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Prompter<R, W>) -> Result<()>,
{
    let mut round = 0usize;
    loop {
        round += 1;
        info!(round, "Starting session");

        if let Err(e) = session(p) {
            match e.downcast_ref::<PromptError>() {
                Some(PromptError::Eof) => {
                    info!(round, "Input closed, stopping");
                    return Ok(());
                }
                Some(PromptError::TooManyAttempts { attempts, last }) => {
                    warn!(round, attempts, error = %last, "Session abandoned");
                    p.say(&format!(
                        "\nToo many invalid entries ({attempts}). Abandoning this session."
                    ))?;
                }
                _ => return Err(e),
            }
        }

        let again = match p.confirm(again_prompt) {
            Ok(answer) => answer,
            Err(PromptError::Eof) => false,
            Err(e) => return Err(e.into()),
        };
        if !again {
            p.say(goodbye)?;
            return Ok(());
        }
    }
}
