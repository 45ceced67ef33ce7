//! Console prompts: bounded integers, free text and yes/no questions.
//!
//! Prompts read from any `BufRead` and write to any `Write`, so the menu can be
//! driven by stdin/stdout or by in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::io::config::IntRange;

/// How many rejected answers a prompt tolerates before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Ask again until a valid answer arrives.
    #[default]
    Unbounded,
    /// Fail after this many rejected answers.
    Limited(u32),
}

impl RetryPolicy {
    fn allows(&self, rejected: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => rejected < *max,
        }
    }
}

/// Ask for an integer in `bounds` until one is given.
///
/// Non-numeric answers print `Entrada no válida`; out-of-range answers print
/// the accepted range. End of input is an error.
pub fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    bounds: IntRange,
    retry: RetryPolicy,
) -> Result<i64> {
    let mut rejected = 0u32;
    loop {
        let answer = prompt_line(input, output, message)?;
        match answer.trim().parse::<i64>() {
            Ok(value) if bounds.contains(value) => return Ok(value),
            Ok(value) => {
                debug!(value, min = bounds.min, max = bounds.max, "answer out of range");
                writeln!(
                    output,
                    "Introduce un número entre {} y {}",
                    bounds.min, bounds.max
                )?;
            }
            Err(_) => {
                debug!(answer = %answer, "answer is not an integer");
                writeln!(output, "Entrada no válida")?;
            }
        }
        rejected += 1;
        if !retry.allows(rejected) {
            bail!("no valid answer after {} attempts", rejected);
        }
    }
}

/// Print `message` and read one line, without the trailing newline.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    match read_answer(input, output, message)? {
        Some(line) => Ok(line),
        None => bail!("input closed while waiting for an answer"),
    }
}

/// Like [`prompt_line`], but returns `None` at end of input.
pub fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush().context("flush prompt")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read answer")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Ask a yes/no question; only `s` (any case) counts as yes.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<bool> {
    let answer = prompt_line(input, output, message)?;
    Ok(answer.trim().eq_ignore_ascii_case("s"))
}
