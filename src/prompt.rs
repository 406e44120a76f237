//! Interactive overwrite confirmation.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Asks whether an existing file should be replaced.
///
/// Implementations other than [`StdinPrompter`] exist for tests, which
/// script their answers instead of reading standard input.
pub trait Prompter {
    /// Returns `true` when the existing file at `path` should be replaced.
    ///
    /// # Errors
    ///
    /// Returns an error when the answer cannot be read.
    fn confirm_replace(&mut self, path: &Path) -> io::Result<bool>;
}

/// Blocking y/n prompt on standard input, re-prompting on anything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm_replace(&mut self, path: &Path) -> io::Result<bool> {
        let stdin = io::stdin();
        prompt_loop(stdin.lock(), io::stdout(), path)
    }
}

/// Reads lines from `input` until one of `y`/`n` (case-insensitive) arrives.
///
/// End of input before a recognized answer is an error, so a non-interactive
/// run with `--ask` fails for that file instead of hanging or guessing.
fn prompt_loop<R: BufRead, W: Write>(mut input: R, mut output: W, path: &Path) -> io::Result<bool> {
    write!(
        output,
        "File {} already exists. Replace? - y/n: ",
        path.display()
    )?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer to overwrite prompt",
            ));
        }
        let answer = line.trim();
        match answer.to_ascii_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                write!(
                    output,
                    "Answer {answer} not recognized. Replace? - y/n: "
                )?;
                output.flush()?;
            }
        }
    }
}
