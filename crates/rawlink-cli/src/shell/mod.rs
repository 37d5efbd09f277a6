//! Interactive shell: read a browser URL, print its raw link, repeat.
//!
//! Each iteration runs inside its own error boundary. Only an exit keyword,
//! Ctrl-C or end of input ends the loop; read and write failures are printed
//! and the next prompt follows.

mod error;
mod input;
pub mod interrupt;

use std::io::Write;

use rawlink_core::converter;

pub use error::ShellError;
pub use input::{EditorSource, HistoryPolicy, Input, LineSource};

pub const PROMPT: &str = "Paste GitHub URL: ";

const BANNER: &str = "GitHub Link Converter\n\
==================================================\n\
Enter a GitHub browser URL to convert it to a raw link.\n\
Type 'quit' or 'exit' to exit.\n\n";
const EMPTY_INPUT: &str = "Please enter a valid URL.\n\n";
const INVALID_URL: &str =
    "Error: Invalid GitHub URL format. Please use a GitHub browser link.\n\n";
const GOODBYE: &str = "Goodbye!\n";
const INTERRUPTED_GOODBYE: &str = "\n\nGoodbye!\n";
/// The editor has already ended the `^C` line, so one blank line is enough.
const EDITOR_INTERRUPTED_GOODBYE: &str = "\nGoodbye!\n";
const EOF_GOODBYE: &str = "\nGoodbye!\n";

const EXIT_KEYWORDS: [&str; 3] = ["quit", "exit", "q"];

/// Why the loop ended. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Interrupted,
    EndOfInput,
}

enum Step {
    Continue,
    Exit(Exit),
}

pub struct Shell<S, W> {
    source: S,
    out: W,
}

impl<S: LineSource, W: Write> Shell<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    /// Print the banner and loop until the user leaves.
    pub fn run(mut self) -> Exit {
        if let Err(err) = self.say(BANNER) {
            tracing::warn!("failed to print banner: {}", err);
        }

        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit(exit)) => {
                    tracing::info!("shell finished: {:?}", exit);
                    return exit;
                }
                Err(err) => {
                    tracing::warn!("shell iteration failed: {}", err);
                    // Best effort: the output itself may be what failed.
                    let _ = self.say(&format!("An error occurred: {}\n\n", err));
                }
            }
        }
    }

    fn step(&mut self) -> Result<Step, ShellError> {
        let line = match self.source.read_line(PROMPT)? {
            Input::Line(line) => line,
            Input::Interrupted => {
                return Ok(self.leave(EDITOR_INTERRUPTED_GOODBYE, Exit::Interrupted))
            }
            Input::Eof => return Ok(self.leave(EOF_GOODBYE, Exit::EndOfInput)),
        };

        let line = converter::trim_input(&line);
        if is_exit_keyword(line) {
            return Ok(self.leave(GOODBYE, Exit::Quit));
        }
        if line.is_empty() {
            self.say(EMPTY_INPUT)?;
            return Ok(Step::Continue);
        }

        match converter::convert(line) {
            Some(raw) => self.say(&format!("\nRaw GitHub Link:\n{}\n\n", raw))?,
            None => self.say(INVALID_URL)?,
        }
        Ok(Step::Continue)
    }

    /// Farewell output is best effort; leaving must not depend on stdout.
    fn leave(&mut self, farewell: &str, exit: Exit) -> Step {
        if let Err(err) = self.say(farewell) {
            tracing::warn!("failed to print farewell: {}", err);
        }
        Step::Exit(exit)
    }

    fn say(&mut self, text: &str) -> Result<(), ShellError> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn is_exit_keyword(line: &str) -> bool {
    let lowered = line.to_lowercase();
    EXIT_KEYWORDS.contains(&lowered.as_str())
}
