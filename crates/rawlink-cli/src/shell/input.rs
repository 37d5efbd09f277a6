//! Where shell lines come from.

use rawlink_core::config::ShellConfig;
use rawlink_core::converter::trim_input;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use super::ShellError;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// Ctrl-D or closed stdin.
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ShellError>;
}

/// Which lines go into the editor history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    enabled: bool,
}

impl HistoryPolicy {
    pub fn from_config(cfg: &ShellConfig) -> Self {
        Self {
            enabled: cfg.history && cfg.max_history > 0,
        }
    }

    /// The trimmed line to record, or `None` when nothing should be kept.
    pub fn entry<'a>(&self, line: &'a str) -> Option<&'a str> {
        let trimmed = trim_input(line);
        (self.enabled && !trimmed.is_empty()).then_some(trimmed)
    }
}

/// Terminal line editor. Falls back to plain line reads when stdin is not a tty.
pub struct EditorSource {
    editor: DefaultEditor,
    history: HistoryPolicy,
}

impl EditorSource {
    pub fn new(cfg: &ShellConfig) -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .max_history_size(cfg.max_history)?
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self {
            editor,
            history: HistoryPolicy::from_config(cfg),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if let Some(entry) = self.history.entry(&line) {
                    self.editor.add_history_entry(entry)?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err.into()),
        }
    }
}
