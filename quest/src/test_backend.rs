//! Test backend for resolving questions without user interaction.
//!
//! `ScriptedInput` answers prompts from a fixed list of lines. Once the list
//! runs out it reports the end of input, so a test that expects more prompts
//! than it scripted fails instead of hanging.
//!
//! # Example
//!
//! ```rust
//! use quest::{AnswerKind, Engine, Question, ScriptedInput, Value};
//!
//! let mut age = Question::new(AnswerKind::U8)
//!     .with_text("Age?")
//!     .with_error_message("invalid");
//!
//! let mut engine = Engine::new(ScriptedInput::new(["abc", "7"]), String::new());
//! engine.resolve(&mut age).unwrap();
//!
//! assert_eq!(age.value(), Some(&Value::U8(7)));
//! assert_eq!(engine.output(), "Age? invalid Age? ");
//! ```

use std::collections::VecDeque;
use std::io;

use crate::io::Input;

/// An [`Input`] that returns pre-defined lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    read: usize,
}

impl ScriptedInput {
    /// Create a script from the given lines, read in order.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            read: 0,
        }
    }

    /// Append a line to the script.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    /// Number of lines not read yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines read so far.
    pub fn read(&self) -> usize {
        self.read
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> io::Result<String> {
        let line = self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script has no more lines")
        })?;
        self.read += 1;
        Ok(line)
    }
}
