//! # quest
//!
//! Ask typed, nested questions on the command line.
//!
//! A caller builds a tree of [`Question`]s. The [`Engine`] prints each prompt,
//! reads one line, turns it into a typed [`Value`] and, depending on the answer,
//! walks into the follow-up questions. Rejected input is asked again.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quest::{AnswerKind, Question};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut port = Question::new(AnswerKind::U16)
//!         .with_text("Port?")
//!         .with_default(8080u16)
//!         .with_error_message("not a port");
//!
//!     quest::stdio().resolve(&mut port)?;
//!     println!("listening on {}", port.value().unwrap());
//!     Ok(())
//! }
//! ```
//!
//! ## Answer kinds
//!
//! The [`AnswerKind`] of a question decides how free-form input is parsed:
//! - integers of 8 to 64 bits, signed or unsigned, at their exact width
//! - `F32` / `F64`
//! - `Bool`: `y`, `yes`, `n`, `no`, or a generic literal like `true` or `0`
//! - `Duration`: a whole number of seconds
//! - `Text`: the line as typed
//! - `Normalized`: the line trimmed and lower-cased (the default)
//!
//! A question with alternatives ignores its kind and answers with the value
//! of the picked alternative.
//!
//! ## Retries
//!
//! Every rejected answer, and every failing completion action, restarts the
//! question from the top: hooks run again, the prompt is printed again. A
//! script that never produces valid input never terminates unless
//! [`EngineConfig::with_max_attempts`] is set.

// Re-export all types from quest-types
pub use quest_types::*;

mod coerce;
pub use coerce::{Mode, coerce, coerce_in};

mod config;
pub use config::{EngineConfig, Inheritance};

mod engine;
pub use engine::{Engine, stdio};

mod error;
pub use error::{AttemptError, HookStage, ResolveError};

pub mod io;
pub use io::{Input, LineReader, Output, StdinInput, WriteOutput};

// Test backend for resolving questions without user interaction
mod test_backend;
pub use test_backend::ScriptedInput;
