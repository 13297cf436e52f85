//! Core types for the quest crate.
//!
//! This crate provides the foundational types for defining question trees:
//! - `Question` - A single prompt, its typed answer slot and its follow-ups
//! - `AnswerKind` and `Value` - The expected answer type and the typed answer
//! - `Choice` and `DefaultAnswer` - Multiple-choice alternatives and defaults
//! - `Context` - What hooks, predicates and actions get to inspect
//! - `Interview` - The outermost container of a question tree

mod value;
pub use value::{AnswerKind, Value};

mod answer;
pub use answer::Answer;

mod choice;
pub use choice::Choice;

mod default_answer;
pub use default_answer::DefaultAnswer;

mod question;
pub use question::{Hook, Predicate, Question};

mod context;
pub use context::Context;

mod interview;
pub use interview::Interview;

mod error;
pub use error::CoercionError;
