use crate::{Answer, Question, Value};

/// What hooks, the follow-up predicate and the completion action see.
///
/// A fresh context is made for every attempt at a question. It borrows the
/// question, so the answer it exposes is whatever the attempt has produced so far.
#[derive(Debug, Clone, Copy)]
pub struct Context<'q> {
    question: &'q Question,
    attempt: usize,
}

impl<'q> Context<'q> {
    /// Create a context for the given 1-based attempt at `question`.
    pub fn new(question: &'q Question, attempt: usize) -> Self {
        Self { question, attempt }
    }

    /// The question being resolved.
    pub fn question(&self) -> &'q Question {
        self.question
    }

    /// Which attempt this is, starting at 1.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// The answer so far. `None` before the first answer was accepted.
    pub fn answer(&self) -> Option<&'q Answer> {
        self.question.answer()
    }

    /// The typed value of the answer so far.
    pub fn value(&self) -> Option<&'q Value> {
        self.question.value()
    }

    /// The raw line the answer was parsed from.
    pub fn input(&self) -> Option<&'q str> {
        self.answer().map(Answer::input)
    }

    /// The 1-based index of the chosen alternative.
    pub fn selection(&self) -> Option<usize> {
        self.answer().and_then(Answer::selection)
    }
}
