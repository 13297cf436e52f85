use crate::Value;

/// The answer to a question: the typed value plus the input it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    value: Value,
    input: String,
    selection: Option<usize>,
}

impl Answer {
    /// An answer parsed from a line of free-form input.
    pub fn new(value: impl Into<Value>, input: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            input: input.into(),
            selection: None,
        }
    }

    /// An answer picked from a list of alternatives by its 1-based index.
    pub fn selected(value: impl Into<Value>, input: impl Into<String>, index: usize) -> Self {
        Self {
            value: value.into(),
            input: input.into(),
            selection: Some(index),
        }
    }

    /// The typed value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The raw line as typed, without its line terminator.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The 1-based index of the chosen alternative, if the answer came from a choice.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Check if the operator accepted the default by entering an empty line.
    pub fn is_default(&self) -> bool {
        self.input.is_empty()
    }
}
