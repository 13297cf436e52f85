use crate::Value;

/// The answer used when the operator enters an empty line.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultAnswer {
    /// Text rendered as part of the prompt, e.g. `"[8080]"`.
    pub text: String,

    /// The value the question resolves to.
    pub value: Value,
}

impl DefaultAnswer {
    /// Create a default rendered with custom text.
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }

    /// Create a default rendered as the value itself.
    pub fn of(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            text: value.to_string(),
            value,
        }
    }
}
