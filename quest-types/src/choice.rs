use crate::Value;

/// One alternative of a multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Label shown next to the alternative's number.
    pub label: String,

    /// Value the question is answered with when this alternative is picked.
    pub value: Value,
}

impl Choice {
    /// Create a new alternative.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an alternative whose value is its own label.
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Value::Text(label.clone()),
            label,
        }
    }
}
