use crate::AnswerKind;

/// Why a line of input could not be turned into an answer.
///
/// These never reach the caller of a resolution; the question is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    /// Choice index is not a number or is outside `1..=choices`.
    #[error("'{input}' is not one of the choices 1-{choices}")]
    InvalidSelection { input: String, choices: usize },

    /// Numeric input is malformed or out of range for the expected width.
    #[error("'{input}' is not a valid {kind}")]
    InvalidNumber { input: String, kind: AnswerKind },

    /// Input is not a recognized boolean literal.
    #[error("'{0}' is not a yes/no answer")]
    InvalidBoolean(String),

    /// The question's default is not a value of the question's kind.
    #[error("default {found} value does not fit a {expected} question")]
    MismatchedDefault {
        expected: AnswerKind,
        found: AnswerKind,
    },
}

impl CoercionError {
    /// The raw input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidSelection { input, .. } | Self::InvalidNumber { input, .. } => input,
            Self::InvalidBoolean(input) => input,
            Self::MismatchedDefault { .. } => "",
        }
    }
}
