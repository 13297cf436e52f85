use std::fmt;
use std::io;

use quest_types::CoercionError;

/// Which caller hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    Before,
    After,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// Why a single attempt at a question did not stick.
///
/// The engine handles these by asking again.
#[derive(Debug, thiserror::Error)]
pub enum AttemptError {
    /// The input could not be coerced into an answer.
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// The completion action rejected the answer.
    #[error("Action failed: {0}")]
    ActionFailed(#[source] anyhow::Error),
}

/// Error type for resolving a question.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A before or after hook returned an error.
    #[error("{stage} hook failed: {source}")]
    HookFailed {
        stage: HookStage,
        #[source]
        source: anyhow::Error,
    },

    /// Reading a line failed, or the input ended.
    #[error("Input stream failed: {0}")]
    InputStreamFailed(#[from] io::Error),

    /// The configured attempt limit was reached.
    #[error("Gave up after {attempts} attempts: {last}")]
    AttemptsExhausted {
        attempts: usize,
        #[source]
        last: AttemptError,
    },
}

impl ResolveError {
    /// Wrap a hook failure.
    pub fn hook(stage: HookStage, source: impl Into<anyhow::Error>) -> Self {
        Self::HookFailed {
            stage,
            source: source.into(),
        }
    }

    /// Check if the input ended before the question was answered.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::InputStreamFailed(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }

    /// Check if this error came from a caller hook.
    pub fn is_hook_failure(&self) -> bool {
        matches!(self, Self::HookFailed { .. })
    }
}
