use std::num::NonZeroUsize;

/// Which text a follow-up question without its own text is labelled with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Inheritance {
    /// A follow-up takes over its parent's own link, so every question in a
    /// tree inherits from the top-level link (the interview prefix).
    #[default]
    Flatten,

    /// A follow-up inherits the display text of the ancestor `n` levels up:
    /// `1` is the question that owns it, `2` that question's parent, and so on.
    /// Depths past the top of the tree resolve to the top-level link; `0`
    /// behaves like `1`.
    Ancestor(usize),
}

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How follow-up questions inherit display text.
    pub inheritance: Inheritance,

    /// Give up on a question after this many attempts. `None` asks forever.
    pub max_attempts: Option<NonZeroUsize>,

    /// Printed before reading the answer to a multiple-choice question.
    pub selection_marker: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            inheritance: Inheritance::default(),
            max_attempts: None,
            selection_marker: Some("? Answer ".to_string()),
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how follow-up questions inherit display text.
    pub fn with_inheritance(mut self, inheritance: Inheritance) -> Self {
        self.inheritance = inheritance;
        self
    }

    /// Give up on a question after `attempts` attempts. Zero means no limit.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = NonZeroUsize::new(attempts);
        self
    }

    /// Set the marker printed before reading a choice.
    pub fn with_selection_marker(mut self, marker: impl Into<String>) -> Self {
        self.selection_marker = Some(marker.into());
        self
    }

    /// Read choices without printing a marker.
    pub fn without_selection_marker(mut self) -> Self {
        self.selection_marker = None;
        self
    }

    /// Check if `attempt` has used up the attempt budget.
    pub(crate) fn exhausted(&self, attempt: usize) -> bool {
        self.max_attempts.is_some_and(|max| attempt >= max.get())
    }
}
