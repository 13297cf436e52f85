use crate::Question;

/// The outermost container of a question tree.
///
/// Its `prefix` is the parent link of every top-level question: a question
/// without its own text is labelled with it.
#[derive(Debug, Default)]
pub struct Interview {
    /// Text inherited by questions that have none of their own.
    pub prefix: Option<String>,

    /// Optional message shown before the first question.
    pub prelude: Option<String>,

    /// Top-level questions, asked in order.
    pub questions: Vec<Question>,

    /// Optional message shown after the last question.
    pub epilogue: Option<String>,
}

impl Interview {
    /// Create a new interview with the given questions.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: questions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the prefix text.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a mutable reference to the questions.
    pub fn questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }

    /// Get the number of top-level questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Clear every answer so the interview can be run again.
    pub fn reset(&mut self) {
        for question in &mut self.questions {
            question.reset();
        }
    }
}
