use std::fmt;

use crate::{Answer, AnswerKind, Choice, Context, DefaultAnswer, Value};

/// A caller-supplied function run around a question's resolution.
///
/// Used for `before`/`after` hooks and the completion action.
pub type Hook = Box<dyn Fn(&Context<'_>) -> anyhow::Result<()>>;

/// Decides whether a question's follow-ups are asked.
pub type Predicate = Box<dyn Fn(&Context<'_>) -> bool>;

/// A single question in a question tree.
///
/// Built by the caller with `Question::new` and the `with_*` methods. The
/// engine only ever writes the answer slot and the inherited text.
#[derive(Default)]
pub struct Question {
    /// Prompt text shown to the user. Falls back to the inherited text.
    text: Option<String>,

    /// Text inherited from the parent link, set by the engine.
    inherited: Option<String>,

    /// Extra text rendered after the prompt text.
    message: Option<String>,

    /// Hint about the accepted input, e.g. `"(y/n)"`.
    options: Option<String>,

    /// Printed when an answer is rejected.
    error_message: Option<String>,

    default: Option<DefaultAnswer>,

    /// Non-empty puts the question in choice mode.
    choices: Vec<Choice>,

    /// How free-form input is parsed.
    kind: AnswerKind,

    answer: Option<Answer>,

    /// Follow-up questions, asked after this one is answered.
    children: Vec<Question>,

    /// Gate for the follow-ups. Absent means always.
    resolve: Option<Predicate>,

    before: Option<Hook>,
    after: Option<Hook>,
    action: Option<Hook>,
}

impl Question {
    /// Create a new question expecting the given kind of answer.
    pub fn new(kind: AnswerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a multiple-choice question.
    pub fn choose(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self::default().with_choices(choices)
    }

    // === Builders ===

    /// Set the prompt text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the message rendered after the prompt text.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the options hint.
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Set the message printed when an answer is rejected.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set the answer used on an empty line, rendered as the value itself.
    ///
    /// Outside choice mode the value must fit the question's kind; an empty
    /// line on a question with a mismatched default is rejected.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultAnswer::of(value));
        self
    }

    /// Set the answer used on an empty line, rendered with custom text.
    pub fn with_default_text(mut self, text: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultAnswer::new(text, value));
        self
    }

    /// Replace the alternatives.
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.choices = choices.into_iter().collect();
        self
    }

    /// Append one alternative.
    pub fn with_choice(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.choices.push(Choice::new(label, value));
        self
    }

    /// Append a follow-up question.
    pub fn with_child(mut self, child: Question) -> Self {
        self.children.push(child);
        self
    }

    /// Append follow-up questions.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Question>) -> Self {
        self.children.extend(children);
        self
    }

    /// Only ask the follow-ups when `predicate` holds.
    pub fn resolve_when(mut self, predicate: impl Fn(&Context<'_>) -> bool + 'static) -> Self {
        self.resolve = Some(Box::new(predicate));
        self
    }

    /// Run `hook` before every attempt at this question.
    pub fn before(mut self, hook: impl Fn(&Context<'_>) -> anyhow::Result<()> + 'static) -> Self {
        self.before = Some(Box::new(hook));
        self
    }

    /// Run `hook` after this question and its follow-ups are resolved.
    pub fn after(mut self, hook: impl Fn(&Context<'_>) -> anyhow::Result<()> + 'static) -> Self {
        self.after = Some(Box::new(hook));
        self
    }

    /// Run `action` once the follow-ups are resolved. A failure asks the question again.
    pub fn on_answer(
        mut self,
        action: impl Fn(&Context<'_>) -> anyhow::Result<()> + 'static,
    ) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    // === Accessors ===

    /// The question's own prompt text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The text inherited from the parent link.
    pub fn inherited(&self) -> Option<&str> {
        self.inherited.as_deref()
    }

    /// Set the text inherited from the parent link.
    pub fn set_inherited(&mut self, text: Option<String>) {
        self.inherited = text;
    }

    /// The text this question is labelled with: its own, otherwise the inherited one.
    pub fn display_text(&self) -> Option<&str> {
        self.text().or_else(|| self.inherited())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Get the default answer.
    pub fn default_answer(&self) -> Option<&DefaultAnswer> {
        self.default.as_ref()
    }

    /// Check if an empty line is a valid answer.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Get the alternatives.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Look up an alternative by its 1-based index.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        index.checked_sub(1).and_then(|i| self.choices.get(i))
    }

    /// Check if the question offers alternatives.
    pub fn is_choice(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Get the expected answer kind.
    pub fn kind(&self) -> AnswerKind {
        self.kind
    }

    /// Get the answer, if the question has been resolved.
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    /// Get the answer's typed value.
    pub fn value(&self) -> Option<&Value> {
        self.answer.as_ref().map(Answer::value)
    }

    /// Store an answer.
    pub fn set_answer(&mut self, answer: Answer) {
        self.answer = Some(answer);
    }

    /// Drop the stored answer, returning it.
    pub fn take_answer(&mut self) -> Option<Answer> {
        self.answer.take()
    }

    /// Get the follow-up questions.
    pub fn children(&self) -> &[Question] {
        &self.children
    }

    /// Get a mutable reference to the follow-up questions.
    pub fn children_mut(&mut self) -> &mut Vec<Question> {
        &mut self.children
    }

    /// Get a follow-up by position.
    pub fn child(&self, index: usize) -> Option<&Question> {
        self.children.get(index)
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.resolve.as_ref()
    }

    pub fn before_hook(&self) -> Option<&Hook> {
        self.before.as_ref()
    }

    pub fn after_hook(&self) -> Option<&Hook> {
        self.after.as_ref()
    }

    pub fn action(&self) -> Option<&Hook> {
        self.action.as_ref()
    }

    /// Clear the answers of this question and all follow-ups, so the tree can
    /// be asked again.
    ///
    /// The follow-ups also lose the text they inherited during the last run.
    /// This question keeps its own inherited text, since the caller set it.
    pub fn reset(&mut self) {
        self.answer = None;
        for child in &mut self.children {
            child.inherited = None;
            child.reset();
        }
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("text", &self.text)
            .field("inherited", &self.inherited)
            .field("message", &self.message)
            .field("options", &self.options)
            .field("error_message", &self.error_message)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("kind", &self.kind)
            .field("answer", &self.answer)
            .field("children", &self.children)
            .field("resolve", &self.resolve.is_some())
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}
