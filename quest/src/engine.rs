//! The question-resolution engine.

use std::io;

use quest_types::{Context, Interview, Question};
use tracing::{debug, trace, warn};

use crate::coerce::{Mode, coerce_in};
use crate::config::{EngineConfig, Inheritance};
use crate::error::{AttemptError, HookStage, ResolveError};
use crate::io::{Input, Output, StdinInput, WriteOutput};

/// Build an engine that reads from stdin and writes to stdout.
pub fn stdio() -> Engine<StdinInput, WriteOutput<io::Stdout>> {
    Engine::new(StdinInput, WriteOutput::stdout())
}

/// How a single attempt at a question ended.
enum Outcome {
    Resolved,
    Retry(AttemptError),
}

/// Asks questions over an [`Input`] and an [`Output`].
///
/// One question is resolved at a time, depth-first through its follow-ups.
/// Each resolution is a loop of attempts; an attempt runs:
///
/// 1. the `before` hook (an error aborts the resolution)
/// 2. the prompt: display text, message, options hint, default text, then the
///    numbered alternatives if there are any
/// 3. one line of input (an error or end of input aborts the resolution)
/// 4. coercion; a rejected line prints the error message and starts the next attempt
/// 5. the follow-ups, if the predicate allows
/// 6. the completion action; an error prints it, clears the answer and starts
///    the next attempt
/// 7. the `after` hook (an error aborts the resolution)
///
/// Hooks therefore run once per attempt, not once per question. Attempts are
/// unbounded unless [`EngineConfig::max_attempts`] is set.
#[derive(Debug)]
pub struct Engine<I, O> {
    input: I,
    output: O,
    config: EngineConfig,
}

impl<I: Input, O: Output> Engine<I, O> {
    /// Create an engine with the default configuration.
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            config: EngineConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Take the input and output back.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Resolve a question and its follow-ups.
    ///
    /// The question's current inherited text is its parent link.
    pub fn resolve(&mut self, question: &mut Question) -> Result<(), ResolveError> {
        let lineage = [question.inherited().map(str::to_string)];
        self.resolve_at(question, &lineage)
    }

    /// Resolve every question of an interview in order.
    ///
    /// Top-level questions are linked to the interview prefix.
    pub fn run(&mut self, interview: &mut Interview) -> Result<(), ResolveError> {
        if let Some(prelude) = &interview.prelude {
            self.output.write(prelude);
            self.output.write("\n");
        }

        debug!(questions = interview.len(), "running interview");
        let prefix = interview.prefix.clone();
        for question in interview.questions_mut() {
            question.set_inherited(prefix.clone());
            self.resolve(question)?;
        }

        if let Some(epilogue) = &interview.epilogue {
            self.output.write(epilogue);
            self.output.write("\n");
        }
        Ok(())
    }

    /// `lineage` holds the display texts above `question`: the top-level link
    /// first, the question's parent last.
    fn resolve_at(
        &mut self,
        question: &mut Question,
        lineage: &[Option<String>],
    ) -> Result<(), ResolveError> {
        let _span = tracing::debug_span!("resolve", depth = lineage.len() - 1).entered();

        // Once the alternatives were shown, every further attempt reads a selection.
        let mut mode = Mode::Typed;
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(question, lineage, attempt, &mut mode)? {
                Outcome::Resolved => {
                    debug!(attempt, "question resolved");
                    return Ok(());
                }
                Outcome::Retry(last) if self.config.exhausted(attempt) => {
                    warn!(attempts = attempt, error = %last, "giving up on question");
                    return Err(ResolveError::AttemptsExhausted {
                        attempts: attempt,
                        last,
                    });
                }
                Outcome::Retry(err) => {
                    debug!(attempt, error = %err, "asking again");
                }
            }
        }
    }

    fn attempt(
        &mut self,
        question: &mut Question,
        lineage: &[Option<String>],
        attempt: usize,
        mode: &mut Mode,
    ) -> Result<Outcome, ResolveError> {
        if let Some(hook) = question.before_hook() {
            hook(&Context::new(question, attempt))
                .map_err(|err| ResolveError::hook(HookStage::Before, err))?;
        }

        self.prompt(question, mode);

        let raw = self.input.read_line()?;
        trace!(input = %raw, "read line");

        let answer = match coerce_in(question, &raw, *mode) {
            Ok(answer) => answer,
            Err(err) => {
                if let Some(message) = question.error_message().filter(|m| !m.is_empty()) {
                    self.emit(message);
                }
                return Ok(Outcome::Retry(err.into()));
            }
        };
        question.set_answer(answer);

        self.resolve_children(question, lineage, attempt)?;

        if let Some(action) = question.action()
            && let Err(err) = action(&Context::new(question, attempt))
        {
            self.emit(&err.to_string());
            question.take_answer();
            return Ok(Outcome::Retry(AttemptError::ActionFailed(err)));
        }

        if let Some(hook) = question.after_hook() {
            hook(&Context::new(question, attempt))
                .map_err(|err| ResolveError::hook(HookStage::After, err))?;
        }

        Ok(Outcome::Resolved)
    }

    fn prompt(&mut self, question: &Question, mode: &mut Mode) {
        let parts = [
            question.display_text(),
            question.message().filter(|m| !m.is_empty()),
            question.options().filter(|o| !o.is_empty()),
            question.default_answer().map(|d| d.text.as_str()),
        ];
        for part in parts.into_iter().flatten() {
            self.emit(part);
        }

        if question.is_choice() {
            for (index, choice) in question.choices().iter().enumerate() {
                self.output.write(&format!("\n\t{}) {} ", index + 1, choice.label));
            }
            self.output.write("\n");
            *mode = Mode::Choice;
        }

        if *mode == Mode::Choice
            && let Some(marker) = &self.config.selection_marker
        {
            self.output.write(marker);
        }
    }

    fn resolve_children(
        &mut self,
        question: &mut Question,
        lineage: &[Option<String>],
        attempt: usize,
    ) -> Result<(), ResolveError> {
        if question.children().is_empty() {
            return Ok(());
        }

        let ask = question
            .predicate()
            .is_none_or(|predicate| predicate(&Context::new(question, attempt)));
        if !ask {
            debug!(children = question.children().len(), "skipping follow-ups");
            return Ok(());
        }

        let mut child_lineage = lineage.to_vec();
        child_lineage.push(question.display_text().map(str::to_string));

        let link = match self.config.inheritance {
            Inheritance::Flatten => question.inherited().map(str::to_string),
            Inheritance::Ancestor(levels) => {
                let index = child_lineage.len().saturating_sub(levels.max(1));
                child_lineage.get(index).cloned().flatten()
            }
        };

        for child in question.children_mut() {
            child.set_inherited(link.clone());
            self.resolve_at(child, &child_lineage)?;
        }
        Ok(())
    }

    /// Write one piece of prompt text followed by a separating space.
    fn emit(&mut self, text: &str) {
        self.output.write(text);
        self.output.write(" ");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::ScriptedInput;
    use quest_types::{AnswerKind, Value};

    fn engine(lines: &[&str]) -> Engine<ScriptedInput, String> {
        Engine::new(ScriptedInput::new(lines.iter().copied()), String::new())
    }

    #[test]
    fn prompt_parts_in_order() {
        let mut question = Question::new(AnswerKind::U16)
            .with_text("Port?")
            .with_message("(server)")
            .with_options("[1-65535]")
            .with_default_text("<8080>", 8080u16);

        let mut engine = engine(&[""]);
        engine.resolve(&mut question).unwrap();

        assert_eq!(engine.output(), "Port? (server) [1-65535] <8080> ");
        assert_eq!(question.value(), Some(&Value::U16(8080)));
    }

    #[test]
    fn empty_message_is_skipped() {
        let mut question = Question::new(AnswerKind::Text)
            .with_text("Name?")
            .with_message("");

        let mut engine = engine(&["Ada"]);
        engine.resolve(&mut question).unwrap();
        assert_eq!(engine.output(), "Name? ");
    }

    #[test]
    fn choices_are_numbered() {
        let mut question = Question::new(AnswerKind::Text)
            .with_text("Color?")
            .with_choice("red", "r")
            .with_choice("green", "g");

        let mut engine = engine(&["1"]);
        engine.resolve(&mut question).unwrap();

        assert_eq!(
            engine.output(),
            "Color? \n\t1) red \n\t2) green \n? Answer "
        );
        assert_eq!(question.answer().unwrap().selection(), Some(1));
    }

    #[test]
    fn selection_marker_can_be_disabled() {
        let mut question = Question::new(AnswerKind::Text).with_choice("only", "x");

        let mut engine =
            engine(&["1"]).with_config(EngineConfig::new().without_selection_marker());
        engine.resolve(&mut question).unwrap();
        assert_eq!(engine.output(), "\n\t1) only \n");
    }

    #[test]
    fn action_failure_is_printed_and_retried() {
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let mut question = Question::new(AnswerKind::I32)
            .with_text("Even?")
            .on_answer(move |ctx| {
                seen.set(seen.get() + 1);
                match ctx.value().and_then(|v| v.as_i64()) {
                    Some(n) if n % 2 == 0 => Ok(()),
                    _ => anyhow::bail!("odd"),
                }
            });

        let mut engine = engine(&["3", "4"]);
        engine.resolve(&mut question).unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(engine.output(), "Even? odd Even? ");
        assert_eq!(question.value(), Some(&Value::I32(4)));
    }

    #[test]
    fn attempts_can_be_bounded() {
        let mut question = Question::new(AnswerKind::U8);

        let mut engine =
            engine(&["x", "y", "z", "1"]).with_config(EngineConfig::new().with_max_attempts(3));
        let err = engine.resolve(&mut question).unwrap_err();

        assert!(matches!(
            err,
            ResolveError::AttemptsExhausted {
                attempts: 3,
                last: AttemptError::Coercion(_),
            }
        ));
        assert_eq!(engine.input_mut().remaining(), 1);
    }

    #[test]
    fn ancestor_inheritance_uses_parent_text() {
        let mut question = Question::new(AnswerKind::Bool)
            .with_text("Enable TLS?")
            .with_child(Question::new(AnswerKind::Text).with_child(Question::new(AnswerKind::Text)));
        question.set_inherited(Some("Server".to_string()));

        let mut engine = engine(&["y", "cert.pem", "key.pem"])
            .with_config(EngineConfig::new().with_inheritance(Inheritance::Ancestor(1)));
        engine.resolve(&mut question).unwrap();

        let child = &question.children()[0];
        assert_eq!(child.inherited(), Some("Enable TLS?"));
        // The child has no text of its own, so its display text is the inherited one.
        assert_eq!(child.children()[0].inherited(), Some("Enable TLS?"));
    }

    #[test]
    fn ancestor_inheritance_beyond_root_uses_top_link() {
        let mut question = Question::new(AnswerKind::Bool)
            .with_text("Enable TLS?")
            .with_child(Question::new(AnswerKind::Text));
        question.set_inherited(Some("Server".to_string()));

        let mut engine = engine(&["y", "cert.pem"])
            .with_config(EngineConfig::new().with_inheritance(Inheritance::Ancestor(5)));
        engine.resolve(&mut question).unwrap();

        assert_eq!(question.children()[0].inherited(), Some("Server"));
    }

    #[test]
    fn ancestor_zero_behaves_like_one() {
        let tree = || {
            let mut question = Question::new(AnswerKind::Bool)
                .with_text("Enable TLS?")
                .with_child(Question::new(AnswerKind::Text));
            question.set_inherited(Some("Server".to_string()));
            question
        };

        let mut transcripts = Vec::new();
        for levels in [0, 1] {
            let mut question = tree();
            let mut engine = engine(&["y", "cert.pem"])
                .with_config(EngineConfig::new().with_inheritance(Inheritance::Ancestor(levels)));
            engine.resolve(&mut question).unwrap();

            assert_eq!(question.children()[0].inherited(), Some("Enable TLS?"));
            transcripts.push(engine.into_parts().1);
        }
        assert_eq!(transcripts[0], transcripts[1]);
        assert_eq!(transcripts[0], "Enable TLS? Enable TLS? ");
    }

    #[test]
    fn empty_error_message_is_skipped() {
        let mut question = Question::new(AnswerKind::U8)
            .with_text("N?")
            .with_error_message("");

        let mut engine = engine(&["x", "1"]);
        engine.resolve(&mut question).unwrap();
        assert_eq!(engine.output(), "N? N? ");
    }

    #[test]
    fn rejected_action_leaves_no_answer() {
        let mut question = Question::new(AnswerKind::U8)
            .on_answer(|_| anyhow::bail!("never good enough"));

        let mut engine =
            engine(&["3", "x"]).with_config(EngineConfig::new().with_max_attempts(2));
        let err = engine.resolve(&mut question).unwrap_err();

        assert!(matches!(
            err,
            ResolveError::AttemptsExhausted { attempts: 2, .. }
        ));
        assert!(question.answer().is_none());
    }

    #[test]
    fn rejected_action_then_end_of_input_leaves_no_answer() {
        let mut question = Question::new(AnswerKind::U8)
            .on_answer(|_| anyhow::bail!("never good enough"));

        let err = engine(&["3"]).resolve(&mut question).unwrap_err();
        assert!(err.is_end_of_input());
        assert!(question.answer().is_none());
    }
}
