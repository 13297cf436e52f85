//! Turning a raw line of input into a typed answer.

use std::str::FromStr;
use std::time::Duration;

use quest_types::{Answer, AnswerKind, CoercionError, Question, Value};

/// How a line of input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The line is the 1-based number of an alternative.
    Choice,

    /// The line is parsed according to the question's `AnswerKind`.
    Typed,
}

impl Mode {
    /// The mode a question starts in.
    pub fn of(question: &Question) -> Self {
        if question.is_choice() {
            Self::Choice
        } else {
            Self::Typed
        }
    }
}

/// Coerce `raw` into an answer for `question`, in the mode the question implies.
pub fn coerce(question: &Question, raw: &str) -> Result<Answer, CoercionError> {
    coerce_in(question, raw, Mode::of(question))
}

/// Coerce `raw` into an answer for `question` in the given mode.
///
/// An empty line on a question with a default yields the default without
/// parsing anything. Outside choice mode the default must be a value of the
/// question's kind.
pub fn coerce_in(question: &Question, raw: &str, mode: Mode) -> Result<Answer, CoercionError> {
    if raw.is_empty()
        && let Some(default) = question.default_answer()
    {
        if mode == Mode::Typed && !default.value.matches(question.kind()) {
            return Err(CoercionError::MismatchedDefault {
                expected: question.kind(),
                found: default.value.kind(),
            });
        }
        return Ok(Answer::new(default.value.clone(), raw));
    }

    match mode {
        Mode::Choice => select(question, raw),
        Mode::Typed => parse(question.kind(), raw).map(|value| Answer::new(value, raw)),
    }
}

fn select(question: &Question, raw: &str) -> Result<Answer, CoercionError> {
    let invalid = || CoercionError::InvalidSelection {
        input: raw.to_string(),
        choices: question.choices().len(),
    };

    let index = raw.parse::<i64>().map_err(|_| invalid())?;
    let index = usize::try_from(index).map_err(|_| invalid())?;
    let choice = question.choice(index).ok_or_else(invalid)?;

    Ok(Answer::selected(choice.value.clone(), raw, index))
}

/// Parse `raw` as a value of `kind`.
fn parse(kind: AnswerKind, raw: &str) -> Result<Value, CoercionError> {
    let value = match kind {
        AnswerKind::I8 => Value::I8(number(kind, raw)?),
        AnswerKind::I16 => Value::I16(number(kind, raw)?),
        AnswerKind::I32 => Value::I32(number(kind, raw)?),
        AnswerKind::I64 => Value::I64(number(kind, raw)?),
        AnswerKind::U8 => Value::U8(number(kind, raw)?),
        AnswerKind::U16 => Value::U16(number(kind, raw)?),
        AnswerKind::U32 => Value::U32(number(kind, raw)?),
        AnswerKind::U64 => Value::U64(number(kind, raw)?),
        AnswerKind::F32 => Value::F32(float(kind, raw)?),
        AnswerKind::F64 => Value::F64(float(kind, raw)?),
        AnswerKind::Bool => Value::Bool(boolean(raw)?),
        AnswerKind::Duration => Value::Duration(Duration::from_secs(number(kind, raw)?)),
        AnswerKind::Text => Value::Text(raw.to_string()),
        AnswerKind::Normalized => Value::Text(raw.trim().to_lowercase()),
    };
    Ok(value)
}

fn number<T: FromStr>(kind: AnswerKind, raw: &str) -> Result<T, CoercionError> {
    raw.parse().map_err(|_| CoercionError::InvalidNumber {
        input: raw.to_string(),
        kind,
    })
}

/// Floats must come out finite: a literal too large for the width is rejected
/// like an overflowing integer.
fn float<T: FromStr + Into<f64> + Copy>(kind: AnswerKind, raw: &str) -> Result<T, CoercionError> {
    let value: T = number(kind, raw)?;
    if value.into().is_finite() {
        Ok(value)
    } else {
        Err(CoercionError::InvalidNumber {
            input: raw.to_string(),
            kind,
        })
    }
}

fn boolean(raw: &str) -> Result<bool, CoercionError> {
    match raw {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoercionError::InvalidBoolean(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_types::Choice;

    fn colors() -> Question {
        Question::choose([
            Choice::labelled("red"),
            Choice::labelled("green"),
            Choice::labelled("blue"),
        ])
    }

    #[test]
    fn integers_keep_their_width() {
        let cases = [
            (AnswerKind::I8, "-128", Value::I8(-128)),
            (AnswerKind::I16, "300", Value::I16(300)),
            (AnswerKind::I32, "7", Value::I32(7)),
            (AnswerKind::I64, "-9000000000", Value::I64(-9_000_000_000)),
            (AnswerKind::U8, "255", Value::U8(255)),
            (AnswerKind::U16, "8080", Value::U16(8080)),
            (AnswerKind::U32, "4000000000", Value::U32(4_000_000_000)),
            (AnswerKind::U64, "18446744073709551615", Value::U64(u64::MAX)),
        ];

        for (kind, raw, expected) in cases {
            let value = parse(kind, raw).unwrap();
            assert_eq!(value, expected);
            assert_eq!(value.kind(), kind);
        }
    }

    #[test]
    fn integer_overflow_is_invalid_number() {
        assert_eq!(
            parse(AnswerKind::I8, "128"),
            Err(CoercionError::InvalidNumber {
                input: "128".to_string(),
                kind: AnswerKind::I8,
            })
        );
        assert!(matches!(
            parse(AnswerKind::U8, "-1"),
            Err(CoercionError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse(AnswerKind::I32, "abc"),
            Err(CoercionError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn floats() {
        assert_eq!(parse(AnswerKind::F64, "2.5").unwrap(), Value::F64(2.5));
        assert_eq!(parse(AnswerKind::F32, "0.25").unwrap(), Value::F32(0.25));
        assert!(matches!(
            parse(AnswerKind::F64, "two"),
            Err(CoercionError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn f32_overflow_is_invalid_number() {
        assert_eq!(
            parse(AnswerKind::F32, "1e39"),
            Err(CoercionError::InvalidNumber {
                input: "1e39".to_string(),
                kind: AnswerKind::F32,
            })
        );
        assert_eq!(parse(AnswerKind::F64, "1e39").unwrap(), Value::F64(1e39));
        assert_eq!(parse(AnswerKind::F32, "3.4e38").unwrap(), Value::F32(3.4e38));
        assert!(parse(AnswerKind::F64, "inf").is_err());
        assert!(parse(AnswerKind::F64, "NaN").is_err());
    }

    #[test]
    fn booleans() {
        for raw in ["y", "yes", "1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse(AnswerKind::Bool, raw).unwrap(), Value::Bool(true), "{raw}");
        }
        for raw in ["n", "no", "0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse(AnswerKind::Bool, raw).unwrap(), Value::Bool(false), "{raw}");
        }
        assert_eq!(
            parse(AnswerKind::Bool, "maybe"),
            Err(CoercionError::InvalidBoolean("maybe".to_string()))
        );
        // Every spelling is case-sensitive.
        for raw in ["Yes", "YES", "N", "tRUE", "fAlse", "2", ""] {
            assert!(parse(AnswerKind::Bool, raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn durations_are_seconds() {
        assert_eq!(
            parse(AnswerKind::Duration, "5").unwrap(),
            Value::Duration(Duration::from_secs(5))
        );
        assert!(matches!(
            parse(AnswerKind::Duration, "abc"),
            Err(CoercionError::InvalidNumber {
                kind: AnswerKind::Duration,
                ..
            })
        ));
        assert!(parse(AnswerKind::Duration, "-5").is_err());
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(
            parse(AnswerKind::Text, "  Mixed Case ").unwrap(),
            Value::Text("  Mixed Case ".to_string())
        );
    }

    #[test]
    fn normalized_is_trimmed_and_lowercased() {
        assert_eq!(
            parse(AnswerKind::Normalized, "  Mixed Case ").unwrap(),
            Value::Text("mixed case".to_string())
        );
    }

    #[test]
    fn empty_line_takes_default_without_parsing() {
        let question = Question::new(AnswerKind::I32).with_default(42i32);
        let answer = coerce(&question, "").unwrap();
        assert_eq!(answer.value(), &Value::I32(42));
        assert!(answer.is_default());
    }

    #[test]
    fn empty_line_rejects_default_of_another_kind() {
        let question = Question::new(AnswerKind::I32).with_default(42i64);
        assert_eq!(
            coerce(&question, ""),
            Err(CoercionError::MismatchedDefault {
                expected: AnswerKind::I32,
                found: AnswerKind::I64,
            })
        );

        let question = Question::new(AnswerKind::Normalized).with_default("eu");
        assert_eq!(coerce(&question, "").unwrap().value(), &Value::from("eu"));
    }

    #[test]
    fn empty_line_without_default_is_parsed() {
        let question = Question::new(AnswerKind::I32);
        assert!(matches!(
            coerce(&question, ""),
            Err(CoercionError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn choice_maps_index_to_value() {
        let answer = coerce(&colors(), "2").unwrap();
        assert_eq!(answer.value(), &Value::Text("green".to_string()));
        assert_eq!(answer.selection(), Some(2));
        assert_eq!(answer.input(), "2");
    }

    #[test]
    fn choice_accepts_leading_plus() {
        let answer = coerce(&colors(), "+3").unwrap();
        assert_eq!(answer.value(), &Value::Text("blue".to_string()));
        assert_eq!(answer.selection(), Some(3));
        assert_eq!(answer.input(), "+3");
    }

    #[test]
    fn choice_default_skips_kind_check() {
        let question = Question::new(AnswerKind::I32)
            .with_choice("small", "s")
            .with_default("s");
        assert_eq!(coerce(&question, "").unwrap().value(), &Value::from("s"));
    }

    #[test]
    fn choice_out_of_range() {
        for raw in ["0", "4", "-1", "two", ""] {
            assert_eq!(
                coerce(&colors(), raw),
                Err(CoercionError::InvalidSelection {
                    input: raw.to_string(),
                    choices: 3,
                }),
                "{raw}"
            );
        }
    }

    #[test]
    fn choice_ignores_kind() {
        let question = Question::new(AnswerKind::I32)
            .with_choice("small", "s")
            .with_choice("large", "l");
        let answer = coerce(&question, "2").unwrap();
        assert_eq!(answer.value(), &Value::Text("l".to_string()));
    }

    #[test]
    fn explicit_mode_overrides_question() {
        let question = Question::new(AnswerKind::U8);
        assert!(matches!(
            coerce_in(&question, "1", Mode::Choice),
            Err(CoercionError::InvalidSelection { choices: 0, .. })
        ));
    }
}
