use std::time::Duration;

use anyhow::{Context as _, anyhow};
use quest::{AnswerKind, Interview, Question, Value};

const HOST: usize = 0;
const PORT: usize = 1;
const TIMEOUT: usize = 2;
const TLS: usize = 3;
const LOG_LEVEL: usize = 4;

/// Server setup wizard. The TLS follow-ups are only asked when TLS is enabled.
pub fn server_setup() -> Interview {
    Interview::new([
        Question::new(AnswerKind::Text)
            .with_text("Host:")
            .with_default_text("[localhost]", "localhost"),
        Question::new(AnswerKind::U16)
            .with_text("Port:")
            .with_default_text("[8080]", 8080u16)
            .with_error_message("Port must be a number between 1 and 65535.")
            .on_answer(|ctx| match ctx.value() {
                Some(Value::U16(0)) => Err(anyhow!("Port 0 is reserved.")),
                _ => Ok(()),
            }),
        Question::new(AnswerKind::Duration)
            .with_text("Request timeout")
            .with_options("(seconds)")
            .with_default_text("[30]", Duration::from_secs(30))
            .with_error_message("Enter a whole number of seconds."),
        Question::new(AnswerKind::Bool)
            .with_text("Enable TLS?")
            .with_options("(y/n)")
            .with_default_text("[n]", false)
            .with_error_message("Answer y or n.")
            .resolve_when(|ctx| ctx.value().and_then(Value::as_bool) == Some(true))
            .with_children([
                Question::new(AnswerKind::Text).with_text("Certificate path:"),
                Question::new(AnswerKind::Text).with_text("Private key path:"),
            ]),
        Question::new(AnswerKind::Normalized)
            .with_text("Log level:")
            .with_choice("Error", "error")
            .with_choice("Warn", "warn")
            .with_choice("Info", "info")
            .with_choice("Debug", "debug")
            .with_error_message("Pick one of the numbers above."),
    ])
    .with_prefix("[setup]")
    .with_prelude("Configure the server. Press enter to keep the value in brackets.")
    .with_epilogue("Setup complete.")
}

/// Certificate and key of a TLS-enabled server.
#[derive(Debug, Clone, PartialEq)]
pub struct TlsSettings {
    pub certificate: String,
    pub private_key: String,
}

/// Settings collected by [`server_setup`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub tls: Option<TlsSettings>,
    pub log_level: String,
}

impl ServerSettings {
    /// Read the settings back out of a completed interview.
    pub fn from_interview(interview: &Interview) -> anyhow::Result<Self> {
        let questions = interview.questions();

        let tls_question = questions.get(TLS);
        let tls = match answer(questions, TLS, "tls")?.as_bool() {
            Some(true) => Some(TlsSettings {
                certificate: text(tls_question.and_then(|q| q.child(0)), "certificate")?,
                private_key: text(tls_question.and_then(|q| q.child(1)), "private key")?,
            }),
            _ => None,
        };

        Ok(Self {
            host: text(questions.get(HOST), "host")?,
            port: match answer(questions, PORT, "port")? {
                Value::U16(port) => *port,
                other => anyhow::bail!("port has unexpected type {}", other.type_name()),
            },
            timeout: answer(questions, TIMEOUT, "timeout")?
                .as_duration()
                .context("timeout is not a duration")?,
            tls,
            log_level: text(questions.get(LOG_LEVEL), "log level")?,
        })
    }
}

fn answer<'a>(questions: &'a [Question], index: usize, name: &str) -> anyhow::Result<&'a Value> {
    questions
        .get(index)
        .and_then(Question::value)
        .with_context(|| format!("'{name}' was not answered"))
}

fn text(question: Option<&Question>, name: &str) -> anyhow::Result<String> {
    question
        .and_then(Question::value)
        .and_then(Value::as_str)
        .map(str::to_string)
        .with_context(|| format!("'{name}' was not answered with text"))
}
