//! Where lines come from and where prompts go.
//!
//! The engine reads one line per attempt through [`Input`] and writes prompt
//! text through [`Output`]. Neither does any formatting.

use std::io::{self, BufRead, Write};

/// A source of lines.
pub trait Input {
    /// Read one line, without its line terminator.
    ///
    /// The end of the stream is an `io::ErrorKind::UnexpectedEof` error.
    fn read_line(&mut self) -> io::Result<String>;
}

/// A sink for prompt text.
///
/// Writing is infallible as far as the engine is concerned.
pub trait Output {
    fn write(&mut self, text: &str);
}

impl<T: Input + ?Sized> Input for &mut T {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}

impl<T: Output + ?Sized> Output for &mut T {
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}

/// Captures everything written, e.g. to assert on a transcript.
impl Output for String {
    fn write(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Reads lines from any buffered reader.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Input for LineReader<R> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            ));
        }
        strip_terminator(&mut line);
        Ok(line)
    }
}

/// Reads lines from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl Input for StdinInput {
    fn read_line(&mut self) -> io::Result<String> {
        LineReader::new(io::stdin().lock()).read_line()
    }
}

/// Writes prompt text to any writer, flushing after every write.
///
/// Failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct WriteOutput<W> {
    writer: W,
}

impl<W: Write> WriteOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteOutput<io::Stdout> {
    /// Write to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output for WriteOutput<W> {
    fn write(&mut self, text: &str) {
        // Prompts don't end in a newline, so flush to make them visible before reading.
        if let Err(err) = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            tracing::warn!(error = %err, "failed to write prompt text");
        }
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
