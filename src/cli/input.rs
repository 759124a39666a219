// Line input for the shell

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::io::BufRead;

/// What a single prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or closed stdin
    Eof,
}

/// Source of user input lines
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Interactive reader backed by rustyline (line editing, in-session history)
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialise line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}

/// Plain buffered reader for piped input (no line editing, no echo of the prompt)
pub struct BufferedReader<B> {
    input: B,
}

impl<B: BufRead> BufferedReader<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

impl<B: BufRead> LineReader for BufferedReader<B> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(ReadOutcome::Eof);
        }
        Ok(ReadOutcome::Line(line))
    }
}

/// Replays a fixed list of lines, then reports end of input
pub struct ScriptedReader {
    lines: VecDeque<ReadOutcome>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| ReadOutcome::Line(line.into()))
                .collect(),
        }
    }

    /// Queue an interrupt after the scripted lines
    pub fn then_interrupt(mut self) -> Self {
        self.lines.push_back(ReadOutcome::Interrupted);
        self
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome> {
        Ok(self.lines.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_buffered_reader_yields_lines_then_eof() {
        let mut reader = BufferedReader::new(Cursor::new("hi\nquit\n"));

        assert_eq!(
            reader.read_line("You: ").unwrap(),
            ReadOutcome::Line("hi\n".to_string())
        );
        assert_eq!(
            reader.read_line("You: ").unwrap(),
            ReadOutcome::Line("quit\n".to_string())
        );
        assert_eq!(reader.read_line("You: ").unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn test_scripted_reader_interrupt() {
        let mut reader = ScriptedReader::new(["hello"]).then_interrupt();

        assert_eq!(
            reader.read_line("").unwrap(),
            ReadOutcome::Line("hello".to_string())
        );
        assert_eq!(reader.read_line("").unwrap(), ReadOutcome::Interrupted);
        assert_eq!(reader.read_line("").unwrap(), ReadOutcome::Eof);
    }
}
