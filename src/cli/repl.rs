// Interactive read-answer-print loop

use anyhow::Result;
use crossterm::style::Stylize;
use std::io::Write;

use crate::answer::AnswerService;
use crate::config::constants::ASSISTANT_LABEL;

use super::commands::Command;
use super::input::{LineReader, ReadOutcome};

pub const BANNER: &str = "Work Item Analyzer Bot (type 'exit' to quit)";
pub const USER_PROMPT: &str = "You: ";

pub struct Repl<R, W> {
    service: AnswerService,
    reader: R,
    out: W,
    colors: bool,
}

impl<R: LineReader, W: Write> Repl<R, W> {
    pub fn new(service: AnswerService, reader: R, out: W) -> Self {
        Self {
            service,
            reader,
            out,
            colors: false,
        }
    }

    /// Enable ANSI colors (only sensible when writing to a terminal)
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Run until `exit`/`quit`, Ctrl-C or end of input.
    ///
    /// Answer failures are printed inline and never end the loop; only a
    /// failure to read input or write output is returned.
    pub async fn run(&mut self) -> Result<()> {
        if let Err(e) = self.service.store().ensure_schema() {
            tracing::warn!("Could not prepare data files: {:#}", e);
        }

        let banner = if self.colors {
            BANNER.cyan().to_string()
        } else {
            BANNER.to_string()
        };
        writeln!(self.out, "{}", banner)?;

        let prompt = if self.colors {
            USER_PROMPT.yellow().to_string()
        } else {
            USER_PROMPT.to_string()
        };

        loop {
            self.out.flush()?;

            let line = match self.reader.read_line(&prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted | ReadOutcome::Eof => {
                    writeln!(self.out)?;
                    break;
                }
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            if let Some(Command::Quit) = Command::parse(input) {
                tracing::debug!("Quit requested");
                break;
            }

            let answer = match self.service.answer(input).await {
                Ok(answer) => answer,
                Err(e) => {
                    tracing::warn!("Answer failed: {:#}", e);
                    format!("Error: {:#}", e)
                }
            };

            self.print_answer(&answer)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn print_answer(&mut self, answer: &str) -> Result<()> {
        if self.colors {
            writeln!(
                self.out,
                "{}: {}",
                ASSISTANT_LABEL.green().bold(),
                answer.bold()
            )?;
        } else {
            writeln!(self.out, "{}: {}", ASSISTANT_LABEL, answer)?;
        }
        Ok(())
    }

    /// Give back the output sink (used to inspect captured output)
    pub fn into_output(self) -> W {
        self.out
    }
}
