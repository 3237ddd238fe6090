//! Interactive input/output boundary
//!
//! The session only talks to the annotator through [`Prompter`], so the
//! phase machine runs the same against a terminal or a script.

use crate::error::{SessionError, SessionResult};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Line-based conversation with the annotator
pub trait Prompter {
    /// Show `prompt` and read one line (without the line terminator)
    ///
    /// # Errors
    /// [`SessionError::InputClosed`] when no more input will arrive.
    fn ask(&mut self, prompt: &str) -> SessionResult<String>;

    /// Show informational text
    fn show(&mut self, text: &str) -> SessionResult<()>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        (**self).ask(prompt)
    }

    fn show(&mut self, text: &str) -> SessionResult<()> {
        (**self).show(text)
    }
}

/// Prompter over a reader/writer pair (stdin/stdout in the binary)
#[derive(Debug)]
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    #[inline]
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer
    #[inline]
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD; never an error.
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn show(&mut self, text: &str) -> SessionResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// Prompter fed from a fixed list of responses
///
/// Records every prompt and shown line so tests can assert on the
/// conversation. Running out of responses behaves like a closed terminal.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    responses: VecDeque<String>,
    prompts: Vec<String>,
    shown: Vec<String>,
}

impl ScriptedPrompter {
    /// Create from responses in the order they will be given
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            shown: Vec::new(),
        }
    }

    /// Prompts asked so far
    #[inline]
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Text shown so far
    #[inline]
    #[must_use]
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Responses not yet consumed
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        self.prompts.push(prompt.to_string());
        self.responses.pop_front().ok_or(SessionError::InputClosed)
    }

    fn show(&mut self, text: &str) -> SessionResult<()> {
        self.shown.push(text.to_string());
        Ok(())
    }
}
