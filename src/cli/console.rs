//! Line-oriented console I/O
//!
//! Wraps an input and an output stream so the interactive session can run
//! against the real terminal or against scripted input in tests. End of
//! input is reported as `None` rather than an error.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crate::crypto::SecureString;
use crate::error::{PhonebookError, PhonebookResult};

/// Console used by the interactive session
pub struct Console<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process stdin/stdout
    ///
    /// Passwords are read without echo only when stdin is a terminal.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console over arbitrary streams; secrets are read as plain lines
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Write a line
    pub fn say(&mut self, line: impl AsRef<str>) -> PhonebookResult<()> {
        writeln!(self.output, "{}", line.as_ref())
            .map_err(|e| PhonebookError::Io(format!("Failed to write output: {}", e)))
    }

    /// Show a prompt and read one line without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn prompt(&mut self, text: &str) -> PhonebookResult<Option<String>> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| PhonebookError::Io(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PhonebookError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read a password, hidden when attached to a terminal
    pub fn read_secret(&mut self, text: &str) -> PhonebookResult<Option<SecureString>> {
        if !self.hide_secrets {
            return Ok(self.prompt(text)?.map(SecureString::from));
        }

        self.output
            .flush()
            .map_err(|e| PhonebookError::Io(format!("Failed to write prompt: {}", e)))?;

        match rpassword::prompt_password(text) {
            Ok(password) => Ok(Some(SecureString::from(password))),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(PhonebookError::Io(format!(
                "Failed to read password: {}",
                e
            ))),
        }
    }

    /// Consume the console, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
