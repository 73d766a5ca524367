//! Console input port and reporter

use robonav_core::{RobonavError, Reporter, Result, Severity};
use robonav_setup::InputPort;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1bc";

/// ANSI colour for a severity
pub fn colour(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Success => "\x1b[32m",
        Severity::Default => "\x1b[37m",
        Severity::Message => "\x1b[36m",
    }
}

/// Reads operator input from stdin, one line per prompt
pub struct ConsoleInput {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleInput {
    /// Attach to the process stdin
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for ConsoleInput {
    async fn request_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(format!("\n{}", prompt).as_bytes()).await?;
        stdout.flush().await?;

        match self.lines.next_line().await? {
            Some(line) => Ok(line.trim_end_matches('\r').to_string()),
            None => Err(RobonavError::InputClosed),
        }
    }
}

/// Writes reported messages to stdout, coloured by severity
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    colors: bool,
    clear_screen: bool,
}

impl ConsoleReporter {
    /// Create a reporter
    pub fn new(colors: bool, clear_screen: bool) -> Self {
        Self { colors, clear_screen }
    }

    /// A message as it appears on the console, without the line break
    pub fn format_line(&self, message: &str, severity: Severity) -> String {
        if self.colors {
            format!("{}{}{}", colour(severity), message, RESET)
        } else {
            message.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, messages: &[String], severity: Severity) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out);
        for message in messages {
            let _ = writeln!(out, "{}", self.format_line(message, severity));
        }
        let _ = out.flush();
    }

    fn clear_screen(&self) {
        if self.clear_screen {
            let mut out = std::io::stdout().lock();
            let _ = write!(out, "{}", CLEAR);
            let _ = out.flush();
        }
    }
}
