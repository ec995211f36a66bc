//! Console operator channel for the monitor's pause/resume prompt.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use pidigits_core::monitor::OperatorChannel;

/// Operator channel over a line reader and a prompt writer.
pub struct ConsoleOperator<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    /// Build an operator channel from any reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl ConsoleOperator<io::StdinLock<'static>, io::Stderr> {
    /// Operator reading stdin and prompting on stderr, so stdout carries only results.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

/// Whether stdin is attached to an interactive terminal.
#[must_use]
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

impl<R: BufRead, W: Write> OperatorChannel for ConsoleOperator<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Operator input reached end of file");
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_lines_until_eof() {
        let mut op = ConsoleOperator::new(Cursor::new("\nresume\r\n"), Vec::new());
        assert_eq!(op.read_line().unwrap(), Some(String::new()));
        assert_eq!(op.read_line().unwrap(), Some("resume".to_string()));
        assert_eq!(op.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_writes_message() {
        let mut op = ConsoleOperator::new(Cursor::new(""), Vec::new());
        op.prompt("Press ENTER to resume...").unwrap();
        assert_eq!(
            String::from_utf8(op.writer).unwrap(),
            "Press ENTER to resume...\n"
        );
    }

    #[test]
    fn terminal_check_does_not_panic() {
        let _ = stdin_is_terminal();
    }
}
