//! Line-oriented terminal I/O for the role sessions
//!
//! Wraps any reader/writer pair so sessions can be driven by stdin/stdout in
//! the binary and by in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};

/// Prompt-and-answer console over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text and flush it so prompts appear before input is read
    pub fn print(&mut self, text: &str) -> LedgerResult<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| LedgerError::Io(format!("Failed to write to terminal: {}", e)))
    }

    /// Show `prompt` and read one line of input
    ///
    /// Returns `None` at end of input. The trailing line break is removed but
    /// other whitespace is kept, since names may legitimately contain it.
    pub fn prompt(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        self.print(prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| LedgerError::Io(format!("Failed to read from terminal: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Consume the console and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_lines() {
        let mut console = Console::new(Cursor::new("  Milk  \r\n2.50\n"), Vec::new());

        assert_eq!(console.prompt("Name: ").unwrap().as_deref(), Some("  Milk  "));
        assert_eq!(console.prompt("Price: ").unwrap().as_deref(), Some("2.50"));
        assert_eq!(console.prompt("More: ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Name: Price: More: ");
    }
}
