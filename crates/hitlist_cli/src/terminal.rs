//! Terminal implementations of the list screen's host seams.

use hitlist_core::{ListView, NamePrompt, PromptOutcome, PromptRequest, RowView};
use std::io::{self, BufRead, Write};

/// Writes the table to `out` and failures to stderr.
pub struct TerminalView<W> {
    title: &'static str,
    /// Suppresses table output, e.g. when printing JSON instead.
    quiet: bool,
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(title: &'static str, quiet: bool, out: W) -> Self {
        Self { title, quiet, out }
    }

    /// Failures are printed either way; this only gates the table.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    #[cfg(test)]
    pub fn out(&self) -> &W {
        &self.out
    }
}

impl<W: Write> ListView for TerminalView<W> {
    fn reload(&mut self, rows: &[RowView]) {
        if self.quiet {
            return;
        }
        let mut table = format!("{}\n", self.title);
        if rows.is_empty() {
            table.push_str("  (empty)\n");
        }
        for (index, row) in rows.iter().enumerate() {
            table.push_str(&format!("{:>3}. {}\n", index + 1, row.label));
        }
        // A closed stdout (e.g. `| head`) must not turn a saved name into a failure.
        let _ = self.out.write_all(table.as_bytes());
        let _ = self.out.flush();
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Reads one line from an input stream. End of input counts as Cancel.
///
/// A read failure also cancels the add, but is kept so the caller can
/// report it instead of treating it as a user choice.
pub struct LinePrompt<I, O> {
    input: I,
    output: O,
    read_error: Option<io::Error>,
}

impl<I: BufRead, O: Write> LinePrompt<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            read_error: None,
        }
    }

    /// Takes the error of the last failed read, if any.
    pub fn take_read_error(&mut self) -> Option<io::Error> {
        self.read_error.take()
    }
}

impl<I: BufRead, O: Write> NamePrompt for LinePrompt<I, O> {
    fn ask(&mut self, request: &PromptRequest) -> PromptOutcome {
        // Prompt text is best-effort; a closed output must not abort the add.
        let _ = write!(
            self.output,
            "{}\n{} ({}: enter, {}: Ctrl-D)\n> ",
            request.title, request.message, request.save_label, request.cancel_label
        );
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => PromptOutcome::Cancel,
            Err(err) => {
                let _ = writeln!(self.output, "\ncould not read name: {err}");
                self.read_error = Some(err);
                PromptOutcome::Cancel
            }
            Ok(_) => {
                let text = line.strip_suffix('\n').unwrap_or(&line);
                let text = text.strip_suffix('\r').unwrap_or(text);
                PromptOutcome::Save(text.to_string())
            }
        }
    }
}
