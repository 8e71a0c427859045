//! Session transcript.
//!
//! Everything the application prints goes through a [`Transcript`], which
//! keeps the lines for the on-screen console pane and for the `logs.txt`
//! written when a run is archived. User input is recorded as well.

/// Kind of a transcript line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Ordinary output.
    Plain,
    /// Section header.
    Header,
    /// Successful action.
    Success,
    /// Failed action.
    Error,
    /// Echo of user input.
    Input,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Styling hint.
    pub kind: LineKind,
    /// Text without trailing newline.
    pub text: String,
}

/// Append-only console log.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    echo: bool,
}

impl Transcript {
    /// Create an empty transcript that only records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript that also prints every line to stdout.
    pub fn echoing() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    fn push(&mut self, kind: LineKind, text: String) {
        if self.echo {
            println!("{}", text);
        }
        tracing::debug!(target: "transcript", "{}", text);
        self.lines.push(TranscriptLine { kind, text });
    }

    /// Print a line, splitting embedded newlines.
    pub fn println(&mut self, message: impl AsRef<str>) {
        for line in message.as_ref().split('\n') {
            self.push(LineKind::Plain, line.to_string());
        }
    }

    /// Application banner.
    pub fn welcome(&mut self) {
        self.println("=== TSP Solver Application ===");
    }

    /// Section header preceded by a blank line.
    pub fn header(&mut self, title: &str) {
        self.push(LineKind::Plain, String::new());
        self.push(LineKind::Header, format!("--- {} ---", title));
    }

    /// Success message.
    pub fn success(&mut self, message: &str) {
        self.push(LineKind::Success, format!("[SUCCESS]: {}", message));
    }

    /// Error message.
    pub fn error(&mut self, message: &str) {
        self.push(LineKind::Error, format!("[ERROR]: {}", message));
    }

    /// Record what the user entered.
    pub fn input(&mut self, value: &str) {
        self.push(LineKind::Input, format!("[USER INPUT]: {}", value));
    }

    /// Preview block for freshly loaded points.
    pub fn points_preview(&mut self, preview: &[String]) {
        self.println("Points Preview:");
        for line in preview {
            self.println(line);
        }
    }

    /// All lines recorded so far.
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Whole transcript as text, one line per entry.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_tagged_messages() {
        let mut transcript = Transcript::new();
        transcript.welcome();
        transcript.header("Result");
        transcript.success("Loaded 3 points.");
        transcript.error("File is empty.");
        transcript.input("2");

        assert_eq!(
            transcript.to_text(),
            "=== TSP Solver Application ===\n\n--- Result ---\n[SUCCESS]: Loaded 3 points.\n[ERROR]: File is empty.\n[USER INPUT]: 2\n"
        );
        let kinds: Vec<_> = transcript.lines().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [
                LineKind::Plain,
                LineKind::Plain,
                LineKind::Header,
                LineKind::Success,
                LineKind::Error,
                LineKind::Input
            ]
        );
    }

    #[test]
    fn splits_multiline_output() {
        let mut transcript = Transcript::new();
        transcript.println("a\nb");
        assert_eq!(transcript.lines().len(), 2);
    }

    #[test]
    fn preview_lists_points_under_heading() {
        let mut transcript = Transcript::new();
        transcript.points_preview(&["(1, 2)".to_string(), "... 3 more".to_string()]);
        assert_eq!(transcript.to_text(), "Points Preview:\n(1, 2)\n... 3 more\n");
    }
}
