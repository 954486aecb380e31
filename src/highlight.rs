use yansi::Paint;

/// Minimal text-emphasis capability.
///
/// Color is a presentation concern; the session loop and presenter only
/// ever ask for one of these three styles, so tests can run against
/// [`PlainHighlight`] and assert on unstyled text.
pub trait Highlight {
    /// Emphasis for the issue number in the header.
    fn accent(&self, text: &str) -> String;
    /// De-emphasis for issue bodies and comment lines.
    fn dim(&self, text: &str) -> String;
    /// Emphasis for error notices.
    fn error(&self, text: &str) -> String;
}

/// ANSI terminal rendering.
pub struct AnsiHighlight;

impl Highlight for AnsiHighlight {
    fn accent(&self, text: &str) -> String {
        Paint::blue(text).to_string()
    }

    fn dim(&self, text: &str) -> String {
        Paint::new(text).dimmed().to_string()
    }

    fn error(&self, text: &str) -> String {
        Paint::red(text).to_string()
    }
}

/// Pass-through rendering for tests and dumb terminals.
pub struct PlainHighlight;

impl Highlight for PlainHighlight {
    fn accent(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }
}
