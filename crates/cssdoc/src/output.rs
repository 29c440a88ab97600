//! Styled terminal messages on stderr.

use std::fmt::Display;

use console::{Style, Term};

/// Writes build progress and results for the user.
pub(crate) struct Output {
    term: Term,
    label: Style,
    ok: Style,
    warn: Style,
    fail: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().cyan().bold(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red().bold(),
        }
    }

    /// `Label: value`, with the label highlighted.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        self.line(&format!("{} {value}", self.label.apply_to(format!("{label}:"))));
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.ok.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warn.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.fail.apply_to(msg).to_string());
    }

    // Terminal write failures are not worth aborting a build over.
    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}
