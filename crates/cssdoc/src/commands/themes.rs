//! `cssdoc themes` command implementation.

use console::Term;
use cssdoc_config::DEFAULT_HIGHLIGHT_THEME;
use cssdoc_site::assets;

/// Print one theme name per line on stdout, marking the default.
pub(crate) fn execute() {
    let term = Term::stdout();
    for name in assets::themes() {
        let line = if name == DEFAULT_HIGHLIGHT_THEME {
            format!("{name} (default)")
        } else {
            name
        };
        let _ = term.write_line(&line);
    }
}
