pub mod commands;
pub mod completer;
pub mod github;
pub mod history;
pub mod output;
pub mod preview;
pub mod terminal;
pub mod theme;

use output::OutputStreams;
use terminal::Terminal;
use theme::{PreferenceStore, Theme, THEME_ENV, preferred_theme};
use tracing::{info, warn};

/// Theme to start with: saved preference, then `PORTFOLIO_THEME`, then dark.
pub fn startup_theme(store: Option<&PreferenceStore>) -> Theme {
    let saved = store.and_then(PreferenceStore::saved_theme);
    let env_hint = std::env::var(THEME_ENV).ok();
    preferred_theme(saved, env_hint.as_deref())
}

/// Writes the theme back to the store whenever it changes.
pub struct ThemePersister {
    store: Option<PreferenceStore>,
    last: Theme,
}

impl ThemePersister {
    pub fn new(store: Option<PreferenceStore>, current: Theme) -> Self {
        Self {
            store,
            last: current,
        }
    }

    pub fn sync(&mut self, theme: Theme) {
        if theme == self.last {
            return;
        }
        self.last = theme;
        let Some(store) = &self.store else {
            return;
        };
        match store.save_theme(theme) {
            Ok(()) => info!(%theme, "theme preference saved"),
            Err(e) => warn!("could not save theme preference: {e}"),
        }
    }
}

/// Submits one line and renders whatever it added to the log.
pub fn submit_and_render(terminal: &mut Terminal, line: &str, streams: &mut OutputStreams) {
    let before = terminal.scrollback().len();
    terminal.submit(line);
    streams.render(terminal.scrollback().since(before));
}
