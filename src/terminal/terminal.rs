use crate::commands::{self, CommandContext};
use crate::history::{History, HistoryDirection};
use crate::output::{EntryKind, Scrollback};
use crate::theme::ThemeCell;
use chrono::{DateTime, Local};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

const WELCOME: &[&str] = &[
    "🚀 Welcome to Jay's Portfolio Terminal!",
    "🔍 Type \"help\" to see available commands.",
    "💡 Try the new \"ascii\" command for some art!",
];

pub type Clock = fn() -> DateTime<Local>;

/// Line interpreter: command dispatch, scrollback and recall history.
pub struct Terminal {
    history: History,
    scrollback: Scrollback,
    theme: ThemeCell,
    rng: StdRng,
    clock: Clock,
}

impl Terminal {
    pub fn new(theme: ThemeCell) -> Self {
        Self {
            history: History::new(),
            scrollback: Scrollback::new(),
            theme,
            rng: StdRng::from_entropy(),
            clock: Local::now,
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn welcome(&mut self) {
        for line in WELCOME {
            self.scrollback.push(EntryKind::Output, *line);
        }
    }

    pub fn submit(&mut self, raw: &str) {
        let name = raw.trim().to_lowercase();
        if name.is_empty() {
            return;
        }

        self.history.add_history_item(raw);
        self.scrollback.echo(raw);

        match commands::lookup(&name) {
            Some(kind) => {
                debug!(command = kind.name(), "dispatch");
                let mut ctx = CommandContext {
                    theme: &self.theme,
                    scrollback: &mut self.scrollback,
                    rng: &mut self.rng,
                    now: (self.clock)(),
                };
                let lines = kind.run(&mut ctx);
                for line in lines {
                    self.scrollback.push(EntryKind::Output, line);
                }
            }
            None => {
                debug!(input = raw, "unknown command");
                self.scrollback.push(
                    EntryKind::Error,
                    format!("Command not found: {raw}. Type 'help' for available commands."),
                );
            }
        }
    }

    pub fn navigate_history(&mut self, direction: HistoryDirection, current: &str) -> String {
        self.history.navigate(direction, current)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn theme(&self) -> &ThemeCell {
        &self.theme
    }
}
