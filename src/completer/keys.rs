use crate::history::HistoryDirection;
use crate::terminal::Terminal;
use rustyline::history::History as EditorHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode, KeyEvent,
    Modifiers, Movement, RepeatCount,
};
use std::sync::{Arc, Mutex, PoisonError};

/// Routes an arrow key to the terminal's own history instead of the editor's.
pub struct HistoryKeyHandler {
    terminal: Arc<Mutex<Terminal>>,
    direction: HistoryDirection,
}

impl HistoryKeyHandler {
    pub fn new(terminal: Arc<Mutex<Terminal>>, direction: HistoryDirection) -> Self {
        Self {
            terminal,
            direction,
        }
    }
}

impl ConditionalEventHandler for HistoryKeyHandler {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext,
    ) -> Option<Cmd> {
        let mut terminal = self.terminal.lock().unwrap_or_else(PoisonError::into_inner);
        let text = terminal.navigate_history(self.direction, ctx.line());
        Some(Cmd::Replace(Movement::WholeLine, Some(text)))
    }
}

pub fn bind_history_keys<H, I>(editor: &mut Editor<H, I>, terminal: &Arc<Mutex<Terminal>>)
where
    H: rustyline::Helper,
    I: EditorHistory,
{
    for (code, direction) in [
        (KeyCode::Up, HistoryDirection::Up),
        (KeyCode::Down, HistoryDirection::Down),
    ] {
        let handler = HistoryKeyHandler::new(Arc::clone(terminal), direction);
        editor.bind_sequence(
            KeyEvent(code, Modifiers::NONE),
            EventHandler::Conditional(Box::new(handler)),
        );
    }
}
