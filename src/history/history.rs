#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// Submitted lines, most recent first, plus the recall cursor.
///
/// A cursor of `None` means the user is composing a new line rather than
/// recalling an old one. When set, it always indexes a valid item.
#[derive(Debug, Default)]
pub struct History {
    items: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_history_item(&mut self, line: &str) {
        self.items.insert(0, line.to_string());
        self.cursor = None;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the text that should replace the input field.
    pub fn navigate(&mut self, direction: HistoryDirection, current: &str) -> String {
        match direction {
            HistoryDirection::Up => {
                let next = self.cursor.map_or(0, |c| c + 1);
                if next < self.items.len() {
                    self.cursor = Some(next);
                    self.items[next].clone()
                } else {
                    current.to_string()
                }
            }
            // Down from the newest item clears the input instead of clamping.
            HistoryDirection::Down => match self.cursor {
                Some(c) if c > 0 => {
                    self.cursor = Some(c - 1);
                    self.items[c - 1].clone()
                }
                Some(_) => {
                    self.cursor = None;
                    String::new()
                }
                None => String::new(),
            },
        }
    }
}
