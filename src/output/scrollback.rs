pub const PROMPT: &str = "$ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Input,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

/// Append-only terminal log. Only `clear` ever shrinks it.
#[derive(Debug, Default)]
pub struct Scrollback {
    entries: Vec<Entry>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(Entry {
            kind,
            text: text.into(),
        });
    }

    pub fn echo(&mut self, raw: &str) {
        self.push(EntryKind::Input, format!("{PROMPT}{raw}"));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries appended after the log held `len` entries. Empty if the log
    /// was cleared in between.
    pub fn since(&self, len: usize) -> &[Entry] {
        &self.entries[len.min(self.entries.len())..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_prefixes_prompt() {
        let mut log = Scrollback::new();
        log.echo("Help");
        assert_eq!(
            log.entries(),
            [Entry {
                kind: EntryKind::Input,
                text: "$ Help".to_string()
            }]
        );
    }

    #[test]
    fn test_since_after_clear() {
        let mut log = Scrollback::new();
        log.push(EntryKind::Output, "one");
        log.push(EntryKind::Output, "two");
        assert_eq!(log.since(1).len(), 1);
        log.clear();
        assert!(log.since(2).is_empty());
        assert!(log.is_empty());
    }
}
