use rustyline::{
    Helper, completion::{Completer, Pair}, highlight::Highlighter, hint::Hinter, validate::Validator
};

use crate::commands::builtin_commands;

/// Completes and hints command names. Commands take no arguments, so only
/// the first word is ever completed.
pub struct CommandCompleter {
    names: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self {
            names: builtin_commands(),
        }
    }

    fn word(line: &str, pos: usize) -> Option<(usize, String)> {
        let head = &line[..pos];
        let start = head.len() - head.trim_start().len();
        let word = &head[start..];
        if word.contains(char::is_whitespace) {
            return None;
        }
        Some((start, word.to_lowercase()))
    }

    fn matches<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.names.iter().filter(move |name| name.starts_with(word))
    }
}

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let Some((start, word)) = Self::word(line, pos) else {
            return Ok((pos, Vec::new()));
        };

        let matches: Vec<Pair> = self
            .matches(&word)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();

        Ok((start, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let (_, word) = Self::word(line, pos)?;
        if word.is_empty() {
            return None;
        }

        self.matches(&word)
            .find(|cmd| cmd.len() > word.len())
            .map(|cmd| cmd[word.len()..].to_string())
    }
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_skips_leading_space() {
        assert_eq!(CommandCompleter::word("  Th", 4), Some((2, "th".to_string())));
        assert_eq!(CommandCompleter::word("help me", 7), None);
    }

    #[test]
    fn test_matches_prefix() {
        let completer = CommandCompleter::new();
        let found: Vec<&String> = completer.matches("s").collect();
        assert_eq!(found, vec!["skills", "social"]);
        assert_eq!(completer.matches("zzz").count(), 0);
    }
}
