use super::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const THEME_ENV: &str = "PORTFOLIO_THEME";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: invalid preferences: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// JSON file holding the saved preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/portfolio-terminal/preferences.json`
    pub fn open_default() -> Result<Self, PreferenceError> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("portfolio-terminal").join("preferences.json")))
            .ok_or(PreferenceError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty set of preferences.
    pub fn load(&self) -> Result<Preferences, PreferenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        let io_err = |source: io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(prefs).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(io_err)?;
        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }

    /// Saved theme, or `None` when nothing usable is stored.
    pub fn saved_theme(&self) -> Option<Theme> {
        match self.load() {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                warn!("ignoring preferences: {e}");
                None
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        let mut prefs = self.load().unwrap_or_default();
        prefs.theme = Some(theme);
        self.save(&prefs)
    }
}

/// Saved choice first, then the environment hint, then dark.
pub fn preferred_theme(saved: Option<Theme>, env_hint: Option<&str>) -> Theme {
    saved
        .or_else(|| env_hint.and_then(|hint| hint.trim().parse().ok()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load().unwrap(), Preferences::default());
        assert_eq!(store.saved_theme(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested").join("prefs.json"));
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.saved_theme(), Some(Theme::Light));
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\"light\""));
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let store = PreferenceStore::new(&path);
        assert!(matches!(store.load(), Err(PreferenceError::Parse { .. })));
        assert_eq!(store.saved_theme(), None);
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.saved_theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_preferred_theme_order() {
        assert_eq!(preferred_theme(Some(Theme::Dark), Some("light")), Theme::Dark);
        assert_eq!(preferred_theme(None, Some(" Light ")), Theme::Light);
        assert_eq!(preferred_theme(None, Some("sepia")), Theme::Dark);
        assert_eq!(preferred_theme(None, None), Theme::Dark);
    }
}
