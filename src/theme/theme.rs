use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Shared handle to the current theme. Clones point at the same value.
#[derive(Debug, Clone, Default)]
pub struct ThemeCell(Arc<Mutex<Theme>>);

impl ThemeCell {
    pub fn new(theme: Theme) -> Self {
        Self(Arc::new(Mutex::new(theme)))
    }

    pub fn get(&self) -> Theme {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, theme: Theme) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = theme;
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&self) -> Theme {
        let mut theme = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *theme = theme.toggled();
        *theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_clones_share_state() {
        let cell = ThemeCell::new(Theme::Dark);
        let other = cell.clone();
        assert_eq!(other.toggle(), Theme::Light);
        assert_eq!(cell.get(), Theme::Light);
        cell.set(Theme::Dark);
        assert_eq!(other.get(), Theme::Dark);
    }
}
