use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::AppStore;
use crate::store::slice::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Ja => Language::En,
            Language::En => Language::Ja,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(StoreError::UnsupportedLanguage {
                code: other.to_string(),
            }),
        }
    }
}

/// Display preferences. Not fetched remotely, so no loading/error flags.
///
/// Fields change only through the setters so that an explicit dark-mode
/// choice always stops following the system theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    language: Language,
    dark_mode: bool,
    use_system_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Ja,
            dark_mode: false,
            use_system_theme: true,
        }
    }
}

impl SliceState for Settings {
    fn of(store: &AppStore) -> &Self {
        &store.settings
    }

    fn of_mut(store: &mut AppStore) -> &mut Self {
        &mut store.settings
    }
}

impl Settings {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn use_system_theme(&self) -> bool {
        self.use_system_theme
    }

    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(language = %language, "Language set");
        self.language = language;
    }

    /// Parse and apply a language code. Unknown codes leave the state unchanged.
    pub fn set_language_code(&mut self, code: &str) -> Result<(), StoreError> {
        match code.parse() {
            Ok(language) => {
                self.set_language(language);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(code, "Rejected language code");
                Err(err)
            }
        }
    }

    /// An explicit dark-mode choice always stops following the system theme,
    /// whichever value is chosen.
    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        self.use_system_theme = false;
        tracing::debug!(dark_mode = enabled, "Dark mode set; following system theme off");
    }

    pub fn set_use_system_theme(&mut self, enabled: bool) {
        self.use_system_theme = enabled;
        tracing::debug!(use_system_theme = enabled, "System theme preference set");
    }

    /// Whether to render dark, given the platform's current appearance.
    pub fn effective_dark_mode(&self, system_is_dark: bool) -> bool {
        if self.use_system_theme {
            system_is_dark
        } else {
            self.dark_mode
        }
    }
}
