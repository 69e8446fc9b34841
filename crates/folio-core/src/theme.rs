use crate::constants::THEME_STORAGE_KEY;
use crate::error::ParseThemeError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Font Awesome class shown on the toggle button for this mode.
    pub const fn icon_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "fa-sun",
            ThemeMode::Dark => "fa-moon",
        }
    }

    /// Snapshot from the root `data-theme` attribute. Anything other than
    /// `dark` (including a missing attribute) draws with the light palette.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// String key-value persistence for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Volatile store, used when no persistent storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Owns the process-wide theme flag and its persistence.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial mode from the stored preference, falling back to
    /// the OS colour-scheme preference. A corrupt stored value is ignored.
    pub fn new(store: S, prefers_dark: bool) -> Self {
        let stored = store.load(THEME_STORAGE_KEY);
        let mode = match stored.as_deref().map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::warn!("[theme] ignoring stored preference: {}", e);
                fallback(prefers_dark)
            }
            None => fallback(prefers_dark),
        };
        Self { store, mode }
    }

    #[inline]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.store.save(THEME_STORAGE_KEY, mode.as_str());
        log::info!("[theme] mode={}", mode);
    }

    /// Flip relative to `displayed`, the mode currently reflected on the page.
    pub fn toggle_from(&mut self, displayed: ThemeMode) -> ThemeMode {
        let next = displayed.toggled();
        self.set(next);
        next
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.toggle_from(self.mode)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn fallback(prefers_dark: bool) -> ThemeMode {
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}
