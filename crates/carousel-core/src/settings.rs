//! Persisted user settings abstraction.

/// Body-level colour scheme.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Only an explicit `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// User-tunable settings that should survive restarts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PersistedSettings {
    pub theme: Theme,
}

impl PersistedSettings {
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error>;
    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error>;
}
