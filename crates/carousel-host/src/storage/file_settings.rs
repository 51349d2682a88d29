//! Theme preference persisted as a small text record on disk.

use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use carousel_core::settings::{PersistedSettings, SettingsStore, Theme};

const SETTINGS_MAGIC: &str = "carousel-settings";
const SETTINGS_VERSION: u8 = 1;
const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FileSettingsError {
    Io(ErrorKind),
    Corrupted,
}

impl From<io::Error> for FileSettingsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

/// Record layout:
///
/// ```text
/// carousel-settings 1
/// theme=dark
/// ```
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    type Error = FileSettingsError;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error> {
        let record = match fs::read_to_string(&self.path) {
            Ok(record) => record,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut lines = record.lines();
        let Some(header) = lines.next() else {
            return Ok(None);
        };
        let mut header = header.split_whitespace();
        if header.next() != Some(SETTINGS_MAGIC) {
            return Ok(None);
        }
        match header.next().map(str::parse::<u8>) {
            Some(Ok(SETTINGS_VERSION)) => {}
            _ => return Err(FileSettingsError::Corrupted),
        }

        let mut theme = None;
        for line in lines {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key.trim() == THEME_KEY {
                theme = match value.trim() {
                    "light" | "dark" => Some(Theme::from_stored(Some(value))),
                    _ => return Err(FileSettingsError::Corrupted),
                };
            }
        }

        Ok(theme.map(PersistedSettings::new))
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let record = format!(
            "{SETTINGS_MAGIC} {SETTINGS_VERSION}\n{THEME_KEY}={}\n",
            settings.theme.as_str()
        );
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, record)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
