//! Application settings and their load/save lifecycle.
//!
//! Settings are read once at startup with [SettingsStore::load] and written
//! back to disk every time they change through [SettingsStore::update].

use std::{
    fmt::Display,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, ValidationError, i18n::Language};

/// The colour scheme of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ValidationError::UnknownTheme(s.to_owned())),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Which notifications the user wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    /// Send notifications by email.
    pub email: bool,
    /// Send push notifications.
    pub push: bool,
    /// Send a weekly report.
    pub weekly_reports: bool,
    /// Alert when a budget is exceeded.
    pub budget_alerts: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            weekly_reports: true,
            budget_alerts: true,
        }
    }
}

/// User preferences for the whole application.
///
/// Missing fields in a settings file take their default values, so files
/// written by older versions still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The colour scheme.
    pub theme: Theme,
    /// Whether the navigation sidebar is collapsed.
    pub sidebar_collapsed: bool,
    /// The interface language.
    pub language: Language,
    /// Notification preferences.
    pub notifications: Notifications,
}

/// Owns the settings and the file they are saved to.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Read the settings at `path`.
    ///
    /// If the file does not exist the default settings are used. The file is
    /// not created until the first change.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::Io] if the file exists but cannot be read,
    /// - or [Error::Json] if the file is not valid settings JSON.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        let settings = match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("Loaded settings from {}", path.display());
                serde_json::from_str(&text)?
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No settings file at {}, using default settings",
                    path.display()
                );
                Settings::default()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, settings })
    }

    /// The current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The file the settings are saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to the settings and save them if anything changed.
    ///
    /// # Errors
    /// This function will return an [Error::Io] or [Error::Json] if the
    /// settings could not be written. The in-memory settings keep the change.
    pub fn update(&mut self, change: impl FnOnce(&mut Settings)) -> Result<&Settings, Error> {
        let previous = self.settings;
        change(&mut self.settings);

        if self.settings != previous {
            self.save()?;
        }

        Ok(&self.settings)
    }

    fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved settings to {}", self.path.display());

        Ok(())
    }
}
