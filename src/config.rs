//! User preferences stored as JSON under `./pranahuti/`.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{fs, io, path::{Path, PathBuf}};

use crate::catalog::{DEFAULT_DURATION_SECS, PracticeKind};
use crate::error::ConfigError;

pub const APP_DIR: &str = "pranahuti";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub duration_secs: u32,
    pub practice: PracticeKind,
    pub sound_enabled: bool,
    pub notifications_enabled: bool,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            practice: PracticeKind::Morning,
            sound_enabled: true,
            notifications_enabled: true,
            theme: "default".into(),
        }
    }
}

impl Config {
    /// Missing file means defaults; a corrupt one is logged and replaced by
    /// defaults.
    pub fn load(path: &Path) -> Self {
        match load_json::<Config>(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "using default preferences");
                Self::default()
            }
        }
    }

    /// Like [`Config::load`], but a first run also writes the defaults so
    /// they can be edited by hand. Failing to write is only logged.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists()
            && let Err(e) = Self::default().save(path)
        {
            tracing::warn!(error = %e, "could not write default preferences");
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_json(path, self)?;
        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }
}

/// Command-line settings for a single run. Never written back to disk.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub duration_secs: Option<u32>,
    pub practice: Option<PracticeKind>,
    pub theme: Option<String>,
    pub no_sound: bool,
    pub no_notify: bool,
}

impl Overrides {
    /// The settings this run uses: saved preferences with the overrides on top.
    pub fn apply(&self, prefs: &Config) -> Config {
        let mut config = prefs.clone();
        if let Some(d) = self.duration_secs { config.duration_secs = d; }
        if let Some(k) = self.practice { config.practice = k; }
        if let Some(t) = &self.theme { config.theme = t.clone(); }
        if self.no_sound { config.sound_enabled = false; }
        if self.no_notify { config.notifications_enabled = false; }
        config
    }
}

pub fn get_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(".");
    path.push(APP_DIR);
    if let Err(e) = fs::create_dir_all(&path) {
        tracing::warn!(path = %path.display(), error = %e, "cannot create app directory");
    }
    path.push(filename);
    path
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Io { path: path.into(), source }),
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| ConfigError::Json { path: path.into(), source })
}

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(data).map_err(|source| ConfigError::Json { path: path.into(), source })?;
    fs::write(path, json).map_err(|source| ConfigError::Io { path: path.into(), source })
}
