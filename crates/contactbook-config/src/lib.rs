use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use contactbook_core::rules::{validate_window_days, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "contactbook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = "Enter a command: ";
pub const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub birthday_window_days: i64,
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub greeting: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            repl: ReplConfig {
                prompt: DEFAULT_PROMPT.to_string(),
                greeting: DEFAULT_GREETING.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid birthday_window_days value: {0}")]
    InvalidWindowDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    birthday_window_days: Option<i64>,
    #[serde(default)]
    repl: ReplSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplSection {
    prompt: Option<String>,
    greeting: Option<String>,
}

/// Loads the config. An explicit path must exist; a missing file at the default
/// location, or no resolvable default location, yields the defaults.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    if let Some(path) = config_path {
        let path = resolve_config_path(Some(path))?;
        return read_config(&path)?.ok_or(ConfigError::MissingConfigFile(path));
    }

    match default_config_path() {
        Ok(path) => Ok(read_config(&path)?.unwrap_or_default()),
        Err(ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)) => {
            Ok(AppConfig::default())
        }
        Err(err) => Err(err),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(path)),
        Some(path) => Ok(path),
        None => default_config_path(),
    }
}

// $XDG_CONFIG_HOME/contactbook/config.toml, else ~/.config/contactbook/config.toml
fn default_config_path() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        Some(dir) if dir.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidConfigPath(dir))
        }
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

/// `Ok(None)` when the file does not exist.
fn read_config(path: &Path) -> Result<Option<AppConfig>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    apply(parsed).map(Some)
}

fn apply(parsed: ConfigFile) -> Result<AppConfig> {
    let defaults = AppConfig::default();

    let birthday_window_days = match parsed.birthday_window_days {
        Some(days) => {
            validate_window_days(days).map_err(|_| ConfigError::InvalidWindowDays(days))?
        }
        None => defaults.birthday_window_days,
    };

    Ok(AppConfig {
        birthday_window_days,
        repl: ReplConfig {
            prompt: parsed.repl.prompt.unwrap_or(defaults.repl.prompt),
            greeting: parsed.repl.greeting.unwrap_or(defaults.repl.greeting),
        },
    })
}
