use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "terranova.toml";
pub const ENV_PREFIX: &str = "TERRANOVA";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load the configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON project file to seed the session from; built-in listings when unset
    pub data_file: Option<PathBuf>,
    /// Where the admin token is kept between sessions
    pub token_file: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            token_file: PathBuf::from(".terranova/session.json"),
            log_level: "info".to_string(),
        }
    }
}

/// Layer defaults, the config file and `TERRANOVA_*` environment variables.
///
/// An explicit `path` must exist; the default `terranova.toml` is optional.
///
/// # Errors
///
/// - the explicit config file is missing or unreadable
/// - a value does not deserialize into [`Settings`]
pub fn load(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let defaults = Settings::default();
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = Config::builder()
        .set_default("token_file", defaults.token_file.display().to_string())?
        .set_default("log_level", defaults.log_level)?
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize::<Settings>()?;

    tracing::debug!("{settings:#?}");
    Ok(settings)
}
