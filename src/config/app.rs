// src/config/app.rs
use super::defaults::*;
use crate::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, QUIET_ENV};
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_diagnostics")]
    pub diagnostics: Diagnostics,
    #[serde(default = "default_text")]
    pub text: TextSettings,
}

/// Operator-facing diagnostics for swallowed cipher failures
#[derive(Debug, Clone, Deserialize)]
pub struct Diagnostics {
    #[serde(default = "default_true")]
    pub log_failures: bool,
    /// Tracing filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSettings {
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            diagnostics: default_diagnostics(),
            text: default_text(),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a config from TOML text; missing tables and keys take defaults
pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_toml_str(&content)
}

/// Load config once, falling back to defaults if the file is missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            match from_path(&config_path) {
                Ok(conf) => conf,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(path = %config_path, error = %_err, "ignoring unreadable config");
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        apply_env_overrides(&mut conf);
        conf
    })
}

fn apply_env_overrides(conf: &mut Config) {
    if std::env::var_os(QUIET_ENV).is_some() {
        conf.diagnostics.log_failures = false;
    }
}
