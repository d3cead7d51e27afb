use serde::{Deserialize, Serialize};
use std::fs;

use crate::validation::validate_player_names;

pub const ENV_CONFIG: &str = "RATONGATO_CONFIG";
pub const ENV_CAT: &str = "RATONGATO_CAT";
pub const ENV_MOUSE: &str = "RATONGATO_MOUSE";
pub const ENV_HINTS: &str = "RATONGATO_HINTS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub cat_player: String,
    pub mouse_player: String,
    pub hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cat_player: "cat".into(),
            mouse_player: "mouse".into(),
            hints: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub cat_player: ValueSource,
    pub mouse_player: ValueSource,
    pub hints: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            cat_player: ValueSource::Default,
            mouse_player: ValueSource::Default,
            hints: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves configuration with `env` standing in for the process environment.
///
/// Precedence, lowest first: defaults, the TOML file named by
/// `RATONGATO_CONFIG`, then `RATONGATO_*` variables. Empty variables are ignored.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = lookup(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.cat_player {
            cfg.cat_player = v;
            sources.cat_player = ValueSource::File;
        }
        if let Some(v) = f.mouse_player {
            cfg.mouse_player = v;
            sources.mouse_player = ValueSource::File;
        }
        if let Some(v) = f.hints {
            cfg.hints = v;
            sources.hints = ValueSource::File;
        }
    }

    if let Some(cat) = lookup(ENV_CAT) {
        cfg.cat_player = cat;
        sources.cat_player = ValueSource::Env;
    }
    if let Some(mouse) = lookup(ENV_MOUSE) {
        cfg.mouse_player = mouse;
        sources.mouse_player = ValueSource::Env;
    }
    if let Some(hints) = lookup(ENV_HINTS) {
        cfg.hints =
            parse_bool(&hints).ok_or_else(|| ConfigError::Invalid("Invalid hints".into()))?;
        sources.hints = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    cat_player: Option<String>,
    #[serde(default)]
    mouse_player: Option<String>,
    #[serde(default)]
    hints: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_player_names(&cfg.cat_player, &cfg.mouse_player)
        .map_err(|msg| ConfigError::Invalid(format!("Invalid configuration: {}", msg)))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
