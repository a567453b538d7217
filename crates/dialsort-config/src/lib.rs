use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialsort_core::domain::LineTypeSet;
use dialsort_core::pipeline::DEFAULT_PROGRESS_INTERVAL;
use dialsort_core::rules::PhonePolicy;
use dialsort_core::scrub::ScrubPatterns;
use dialsort_core::{CoreError, ProcessOptions};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialsort";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub progress_interval: usize,
    pub line_types: LineTypesConfig,
    pub scrub: ScrubConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTypesConfig {
    pub allowed: LineTypeSet,
    pub discardable: LineTypeSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrubConfig {
    pub extra_keywords: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            line_types: LineTypesConfig {
                allowed: LineTypeSet::allowed_default(),
                discardable: LineTypeSet::discardable_default(),
            },
            scrub: ScrubConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn phone_policy(&self) -> Result<PhonePolicy> {
        PhonePolicy::new(
            self.line_types.allowed.clone(),
            self.line_types.discardable.clone(),
        )
        .map_err(ConfigError::from)
    }

    pub fn process_options(&self) -> Result<ProcessOptions> {
        ProcessOptions::new(self.phone_policy()?, self.progress_interval)
            .map_err(ConfigError::from)
    }

    /// Scrub patterns from config keywords plus any given on the command line.
    pub fn scrub_patterns<'a, I>(&'a self, extra: I) -> Result<ScrubPatterns>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keywords = self
            .scrub
            .extra_keywords
            .iter()
            .map(String::as_str)
            .chain(extra);
        ScrubPatterns::new(keywords).map_err(ConfigError::from)
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
    #[error("invalid progress_interval value: {0}")]
    InvalidProgressInterval(usize),
    #[error("invalid line_types.{field} value: {source}")]
    InvalidLineTypes {
        field: &'static str,
        #[source]
        source: CoreError,
    },
    #[error("invalid scrub.extra_keywords value: {0:?}")]
    InvalidScrubKeyword(String),
    #[error("invalid configuration: {0}")]
    Core(#[from] CoreError),
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

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    progress_interval: Option<usize>,
    line_types: Option<LineTypesFile>,
    scrub: Option<ScrubFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LineTypesFile {
    allowed: Option<Vec<String>>,
    discardable: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScrubFile {
    extra_keywords: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(interval) = parsed.progress_interval {
        if interval == 0 {
            return Err(ConfigError::InvalidProgressInterval(interval));
        }
        config.progress_interval = interval;
    }

    if let Some(line_types) = parsed.line_types {
        if let Some(allowed) = line_types.allowed {
            config.line_types.allowed = LineTypeSet::new(&allowed).map_err(|source| {
                ConfigError::InvalidLineTypes {
                    field: "allowed",
                    source,
                }
            })?;
        }
        if let Some(discardable) = line_types.discardable {
            config.line_types.discardable = LineTypeSet::new(&discardable).map_err(|source| {
                ConfigError::InvalidLineTypes {
                    field: "discardable",
                    source,
                }
            })?;
        }
    }
    config.phone_policy()?;

    if let Some(scrub) = parsed.scrub {
        if let Some(keywords) = scrub.extra_keywords {
            let mut normalized = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                let trimmed = keyword.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::InvalidScrubKeyword(keyword));
                }
                normalized.push(trimmed.to_lowercase());
            }
            config.scrub.extra_keywords = normalized;
        }
    }

    Ok(config)
}
