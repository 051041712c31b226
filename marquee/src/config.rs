//! Layered configuration: CLI flags, then environment, then the TOML file,
//! then defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use marquee_api::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT};
use marquee_core::DEFAULT_IMAGE_BASE_URL;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key: pass --api-key, set TMDB_API_KEY or add api_key to {path}")]
    MissingApiKey { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field} '{value}': expected an http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Terminal movie browser backed by TMDb
#[derive(Parser, Debug, Default)]
#[command(name = "marquee", version)]
#[command(about = "Browse trending movies, genres and search results from TMDb")]
pub struct Args {
    /// TMDb API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Initial location, e.g. "#trends" or "#movie=550"
    #[arg(long, default_value = "")]
    pub fragment: String,

    /// Config file (default: <config dir>/marquee/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Response language, e.g. "en-US"
    #[arg(long)]
    pub language: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "MARQUEE_LOG")]
    pub log_file: Option<PathBuf>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub language: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read and parse a config file. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings the app runs with
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: Option<String>,
    pub request_timeout: Duration,
    pub initial_fragment: String,
    pub log_file: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("image_base_url", &self.image_base_url)
            .field("language", &self.language)
            .field("request_timeout", &self.request_timeout)
            .field("initial_fragment", &self.initial_fragment)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Config {
    /// Default config file location.
    ///
    /// `~/.config/marquee/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, or the current directory.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("marquee").join("config.toml")
    }

    /// Load the file named by `--config` (or the default path) and merge
    /// it under the command line.
    pub fn load(args: Args) -> Result<Self, ConfigError> {
        let path = args.config.clone().unwrap_or_else(Self::default_path);
        let file = FileConfig::load(&path)?;
        Self::resolve(args, file, &path)
    }

    /// Merge parsed arguments over a file config and validate the result.
    ///
    /// Environment fallbacks are already folded into `args` by clap.
    pub fn resolve(args: Args, file: FileConfig, path: &Path) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .or(file.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                path: path.to_path_buf(),
            })?;

        let request_timeout = match file.request_timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let config = Self {
            api_key,
            api_base_url: file
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            image_base_url: file
                .image_base_url
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
            language: args.language.or(file.language),
            request_timeout,
            initial_fragment: args.fragment,
            log_file: args.log_file,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_base_url", &self.api_base_url),
            ("image_base_url", &self.image_base_url),
        ] {
            if !is_http_url(value) {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_key.clone())
            .with_base_url(self.api_base_url.clone())
            .with_language(self.language.clone())
            .with_timeout(self.request_timeout)
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}
