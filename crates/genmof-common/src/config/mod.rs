//! Configuration loading for GenMOF Studio.
//! Reads genmof.toml from the current directory or the path in GENMOF_CONFIG.
//! A missing file is not an error: every field has a default.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::error::{GenmofError, Result};

pub const CONFIG_ENV: &str = "GENMOF_CONFIG";
pub const BIND_ENV: &str = "GENMOF_BIND";
pub const DEFAULT_CONFIG_PATH: &str = "genmof.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GenmofConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 3001 }
fn default_static_dir() -> String { "crates/genmof-web/static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_max_upload_bytes() -> usize { 200 * 1024 * 1024 }
fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string(), "txt".to_string()]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl UploadConfig {
    /// Case-insensitive check of a file name's extension against the allow list.
    pub fn accepts(&self, file_name: &str) -> bool {
        let ext = match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return false,
        };
        self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sessions untouched for this long lose their article list
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_idle_timeout_secs()   -> u64 { 60 * 60 }
fn default_sweep_interval_secs() -> u64 { 60 }

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Never zero, so it is safe to hand to `tokio::time::interval`.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "genmof=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}


impl GenmofConfig {
    /// Load configuration. An explicit path must exist; otherwise
    /// GENMOF_CONFIG is checked, then genmof.toml, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(GenmofError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => {
                let path = std::env::var(CONFIG_ENV)
                    .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
                if Path::new(&path).exists() {
                    Self::from_file(Path::new(&path))?
                } else {
                    tracing::debug!("No config file at {}, using defaults", path);
                    Self::default()
                }
            }
        };

        if let Ok(bind) = std::env::var(BIND_ENV) {
            config.server.apply_bind(&bind)?;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| GenmofError::Config(format!("invalid bind address: {e}")))
    }

    /// Override host and port from a "host:port" string.
    pub fn apply_bind(&mut self, bind: &str) -> Result<()> {
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| GenmofError::Config(format!("invalid {BIND_ENV} '{bind}': {e}")))?;
        self.host = addr.ip().to_string();
        self.port = addr.port();
        Ok(())
    }
}
