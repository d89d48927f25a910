//! Runtime configuration.
//!
//! Values come from an optional YAML file named by `HOLE_CONFIG`, then
//! individual environment variables override single fields:
//!
//! | Variable         | Field               | Default         |
//! |------------------|---------------------|-----------------|
//! | `HOLE_HOST`      | `server.host`       | `localhost`     |
//! | `HOLE_PORT`      | `server.port`       | `7070`          |
//! | `HOLE_BIND`      | `server.bind`       | `host:port`     |
//! | `HOLE_GUESTBOOK` | `guestbook.path`    | `guestbook.txt` |
//! | `HOLE_LOG`       | `log_level`         | `info`          |

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub guestbook: GuestbookConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Where the server listens and what it advertises in menu lines.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host name written into local menu lines
    #[serde(default = "default_host")]
    pub host: String,
    /// Port written into local menu lines
    #[serde(default = "default_port")]
    pub port: u16,
    /// Listen address, when it differs from `host:port`
    #[serde(default)]
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestbookConfig {
    #[serde(default = "default_guestbook_path")]
    pub path: PathBuf,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    7070
}

fn default_guestbook_path() -> PathBuf {
    PathBuf::from("guestbook.txt")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            guestbook: GuestbookConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            bind: None,
        }
    }
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            path: default_guestbook_path(),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to.
    pub fn listen_addr(&self) -> String {
        self.bind
            .clone()
            .unwrap_or_else(|| format!("{}:{}", self.host, self.port))
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup("HOLE_CONFIG") {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&raw).with_context(|| format!("invalid config file {}", path))?
            }
            None => Self::default(),
        };

        if let Some(host) = lookup("HOLE_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = lookup("HOLE_PORT") {
            cfg.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("HOLE_PORT is not a valid port: {:?}", port))?;
        }
        if let Some(bind) = lookup("HOLE_BIND") {
            cfg.server.bind = Some(bind);
        }
        if let Some(path) = lookup("HOLE_GUESTBOOK") {
            cfg.guestbook.path = PathBuf::from(path);
        }
        if let Some(level) = lookup("HOLE_LOG") {
            cfg.log_level = level;
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
