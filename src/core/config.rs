// src/core/config.rs
use crate::core::constants::{
    APP_TITLE, DEFAULT_CONTENT_DIR, DEFAULT_DOCS_VERSION, DEFAULT_HOST, DEFAULT_PORT, VERSION,
};
use crate::core::prelude::*;
use crate::router::RedirectStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    docs: Option<DocsConfigToml>,
    #[serde(default)]
    router: Option<RouterConfigToml>,
    #[serde(default)]
    logging: Option<LoggingConfigToml>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_shutdown_timeout")]
    shutdown_timeout: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct DocsConfigToml {
    #[serde(default)]
    dir: Option<String>,
    #[serde(default = "default_content_dir")]
    content_dir: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct RouterConfigToml {
    #[serde(default = "default_redirect")]
    redirect: String,
    #[serde(default = "default_version")]
    version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct LoggingConfigToml {
    #[serde(default = "default_log_level")]
    level: String,
    #[serde(default = "default_log_requests")]
    log_requests: bool,
}

// Server Defaults
fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_workers() -> usize {
    2
}
fn default_shutdown_timeout() -> u64 {
    5
}

// Docs Defaults
fn default_content_dir() -> String {
    DEFAULT_CONTENT_DIR.into()
}

// Router Defaults
fn default_redirect() -> String {
    "index".into()
}
fn default_version() -> String {
    DEFAULT_DOCS_VERSION.into()
}

// Logging Defaults
fn default_log_level() -> String {
    "info".into()
}
fn default_log_requests() -> bool {
    true
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub server: ServerConfig,
    pub docs: DocsConfig,
    pub router: RouterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Serve from this directory instead of the embedded tree.
    pub dir: Option<PathBuf>,
    pub content_dir: String,
}

#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub redirect: RedirectStyle,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub log_requests: bool,
}

impl LoggingConfig {
    /// `level` as a filter; unknown names fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.trim().parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using info", self.level);
            log::LevelFilter::Info
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            content_dir: default_content_dir(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            redirect: RedirectStyle::Index,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_requests: default_log_requests(),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        // Try existing configs
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
                }
            }
        }

        // Create new config
        match crate::setup::setup_toml::ensure_config_exists().await {
            Ok(path) => Self::from_file(&path).await,
            Err(e) => {
                log::warn!("Could not write default config, using defaults: {}", e);
                Ok(Self::default())
            }
        }
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let server = file.server.map_or_else(ServerConfig::default, |s| ServerConfig {
            host: s.host,
            port: s.port,
            workers: Self::clamp(s.workers, 1, 64, default_workers()),
            shutdown_timeout: s.shutdown_timeout,
        });
        if server.port == 0 {
            return Err(AppError::Validation("server.port must be > 0".into()));
        }

        let docs = file.docs.map_or_else(DocsConfig::default, |d| DocsConfig {
            dir: d.dir.filter(|s| !s.trim().is_empty()).map(PathBuf::from),
            content_dir: normalize_content_dir(&d.content_dir),
        });

        let router = match file.router {
            None => RouterConfig::default(),
            Some(r) => RouterConfig {
                redirect: RedirectStyle::from_config(&r.redirect, &r.version)?,
            },
        };

        let logging = file.logging.map_or_else(LoggingConfig::default, |l| LoggingConfig {
            level: l.level,
            log_requests: l.log_requests,
        });

        Ok(Self {
            config_path: None,
            server,
            docs,
            router,
            logging,
        })
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }

    pub fn log_startup(&self) {
        log::info!("[Info] Starting {} v{}...", APP_TITLE, VERSION);
        if let Some(path) = &self.config_path {
            log::info!("[Info] Config: {}", path);
        }
        match &self.docs.dir {
            Some(dir) => log::info!("[Info] Serving docs from {}", dir.display()),
            None => log::info!("[Info] Serving embedded docs"),
        }
    }

    // Helper methods
    fn clamp(value: usize, min: usize, max: usize, default: usize) -> usize {
        if value < min || value > max {
            default
        } else {
            value
        }
    }
}

fn normalize_content_dir(dir: &str) -> String {
    let trimmed = dir.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return default_content_dir();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            server: ServerConfig::default(),
            docs: DocsConfig::default(),
            router: RouterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 2230);
        assert_eq!(config.docs.content_dir, "/markdown");
        assert!(config.docs.dir.is_none());
        assert_eq!(config.router.redirect, RedirectStyle::Index);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn versioned_redirect_is_configurable() {
        let config = Config::from_toml_str(
            r#"
[router]
redirect = "versioned"
version = "v0.2.x"
"#,
        )
        .unwrap();
        assert_eq!(
            config.router.redirect,
            RedirectStyle::Versioned("v0.2.x".into())
        );
    }

    #[test]
    fn unknown_redirect_style_is_rejected() {
        let err = Config::from_toml_str("[router]\nredirect = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn zero_port_is_rejected() {
        assert!(Config::from_toml_str("[server]\nport = 0\n").is_err());
    }

    #[test]
    fn workers_out_of_range_fall_back() {
        let config = Config::from_toml_str("[server]\nworkers = 500\n").unwrap();
        assert_eq!(config.server.workers, 2);
    }

    #[test]
    fn content_dir_gets_leading_slash() {
        let config = Config::from_toml_str("[docs]\ncontent_dir = \"md/\"\n").unwrap();
        assert_eq!(config.docs.content_dir, "/md");
    }

    #[test]
    fn log_level_parses_to_filter() {
        let config = Config::from_toml_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
        assert_eq!(Config::default().logging.level_filter(), log::LevelFilter::Info);

        let config = Config::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Info);
    }

    #[tokio::test]
    async fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meowbox.toml");
        tokio::fs::write(&path, "[server]\nport = 8088\n")
            .await
            .unwrap();
        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.config_path(), Some(path.to_string_lossy().as_ref()));
    }
}
