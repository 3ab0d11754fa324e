// src/setup/setup_toml.rs

use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const CONFIG_FILE_NAME: &str = "meowbox.toml";

const DEFAULT_CONFIG: &str = r#"[server]
host = "0.0.0.0"
port = 2230
# Actix worker threads (1-64)
workers = 2
# Seconds to wait for in-flight requests on shutdown
shutdown_timeout = 5

[docs]
# Leave unset to serve the docs tree compiled into the binary.
# dir = "docs"
content_dir = "/markdown"

[router]
# "index"     -> #/<lang>/index.html
# "versioned" -> #/<lang>/<version>/index.html
redirect = "index"
version = "v0.1.x"

[logging]
level = "info"
log_requests = true
"#;

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Validation("Cannot determine executable directory".into()))?;

    let config_path = base_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG).await?;
        log::info!("Created default config: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_FILE_NAME));
            paths.push(base_dir.join("config").join(CONFIG_FILE_NAME));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
    }
    paths
}

pub fn default_config_text() -> &'static str {
    DEFAULT_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::from_toml_str(default_config_text()).unwrap();
        assert_eq!(config.server.port, 2230);
        assert_eq!(config.server.workers, 2);
        assert!(config.logging.log_requests);
    }

    #[test]
    fn config_paths_end_with_file_name() {
        for path in get_config_paths() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
