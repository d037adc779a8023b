// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use evex_core::{APP_NAME, Config};
use tokio::fs;

const EVEX_CONFIG_ENV: &str = "EVEX_CONFIG";

/// Locate and parse the configuration file.
///
/// Resolution order: `--config` flag, `EVEX_CONFIG` environment variable,
/// `<config-dir>/evex/config.toml`. A missing default file is not an error;
/// the application then runs with the default configuration.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(EVEX_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}").into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use std::fs;
    use std::sync::OnceLock;

    use tokio::sync::Mutex;

    use super::*;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    #[tokio::test]
    async fn explicit_path_is_parsed() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
state_dir = "/tmp/evex-state"
catalog_path = "/tmp/events.json"
"#,
        )
        .unwrap();

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/evex-state")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/events.json")));
    }

    #[tokio::test]
    async fn explicit_missing_path_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = parse_config(Some(temp_dir.path().join("absent.toml"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_toml_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "state_dir = [not toml").unwrap();

        let result = parse_config(Some(config_path)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn env_var_overrides_default_discovery() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let env_config_path = temp_dir.path().join("env_config.toml");
        fs::write(&env_config_path, r#"state_dir = "/tmp/from-env""#).unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(EVEX_CONFIG_ENV, env_config_path.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/from-env")));

            unsafe {
                std::env::remove_var(EVEX_CONFIG_ENV);
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_default_config_falls_back_to_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let empty_dir = temp_dir.path().join("empty");
        fs::create_dir(&empty_dir).unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(EVEX_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", empty_dir.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.state_dir, None);
            assert_eq!(config.catalog_path, None);

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
