// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the Evex application.
pub const APP_NAME: &str = "evex";

/// Configuration for the Evex application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory holding application state (the favorites slot).
    /// Defaults to the platform state directory; if none resolves,
    /// state is kept in memory for the session.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Path to a catalog JSON file. Defaults to the builtin catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        if let Some(a) = &self.catalog_path {
            self.catalog_path = Some(
                expand_path(a).map_err(|e| format!("Failed to expand catalog path: {e}"))?,
            );
        }

        Ok(())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_home_env() {
        let home = get_home_dir().unwrap();
        let home_prefixes: &[&str] = if cfg!(unix) {
            &["~", "$HOME", "${HOME}"]
        } else {
            &[r"~", r"%UserProfile%"]
        };
        for prefix in home_prefixes {
            let result = expand_path(&PathBuf::from(format!("{prefix}/Documents"))).unwrap();
            assert_eq!(result, home.join("Documents"));
            assert!(result.is_absolute());
        }
    }

    #[test]
    fn test_expand_path_absolute() {
        let absolute_path = PathBuf::from("/etc/passwd");
        let result = expand_path(&absolute_path).unwrap();
        assert_eq!(result, absolute_path);
    }

    #[test]
    fn test_expand_path_relative() {
        let relative_path = PathBuf::from("relative/path/to/file");
        let result = expand_path(&relative_path).unwrap();
        assert_eq!(result, relative_path);
    }

    #[test]
    fn test_normalize_fills_default_state_dir() {
        let mut config = Config::default();
        config.normalize().unwrap();

        if let Some(state_dir) = config.state_dir {
            assert!(state_dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_normalize_expands_catalog_path() {
        let mut config = Config {
            state_dir: Some(PathBuf::from("/tmp/evex-state")),
            catalog_path: Some(PathBuf::from("~/events.json")),
        };
        config.normalize().unwrap();

        let catalog_path = config.catalog_path.unwrap();
        assert!(catalog_path.is_absolute());
        assert!(catalog_path.ends_with("events.json"));
    }
}
