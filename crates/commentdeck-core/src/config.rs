use crate::error::{CommentDeckError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default admin API endpoint of a locally running comment server.
const DEFAULT_SERVER_URL: &str = "http://localhost:23366";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Base URL of the comment server the sidebar administers.
    pub server_url: String,
    /// Admin API token, if the server requires one.
    pub api_token: Option<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_token: None,
        }
    }
}

impl SidebarConfig {
    /// Get the project directories for CommentDeck.
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "commentdeck", "CommentDeck").ok_or_else(|| {
            CommentDeckError::Config("Could not determine config directory".to_string())
        })
    }

    /// Get the config directory path.
    pub fn config_dir() -> PathBuf {
        match Self::project_dirs() {
            Ok(dirs) => dirs.config_dir().to_path_buf(),
            Err(_) => {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".config").join("commentdeck")
            }
        }
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load config from disk, or create and save defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let config = Self::read_from(&path)?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        self.write_to(&Self::config_path())
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CommentDeckError::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CommentDeckError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SidebarConfig::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = SidebarConfig {
            server_url: "https://comments.example.com".to_string(),
            api_token: Some("atk_secret".to_string()),
        };
        config.write_to(&path).unwrap();

        let loaded = SidebarConfig::read_from(&path).unwrap();
        assert_eq!(loaded.server_url, "https://comments.example.com");
        assert_eq!(loaded.api_token.as_deref(), Some("atk_secret"));
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = [not valid").unwrap();

        let err = SidebarConfig::read_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
