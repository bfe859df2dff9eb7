use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WolfyConfig {
    pub api: ApiConfig,
    pub headers: HeaderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every authenticated path is resolved against (must end in `/`)
    pub base_url: String,
    /// Base URL of the public skin renderer
    pub media_url: String,
    /// File holding the session token
    pub token_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// User-Agent sent with every request, including media fetches
    pub user_agent: String,
    /// Default Referer for authenticated requests
    pub referer: String,
    /// Referer the social endpoints send instead of the default
    pub social_referer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Append a record of every API call to this file when set
    pub api_log_file: Option<PathBuf>,
}

impl Default for WolfyConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: crate::API_BASE_URL.to_string(),
                media_url: crate::MEDIA_BASE_URL.to_string(),
                token_file: PathBuf::from(crate::SESSION_TOKEN_FILE),
            },
            headers: HeaderConfig {
                user_agent: crate::DEFAULT_USER_AGENT.to_string(),
                referer: crate::DEFAULT_REFERER.to_string(),
                social_referer: crate::SOCIAL_REFERER.to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl WolfyConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            info!("Loading configuration from {}", config_path.display());
            Self::load(config_path)
        } else {
            info!("Creating default configuration at {}", config_path.display());
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)?;
        toml::from_str(&config_str).map_err(|e| Error::config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("base_url", &self.api.base_url), ("media_url", &self.api.media_url)] {
            let url = Url::parse(value).map_err(|e| Error::config(format!("{name} is not a valid URL: {e}")))?;
            if url.cannot_be_a_base() {
                return Err(Error::config(format!("{name} cannot be used as a base URL")));
            }
            // Url::join replaces the last segment unless the base ends in a slash
            if !url.path().ends_with('/') {
                return Err(Error::config(format!("{name} must end with '/'")));
            }
        }

        if self.headers.user_agent.trim().is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }

        Ok(())
    }
}

/// Read the session token from disk, trimming surrounding whitespace
pub fn load_session_token(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let token = fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?
        .trim()
        .to_string();

    if token.is_empty() {
        return Err(Error::config(format!("{} is empty", path.display())));
    }
    Ok(token)
}
