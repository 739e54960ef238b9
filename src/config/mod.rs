//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub news: NewsConfig,
}

fn default_port() -> u16 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    /// NewsAPI key; searches return no results until one is configured.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "https://newsapi.org/v2/everything".to_string()
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("NEWSBRIEF_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/newsbrief");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("newsbrief");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/newsbrief");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("newsbrief");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (NEWSBRIEF_PORT, NEWSBRIEF_NEWS__API_KEY, etc.)
        .add_source(
            ::config::Environment::with_prefix("NEWSBRIEF")
                .separator("__")
                .try_parsing(true),
        );

    // PORT env precedence: NEWSBRIEF_PORT > PORT > config > default
    if let Ok(port) = std::env::var("NEWSBRIEF_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    // Legacy NEWS_API_KEY env var (used by the hosted deployment's .env)
    if let Ok(key) = std::env::var("NEWS_API_KEY") {
        if !key.is_empty() {
            builder = builder.set_override("news.api_key", key)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
