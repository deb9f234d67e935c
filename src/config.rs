use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote service (default: "http://localhost:8080")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Items per page (default: 5)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_page_size() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and CLI arguments
    pub fn load(
        config_path: Option<&PathBuf>,
        cli_url: Option<&str>,
        cli_page_size: Option<u32>,
    ) -> anyhow::Result<Self> {
        // Start with default config
        let mut config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            // Try default config file
            if let Ok(content) = std::fs::read_to_string("todoctl.toml") {
                toml::from_str(&content)?
            } else {
                Config::default()
            }
        };

        // Override with environment variables
        if let Ok(url) = std::env::var("TODOCTL_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(size) = std::env::var("TODOCTL_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                config.page_size = s;
            }
        }

        // Override with CLI arguments
        if let Some(url) = cli_url {
            config.base_url = url.to_string();
        }
        if let Some(size) = cli_page_size {
            config.page_size = size;
        }

        Ok(config)
    }
}
