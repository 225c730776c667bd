use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the flat JSON collections
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    pub fn accessories_path(&self) -> PathBuf {
        self.data_dir.join("accessories.json")
    }

    pub fn submissions_path(&self) -> PathBuf {
        self.data_dir.join("quiz_submissions.json")
    }
}
