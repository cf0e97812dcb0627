use crate::error::{XrdMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use xrd_match_common::gemini::{DEFAULT_GEMINI_MODEL, GEMINI_API_BASE_URL};

const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.into(),
            api_base_url: GEMINI_API_BASE_URL.into(),
            temperature: 0.1,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| XrdMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("xrd-match").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(XrdMatchError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        self.model = model;
        self.save()
    }
}
