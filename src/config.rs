//! Configuration management for the resume extractor

use crate::error::{Result, ResumeParserError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the Cohere API key.
pub const API_KEY_VAR: &str = "COHERE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Generation request parameters. Low temperature and a fenced stop
/// sequence keep the model output close to the requested JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub k: u32,
    pub p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub stop_sequences: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub normalize_bullets: bool,
    pub strip_page_numbers: bool,
    pub enable_contact_backfill: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub export_dir: PathBuf,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: "https://api.cohere.ai/v1/generate".to_string(),
                model: "command".to_string(),
                max_tokens: 2000,
                temperature: 0.2,
                k: 0,
                p: 0.75,
                frequency_penalty: 0.1,
                presence_penalty: 0.1,
                stop_sequences: vec!["```".to_string()],
            },
            processing: ProcessingConfig {
                normalize_bullets: true,
                strip_page_numbers: true,
                enable_contact_backfill: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                export_dir: PathBuf::from("exports"),
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeParserError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeParserError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-extractor")
            .join("config.toml")
    }
}

/// The API credential, held as an explicit value rather than read
/// ambiently by the client. Missing credential is a configuration error
/// raised before any network call.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub api_key: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ResumeParserError::Configuration(format!(
                "{} is empty",
                API_KEY_VAR
            )));
        }
        Ok(Self { api_key })
    }

    /// Reads the key from the process environment, honoring a `.env`
    /// file when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ResumeParserError::Configuration(format!(
                "{} environment variable not found. Add it to your environment or .env file",
                API_KEY_VAR
            ))
        })?;
        Self::new(api_key)
    }
}
