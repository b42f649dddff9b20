//! Application configuration loaded from environment variables.

use std::env;

use postline_infra::ai::DEFAULT_MODEL;

use crate::background::SchedulerConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub scheduler: SchedulerConfig,
    pub ai: AiConfig,
}

/// AI provider configuration. An absent key selects the offline fallback
/// for that provider instead of failing startup.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub huggingface_api_key: Option<String>,
    pub huggingface_model_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            scheduler: SchedulerConfig::from_env(),
            ai: AiConfig {
                openai_api_key: env::var("OPENAI_API_KEY").ok(),
                openai_base_url: env::var("OPENAI_BASE_URL").ok(),
                openai_model: env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                huggingface_api_key: env::var("HUGGINGFACE_API_KEY").ok(),
                huggingface_model_url: env::var("HUGGINGFACE_MODEL_URL").ok(),
            },
        }
    }
}
