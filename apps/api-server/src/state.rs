//! Application state - shared across all handlers and the scheduler.

use std::sync::Arc;

use postline_core::ports::{CompletionModel, ImageModel, PostStore};
use postline_infra::{
    HuggingFaceImageModel, InMemoryPostStore, MockCompletionModel, OpenAiCompletionModel,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub completions: Arc<dyn CompletionModel>,
    /// `None` when no image API key is configured; the image routes then
    /// answer 400 and the browser falls back to client-side drawing.
    pub images: Option<Arc<dyn ImageModel>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let posts: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new());

        let completions: Arc<dyn CompletionModel> = match &config.ai.openai_api_key {
            Some(key) => {
                let mut model =
                    OpenAiCompletionModel::new(key).with_model(&config.ai.openai_model);
                if let Some(url) = &config.ai.openai_base_url {
                    model = model.with_base_url(url);
                }
                Arc::new(model)
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set - AI routes will return mock responses");
                Arc::new(MockCompletionModel)
            }
        };

        let images: Option<Arc<dyn ImageModel>> = match &config.ai.huggingface_api_key {
            Some(key) => {
                let mut model = HuggingFaceImageModel::new(key);
                if let Some(url) = &config.ai.huggingface_model_url {
                    model = model.with_model_url(url);
                }
                Some(Arc::new(model))
            }
            None => {
                tracing::warn!(
                    "HUGGINGFACE_API_KEY not set - image generation routes will answer 400"
                );
                None
            }
        };

        tracing::info!("Application state initialized");

        Self {
            posts,
            completions,
            images,
        }
    }
}
