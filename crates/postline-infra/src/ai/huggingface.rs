//! Hugging Face inference client for text-to-image generation.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header;

use postline_core::ports::{AiError, GeneratedImage, ImageModel};

pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-2";

/// Text-to-image client for the Hugging Face inference API.
///
/// The endpoint answers a `{"inputs": prompt}` POST with the raw image
/// bytes of the rendered picture.
#[derive(Clone)]
pub struct HuggingFaceImageModel {
    http: Client,
    api_key: String,
    model_url: String,
}

impl HuggingFaceImageModel {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            model_url: DEFAULT_MODEL_URL.to_string(),
        }
    }

    /// Point at a different hosted model.
    pub fn with_model_url(mut self, url: impl Into<String>) -> Self {
        self.model_url = url.into();
        self
    }
}

#[async_trait]
impl ImageModel for HuggingFaceImageModel {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, AiError> {
        let response = self
            .http
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::Api(format!(
                "Hugging Face API error: {}",
                response.status()
            )));
        }

        let mime_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        Ok(GeneratedImage {
            bytes: bytes.to_vec(),
            mime_type,
        })
    }
}
