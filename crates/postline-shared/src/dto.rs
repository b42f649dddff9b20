//! Data Transfer Objects - request/response types for the AI routes.
//!
//! Field defaults mirror what the browser client omits: a bare
//! `{"prompt": "..."}` body must keep working.

use serde::{Deserialize, Serialize};

fn default_action() -> String {
    "caption".to_string()
}

fn default_platform() -> String {
    "instagram".to_string()
}

fn default_friendly() -> String {
    "friendly".to_string()
}

fn default_professional() -> String {
    "professional".to_string()
}

fn default_count() -> u32 {
    3
}

fn default_size() -> String {
    "1024x1024".to_string()
}

fn default_style() -> String {
    "cartoon".to_string()
}

/// Request for a single social-media caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Response carrying generated caption text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub text: String,
}

/// Request for general content generation: captions, hashtags, alt-text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_friendly")]
    pub tone: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// Generic text-generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// Request to repurpose long-form content into platform formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepurposeRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_professional")]
    pub tone: String,
}

/// Request for sentiment analysis of a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub text: String,
}

/// Request to render an image from a text prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToImageRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_size")]
    pub size: String,
}

/// Response carrying a rendered image as a base64 data URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToImageResponse {
    pub image_url: String,
    pub prompt: String,
}

/// Request to generate a profile avatar.
///
/// `seed` arrives as whatever the client produced (the browser sends a
/// bare number), so it is kept as a JSON value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarRequest {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub seed: Option<serde_json::Value>,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Response carrying a generated avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResponse {
    pub image_url: String,
    pub style: String,
    pub prompt: String,
}

/// One entry of the avatar style catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarStyle {
    pub id: String,
    pub name: String,
    pub emoji: String,
}

/// The avatar style catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarStylesResponse {
    pub styles: Vec<AvatarStyle>,
}
