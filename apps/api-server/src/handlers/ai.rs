//! AI proxy handlers - prompt assembly lives here, provider calls go
//! through the ports in `postline-core`.

use actix_web::{HttpResponse, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use postline_core::ports::{CompletionRequest, GeneratedImage};
use postline_shared::dto::{
    AvatarRequest, AvatarResponse, AvatarStyle, AvatarStylesResponse, CaptionRequest,
    CaptionResponse, GenerateRequest, GenerateResponse, RepurposeRequest, SentimentRequest,
    TextToImageRequest, TextToImageResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const CONTENT_ASSISTANT: &str = "You are a helpful social media content assistant.";

/// POST /ai/caption
pub async fn caption(
    state: web::Data<AppState>,
    body: web::Json<CaptionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let text = state
        .completions
        .complete(CompletionRequest::new(
            "You are a social media expert.",
            req.prompt,
        ))
        .await?;

    Ok(HttpResponse::Ok().json(CaptionResponse { text }))
}

/// POST /ai/generate - captions, hashtags, alt-text.
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let result = state
        .completions
        .complete(
            CompletionRequest::new(CONTENT_ASSISTANT, build_generate_prompt(&req))
                .temperature(0.8)
                .max_tokens(500),
        )
        .await?;

    Ok(HttpResponse::Ok().json(GenerateResponse { result }))
}

fn build_generate_prompt(req: &GenerateRequest) -> String {
    match req.action.as_str() {
        "caption" => format!(
            "Write {} {} social media captions for {} based on the following content:\n\n{}\n\nReturn results as a JSON array.",
            req.count, req.tone, req.platform, req.text
        ),
        "hashtags" => format!(
            "Suggest {} sets of relevant hashtags (as comma-separated lists) for the following content targeted to {}:\n\n{}",
            req.count, req.platform, req.text
        ),
        "altText" => format!(
            "Write descriptive image alt-text (concise, <=125 chars) for an image described as: {}",
            req.text
        ),
        _ => format!(
            "Create {} short social media suggestions for the following content: {}",
            req.count, req.text
        ),
    }
}

/// POST /ai/repurpose - turn long-form content into platform formats.
pub async fn repurpose(
    state: web::Data<AppState>,
    body: web::Json<RepurposeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let prompt = format!(
        "You are a senior content repurposing specialist. Given the following source content, \
         produce: 1) a LinkedIn article summary (2-3 short paragraphs), 2) a Tweet thread of 4-6 \
         tweets, 3) an Instagram caption (short) plus 10 relevant hashtags, and 4) a short \
         YouTube video description. Keep tone: {}. Source content:\n\nTitle: {}\n\n{}\n\nReturn \
         as JSON with keys: linkedin, thread, instagram, youtube_description.",
        req.tone, req.title, req.content
    );

    let result = state
        .completions
        .complete(
            CompletionRequest::new(CONTENT_ASSISTANT, prompt)
                .temperature(0.7)
                .max_tokens(1000),
        )
        .await?;

    Ok(HttpResponse::Ok().json(GenerateResponse { result }))
}

/// POST /ai/sentiment
pub async fn sentiment(
    state: web::Data<AppState>,
    body: web::Json<SentimentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let prompt = format!(
        "Analyze the sentiment of the following text. Provide: sentiment \
         (positive/neutral/negative), score from -1 to 1, and a one-sentence rationale. \
         Text:\n\n{}",
        req.text
    );

    let result = state
        .completions
        .complete(
            CompletionRequest::new(
                "You are an assistant that provides concise sentiment analysis.",
                prompt,
            )
            .temperature(0.0)
            .max_tokens(200),
        )
        .await?;

    Ok(HttpResponse::Ok().json(GenerateResponse { result }))
}

/// POST /ai/text-to-image
pub async fn text_to_image(
    state: web::Data<AppState>,
    body: web::Json<TextToImageRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.prompt.trim().is_empty() {
        return Err(AppError::BadRequest("Prompt is required".to_string()));
    }

    let Some(images) = &state.images else {
        return Err(AppError::BadRequest(
            "Image generation API not configured. Client-side generation will be used instead."
                .to_string(),
        ));
    };

    let image = images.generate(&req.prompt).await?;

    Ok(HttpResponse::Ok().json(TextToImageResponse {
        image_url: to_data_url(&image),
        prompt: req.prompt,
    }))
}

/// POST /ai/generate-avatar
pub async fn generate_avatar(
    state: web::Data<AppState>,
    body: web::Json<AvatarRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.seed.is_none() && req.prompt.is_none() {
        return Err(AppError::BadRequest("Provide seed or prompt".to_string()));
    }

    let Some(images) = &state.images else {
        return Err(AppError::BadRequest(
            "Avatar generation API not configured. Client-side generation will be used instead."
                .to_string(),
        ));
    };

    let avatar_prompt = req.prompt.clone().unwrap_or_else(|| {
        format!(
            "Create a {} avatar with unique features, seed: {}",
            req.style,
            req.seed.as_ref().map(seed_to_string).unwrap_or_default()
        )
    });

    let image = images
        .generate(&format!("{}, portrait, hd, {} style", avatar_prompt, req.style))
        .await?;

    Ok(HttpResponse::Ok().json(AvatarResponse {
        image_url: to_data_url(&image),
        style: req.style,
        prompt: avatar_prompt,
    }))
}

/// GET /ai/avatar-styles
pub async fn avatar_styles() -> HttpResponse {
    let styles = [
        ("cartoon", "Cartoon", "\u{1F3A8}"),
        ("realistic", "Realistic", "\u{1F4F8}"),
        ("anime", "Anime", "\u{2728}"),
        ("pixel", "Pixel Art", "\u{1F3AE}"),
        ("watercolor", "Watercolor", "\u{1F3AD}"),
        ("professional", "Professional", "\u{1F4BC}"),
    ]
    .into_iter()
    .map(|(id, name, emoji)| AvatarStyle {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
    })
    .collect();

    HttpResponse::Ok().json(AvatarStylesResponse { styles })
}

fn seed_to_string(seed: &serde_json::Value) -> String {
    match seed {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_data_url(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        BASE64.encode(&image.bytes)
    )
}
