//! Post CRUD handlers.
//!
//! The store does the merging and the no-op handling; these handlers are
//! the thin HTTP skin over it. Status transitions are owned by the
//! background scheduler, not by any route.

use actix_web::{HttpResponse, web};

use postline_core::domain::PostFields;
use postline_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
///
/// Caller fields are merged over the creation defaults; the created post
/// is echoed back.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostFields>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
///
/// Deleting an id that is already gone still answers success.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete_by_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(())))
}

/// PATCH /posts/{id}/view
pub async fn record_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.increment_views(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(())))
}
