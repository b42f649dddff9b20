//! HTTP handlers and route configuration.

mod ai;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::delete().to(posts::delete))
                .route("/{id}/view", web::patch().to(posts::record_view)),
        )
        .service(
            web::scope("/ai")
                .route("/caption", web::post().to(ai::caption))
                .route("/generate", web::post().to(ai::generate))
                .route("/repurpose", web::post().to(ai::repurpose))
                .route("/sentiment", web::post().to(ai::sentiment))
                .route("/text-to-image", web::post().to(ai::text_to_image))
                .route("/generate-avatar", web::post().to(ai::generate_avatar))
                .route("/avatar-styles", web::get().to(ai::avatar_styles)),
        );
}
