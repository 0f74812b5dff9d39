//! HTTP handlers and route configuration.

mod health;
pub mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, method_not_allowed, route_not_found};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/health")
                .route(web::get().to(health::health_check))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::replace_post))
                .route(web::delete().to(posts::delete_post))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(route_not_found));
}
