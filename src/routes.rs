pub mod health;
pub mod plan;
pub mod saved_plans;

use actix_web::web;

use crate::middleware::auth::AuthMiddleware;

/// Registers every route. Expects `AppConfig`, `PlanService` and
/// `dyn PlanStore` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .route("/options", web::get().to(plan::get_options))
                .route("/plans/generate", web::post().to(plan::generate))
                // Protected routes
                .service(
                    web::scope("/plans")
                        .wrap(AuthMiddleware)
                        .route("", web::post().to(saved_plans::save))
                        .route("", web::get().to(saved_plans::list))
                        .route("/{id}", web::get().to(saved_plans::get_by_id))
                        .route("/{id}", web::put().to(saved_plans::update))
                        .route("/{id}", web::delete().to(saved_plans::delete))
                        .route(
                            "/{id}/regenerate",
                            web::post().to(saved_plans::regenerate),
                        ),
                ),
        );
}
