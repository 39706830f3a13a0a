//! API route configuration.
//!
//! All endpoints use the /v1 version prefix:
//! - GET  /v1/api/healthcheck
//! - POST /v1/api/users, GET /v1/api/users, GET /v1/api/users/{id},
//!   PUT /v1/api/users/{id}, GET /v1/api/users/by-username/{username}
//! - GET  /v1/api/stats/daily, GET /v1/api/stats/daily/{date}
//! - POST /v1/api/emails, GET /v1/api/emails, GET /v1/api/emails/{id}

use actix_web::web;

use crate::handlers::{emails, health, stats, users};

/// Configure the rosterd API routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1").service(
            web::scope("/api")
                .route("/healthcheck", web::get().to(health::healthcheck))
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create_user))
                        .route("", web::get().to(users::list_users))
                        .route(
                            "/by-username/{username}",
                            web::get().to(users::get_user_by_username),
                        )
                        .route("/{id}", web::get().to(users::get_user))
                        .route("/{id}", web::put().to(users::update_user)),
                )
                .service(
                    web::scope("/stats")
                        .route("/daily", web::get().to(stats::list_daily))
                        .route("/daily/{date}", web::get().to(stats::get_daily)),
                )
                .service(
                    web::scope("/emails")
                        .route("", web::post().to(emails::enqueue_email))
                        .route("", web::get().to(emails::list_emails))
                        .route("/{id}", web::get().to(emails::get_email)),
                ),
        ),
    );
}
