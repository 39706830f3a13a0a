//! Health check handler.

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::ApiContext;

/// GET /v1/api/healthcheck
///
/// No authentication required; designed for load balancer probes. Reports
/// degraded (503) when the store stops answering.
pub async fn healthcheck(ctx: web::Data<ApiContext>) -> impl Responder {
    match ctx.store.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "api_version": "v1",
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(json!({
            "status": "degraded",
            "version": env!("CARGO_PKG_VERSION"),
            "api_version": "v1",
            "message": e.to_string(),
        })),
    }
}
