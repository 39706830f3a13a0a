//! Email notification handlers. Enqueue only; delivery belongs to the
//! dispatch job.

use actix_web::{web, HttpResponse};
use validator::Validate;

use rosterd_commons::RosterError;
use rosterd_store::NewEmail;

use crate::error::ApiError;
use crate::models::{EmailListQuery, EnqueueEmailRequest};
use crate::ApiContext;

/// POST /v1/api/emails
pub async fn enqueue_email(
    ctx: web::Data<ApiContext>,
    body: web::Json<EnqueueEmailRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate().map_err(ApiError::validation)?;

    let queued = ctx
        .store
        .emails()
        .enqueue(NewEmail {
            recipient: body.recipient,
            subject: body.subject,
            content: body.content,
            kind: body.kind,
        })
        .await?;

    Ok(HttpResponse::Created().json(queued))
}

/// GET /v1/api/emails
pub async fn list_emails(
    ctx: web::Data<ApiContext>,
    query: web::Query<EmailListQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = ctx.page_request(query.page, query.size);
    let result = ctx.store.emails().list(query.status, page).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /v1/api/emails/{id}
pub async fn get_email(
    ctx: web::Data<ApiContext>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let row = ctx
        .store
        .emails()
        .get(id)
        .await?
        .ok_or_else(|| RosterError::not_found(format!("email notification {}", id)))?;
    Ok(HttpResponse::Ok().json(row))
}
