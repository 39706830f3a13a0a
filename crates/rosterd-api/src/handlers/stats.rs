//! Daily statistics handlers (read-only; rows are produced by the rollup job).

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;

use rosterd_commons::RosterError;

use crate::error::ApiError;
use crate::models::PageQuery;
use crate::ApiContext;

/// GET /v1/api/stats/daily
pub async fn list_daily(
    ctx: web::Data<ApiContext>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = ctx.page_request(query.page, query.size);
    let result = ctx.store.stats().list(page).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /v1/api/stats/daily/{date}
pub async fn get_daily(
    ctx: web::Data<ApiContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw = path.into_inner();
    let date: NaiveDate = raw
        .parse()
        .map_err(|_| RosterError::invalid_input(format!("'{}' is not a date (YYYY-MM-DD)", raw)))?;

    let row = ctx
        .store
        .stats()
        .get_by_date(date)
        .await?
        .ok_or_else(|| RosterError::not_found(format!("statistics for {}", date)))?;
    Ok(HttpResponse::Ok().json(row))
}
