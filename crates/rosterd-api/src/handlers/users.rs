//! User resource handlers.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use rosterd_commons::{Page, RosterError, UserId};
use rosterd_store::{NewUser, UserUpdate};

use crate::error::ApiError;
use crate::handlers::actor_from;
use crate::models::{CreateUserRequest, ListQuery, UpdateUserRequest, UserResponse};
use crate::ApiContext;

/// POST /v1/api/users
pub async fn create_user(
    ctx: web::Data<ApiContext>,
    req: HttpRequest,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate().map_err(ApiError::validation)?;
    let actor = actor_from(&req)?;

    let user = ctx
        .store
        .users()
        .create(
            NewUser {
                username: body.username,
                email: body.email,
                first_name: body.first_name,
                last_name: body.last_name,
            },
            actor.as_ref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// GET /v1/api/users
pub async fn list_users(
    ctx: web::Data<ApiContext>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = ctx.page_request(query.page, query.size);
    let result = ctx.store.users().search(query.q.as_deref(), page).await?;
    let body: Page<UserResponse> = result.map(UserResponse::from);
    Ok(HttpResponse::Ok().json(body))
}

/// GET /v1/api/users/{id}
pub async fn get_user(
    ctx: web::Data<ApiContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = UserId::try_new(path.into_inner())
        .map_err(|e| ApiError::from(RosterError::invalid_input(e.to_string())))?;
    let user = ctx
        .store
        .users()
        .get(&id)
        .await?
        .ok_or_else(|| RosterError::not_found(format!("user '{}'", id)))?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// GET /v1/api/users/by-username/{username}
pub async fn get_user_by_username(
    ctx: web::Data<ApiContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let user = ctx
        .store
        .users()
        .get_by_username(&username)
        .await?
        .ok_or_else(|| RosterError::not_found(format!("user '{}'", username)))?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// PUT /v1/api/users/{id}
pub async fn update_user(
    ctx: web::Data<ApiContext>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    body.validate().map_err(ApiError::validation)?;
    let actor = actor_from(&req)?;

    let id = UserId::try_new(path.into_inner())
        .map_err(|e| ApiError::from(RosterError::invalid_input(e.to_string())))?;

    let user = ctx
        .store
        .users()
        .update(
            &id,
            UserUpdate {
                email: body.email,
                first_name: body.first_name,
                last_name: body.last_name,
            },
            actor.as_ref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
