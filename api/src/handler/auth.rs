use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::auth::AccessToken;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::auth::{AccessTokenResponse, LoginRequest, RegisterRequest};

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccessTokenResponse>), AppError> {
    req.validate(&())?;

    let user = registry
        .user_repository()
        .create(kernel::model::user::event::CreateUser {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;
    let AccessToken(token) = registry.auth_repository().issue_token(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AccessTokenResponse {
            token,
            user: user.into(),
        }),
    ))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let user = registry
        .auth_repository()
        .authenticate_user(&req.email, &req.password)
        .await?;
    let AccessToken(token) = registry.auth_repository().issue_token(&user)?;

    Ok(Json(AccessTokenResponse {
        token,
        user: user.into(),
    }))
}
