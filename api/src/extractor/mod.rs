use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{auth::Actor, id::UserId};
use registry::AppRegistry;
use shared::error::AppError;

/// 有効なベアラートークンを持つリクエスト主体。
/// ヘッダーが無ければ 401(MissingToken)、検証に失敗すれば
/// 401(TokenVerificationFailed) で弾き、ハンドラーには到達させない。
pub struct AuthorizedUser(pub Actor);

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.0.id
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::MissingToken)?;

        let actor = registry.auth_repository().verify_token(bearer.token())?;
        Ok(Self(actor))
    }
}

/// 管理者専用ルート用。認証に加えて role = admin を要求し、
/// それ以外は 403 で弾く。
pub struct AdminUser(pub Actor);

impl AdminUser {
    pub fn id(&self) -> UserId {
        self.0.id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let AuthorizedUser(actor) = AuthorizedUser::from_request_parts(parts, registry).await?;
        if !actor.is_admin() {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(Self(actor))
    }
}
