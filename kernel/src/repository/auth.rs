use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    auth::{AccessToken, Actor},
    user::User,
};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // メールアドレスとパスワードでユーザーを認証する
    async fn authenticate_user(&self, email: &str, password: &str) -> AppResult<User>;
    // 管理者ログイン用。role = admin のレコードだけを対象に認証する
    async fn authenticate_admin(&self, email: &str, password: &str) -> AppResult<User>;
    // 認証済みユーザーに対してアクセストークンを発行する
    fn issue_token(&self, user: &User) -> AppResult<AccessToken>;
    // ベアラートークンを検証して Actor を復元する。DB への再照会はしない
    fn verify_token(&self, token: &str) -> AppResult<Actor>;
}
