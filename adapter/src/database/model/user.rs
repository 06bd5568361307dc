use std::str::FromStr;

use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            name,
            email,
            role,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(User {
            user_id,
            name,
            email,
            role,
        })
    }
}

// 認証時だけ使う、パスワードハッシュ付きの行
#[derive(sqlx::FromRow)]
pub struct UserWithPasswordRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
}
