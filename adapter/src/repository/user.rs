use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        role::Role,
        user::{event::CreateUser, User},
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

use crate::{database::ConnectionPool, password::hash_password};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let password_hash = hash_password(&event.password)?;

        let user_id: UserId = sqlx::query_scalar(
            r#"
                INSERT INTO users (name, email, password_hash, role)
                VALUES ($1, $2, $3, 'user')
                RETURNING user_id
            "#,
        )
        .bind(&event.name)
        .bind(&event.email)
        .bind(&password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(User {
            user_id,
            name: event.name,
            email: event.email,
            role: Role::User,
        })
    }
}
