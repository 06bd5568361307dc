use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::MessageId,
        message::{
            event::{CreateMessage, UpdateMessageStatus},
            Message,
        },
    },
    repository::message::MessageRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::message::MessageRow, ConnectionPool};

#[derive(new)]
pub struct MessageRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MessageRepository for MessageRepositoryImpl {
    async fn create(&self, event: CreateMessage) -> AppResult<Message> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
                INSERT INTO messages (name, email, subject, body, status)
                VALUES ($1, $2, $3, $4, 'unread')
                RETURNING message_id, name, email, subject, body, status, created_at
            "#,
        )
        .bind(&event.name)
        .bind(&event.email)
        .bind(&event.subject)
        .bind(&event.body)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
                SELECT message_id, name, email, subject, body, status, created_at
                FROM messages
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Message::try_from).collect()
    }

    async fn update_status(&self, event: UpdateMessageStatus) -> AppResult<Message> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
                UPDATE messages
                SET status = $2
                WHERE message_id = $1
                RETURNING message_id, name, email, subject, body, status, created_at
            "#,
        )
        .bind(event.message_id)
        .bind(event.status.as_ref())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AppError::EntityNotFound("Message not found".into())),
        }
    }

    async fn delete(&self, message_id: MessageId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM messages WHERE message_id = $1")
            .bind(message_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Message not found".into()));
        }
        Ok(())
    }
}
