use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    id::MessageId,
    message::{Message, MessageStatus},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct MessageRow {
    pub message_id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = AppError;

    fn try_from(value: MessageRow) -> Result<Self, Self::Error> {
        let MessageRow {
            message_id,
            name,
            email,
            subject,
            body,
            status,
            created_at,
        } = value;
        let status = MessageStatus::from_str(&status)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(Message {
            message_id,
            name,
            email,
            subject,
            body,
            status,
            created_at,
        })
    }
}
