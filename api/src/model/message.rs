use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::MessageId,
    message::{event::CreateMessage, Message, MessageStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatusName {
    Unread,
    Read,
}

impl From<MessageStatus> for MessageStatusName {
    fn from(value: MessageStatus) -> Self {
        match value {
            MessageStatus::Unread => Self::Unread,
            MessageStatus::Read => Self::Read,
        }
    }
}

impl From<MessageStatusName> for MessageStatus {
    fn from(value: MessageStatusName) -> Self {
        match value {
            MessageStatusName::Unread => Self::Unread,
            MessageStatusName::Read => Self::Read,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub subject: String,
    // 問い合わせ本文。ボディのキー名は message
    #[garde(length(min = 1))]
    pub message: String,
}

impl From<CreateMessageRequest> for CreateMessage {
    fn from(value: CreateMessageRequest) -> Self {
        let CreateMessageRequest {
            name,
            email,
            subject,
            message,
        } = value;
        CreateMessage {
            name,
            email,
            subject,
            body: message,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageStatusRequest {
    pub status: MessageStatusName,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatusName,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(value: Message) -> Self {
        let Message {
            message_id,
            name,
            email,
            subject,
            body,
            status,
            created_at,
        } = value;
        Self {
            id: message_id,
            name,
            email,
            subject,
            message: body,
            status: status.into(),
            created_at,
        }
    }
}
