use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::MessageId,
    message::{
        event::{CreateMessage, UpdateMessageStatus},
        Message,
    },
};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, event: CreateMessage) -> AppResult<Message>;
    async fn find_all(&self) -> AppResult<Vec<Message>>;
    async fn update_status(&self, event: UpdateMessageStatus) -> AppResult<Message>;
    async fn delete(&self, message_id: MessageId) -> AppResult<()>;
}
