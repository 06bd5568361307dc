use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{event::Event, id::EventId};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
}
