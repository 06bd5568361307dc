use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

use crate::model::id::MessageId;

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
}

/// 問い合わせフォームから届いたメッセージ。
#[derive(Debug)]
pub struct Message {
    pub message_id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}
