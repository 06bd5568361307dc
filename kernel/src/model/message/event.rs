use derive_new::new;

use crate::model::{
    id::MessageId,
    message::MessageStatus,
};

#[derive(new)]
pub struct CreateMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

#[derive(new)]
pub struct UpdateMessageStatus {
    pub message_id: MessageId,
    pub status: MessageStatus,
}
