use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::MessageId, message::event::UpdateMessageStatus};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AdminUser,
    model::message::{CreateMessageRequest, MessageResponse, UpdateMessageStatusRequest},
};

/// 問い合わせフォームからの投稿。ここだけ認証なしで受け付ける。
pub async fn create_message(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    req.validate(&())?;

    let message = registry.message_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}

pub async fn show_message_list(
    _admin: AdminUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<MessageResponse>>> {
    registry
        .message_repository()
        .find_all()
        .await
        .map(|messages| messages.into_iter().map(MessageResponse::from).collect())
        .map(Json)
}

pub async fn update_message_status(
    _admin: AdminUser,
    Path(message_id): Path<MessageId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateMessageStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .message_repository()
        .update_status(UpdateMessageStatus::new(message_id, req.status.into()))
        .await
        .map(MessageResponse::from)
        .map(Json)
}

pub async fn delete_message(
    _admin: AdminUser,
    Path(message_id): Path<MessageId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<serde_json::Value>> {
    registry.message_repository().delete(message_id).await?;
    Ok(Json(serde_json::json!({ "message": "Message deleted" })))
}
