use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::{auth::AccessToken, booking::event::UpdateBookingStatus, id::BookingId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AdminUser,
    model::{
        auth::{AdminLoginResponse, LoginRequest},
        booking::{BookingResponse, UpdateBookingStatusRequest},
    },
};

pub async fn admin_login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    req.validate(&())?;

    let admin = registry
        .auth_repository()
        .authenticate_admin(&req.email, &req.password)
        .await?;
    let AccessToken(token) = registry.auth_repository().issue_token(&admin)?;

    Ok(Json(AdminLoginResponse {
        token,
        admin: admin.into(),
    }))
}

pub async fn show_all_bookings(
    _admin: AdminUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(|bookings| bookings.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

/// 管理者のステータス更新。遷移表の制約は適用しない(観測された現行仕様)。
pub async fn update_booking_status(
    _admin: AdminUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .update_status(UpdateBookingStatus::new(booking_id, req.status.into()))
        .await?;

    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .map(|booking| Json(booking.into()))
        .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))
}

/// 全予約の一括削除。状態機械を経由しない管理操作。
pub async fn purge_bookings(
    _admin: AdminUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = registry.booking_repository().delete_all().await?;
    Ok(Json(serde_json::json!({ "deletedCount": deleted })))
}
