use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{event::UpdateBookingStatus, Booking, BookingStatus, StatusChange},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingResponse, CreateBookingRequest, CreateBookingRequestWithUserId,
        UpdateBookingStatusRequest,
    },
};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    req.validate(&())?;

    let create_booking = CreateBookingRequestWithUserId::new(user.id(), req);
    let booking_id = registry
        .booking_repository()
        .create(create_booking.into())
        .await?;

    let booking = find_booking(&registry, booking_id).await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await
        .map(|bookings| bookings.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn update_booking_status(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<BookingResponse>> {
    set_status(&registry, &user, booking_id, req.status.into()).await
}

/// PATCH /bookings/:id/cancel — status=cancelled の省略形。
pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    set_status(&registry, &user, booking_id, BookingStatus::Cancelled).await
}

async fn set_status(
    registry: &AppRegistry,
    user: &AuthorizedUser,
    booking_id: BookingId,
    status: BookingStatus,
) -> AppResult<Json<BookingResponse>> {
    let booking = find_booking(registry, booking_id).await?;

    match booking.status_change_for(&user.0, status) {
        StatusChange::Allowed => (),
        StatusChange::HiddenFromActor => {
            return Err(AppError::EntityNotFound("Booking not found".into()))
        }
        StatusChange::NotAllowed => return Err(AppError::ForbiddenOperation),
    }

    registry
        .booking_repository()
        .update_status(UpdateBookingStatus::new(booking_id, status))
        .await?;

    let updated = find_booking(registry, booking_id).await?;
    Ok(Json(updated.into()))
}

async fn find_booking(registry: &AppRegistry, booking_id: BookingId) -> AppResult<Booking> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))
}
