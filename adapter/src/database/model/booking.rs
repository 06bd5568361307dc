use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Booking, BookingStatus, ContactInfo, PackageSnapshot},
    id::{BookingId, EventId, UserId},
    user::BookingUser,
};
use shared::error::AppError;

/// 予約一覧・詳細の取得で使う行。users を join して
/// 予約者の表示用情報も一緒に引いてくる。
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_email: String,
    pub package_name: String,
    pub package_price: i64,
    pub event_date: DateTime<Utc>,
    pub guest_count: i32,
    pub status: String,
    pub total_amount: i64,
    pub contact_phone: String,
    pub contact_address: String,
    pub special_requirements: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            event_id,
            user_id,
            user_name,
            user_email,
            package_name,
            package_price,
            event_date,
            guest_count,
            status,
            total_amount,
            contact_phone,
            contact_address,
            special_requirements,
            created_at,
        } = value;
        let status = BookingStatus::from_str(&status)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(Booking {
            booking_id,
            event_id,
            user: BookingUser {
                user_id,
                name: user_name,
                email: user_email,
            },
            package: PackageSnapshot {
                name: package_name,
                price: package_price,
            },
            event_date,
            guest_count,
            status,
            total_amount,
            contact_info: ContactInfo {
                phone: contact_phone,
                address: contact_address,
                special_requirements,
            },
            created_at,
        })
    }
}
