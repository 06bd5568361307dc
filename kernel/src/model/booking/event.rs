use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::{
    booking::{BookingStatus, ContactInfo, PackageSnapshot},
    id::{BookingId, EventId, UserId},
};

#[derive(new)]
pub struct CreateBooking {
    pub user_id: UserId,
    pub event_id: EventId,
    pub package: PackageSnapshot,
    pub event_date: DateTime<Utc>,
    pub guest_count: i32,
    pub contact_info: ContactInfo,
}

#[derive(new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub status: BookingStatus,
}
