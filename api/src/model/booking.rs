use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{
        event::CreateBooking, Booking, BookingStatus, ContactInfo, PackageSnapshot,
    },
    id::{BookingId, EventId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusName {
    Pending,
    Confirmed,
    Cancelled,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<BookingStatusName> for BookingStatus {
    fn from(value: BookingStatusName) -> Self {
        match value {
            BookingStatusName::Pending => Self::Pending,
            BookingStatusName::Confirmed => Self::Confirmed,
            BookingStatusName::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub event_id: EventId,
    #[garde(dive)]
    pub package: PackageSnapshotRequest,
    #[garde(skip)]
    pub event_date: DateTime<Utc>,
    #[garde(range(min = 1))]
    pub guest_count: i32,
    #[garde(dive)]
    pub contact_info: ContactInfoRequest,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackageSnapshotRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 0))]
    pub price: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoRequest {
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(skip)]
    pub special_requirements: Option<String>,
}

#[derive(new)]
pub struct CreateBookingRequestWithUserId(UserId, CreateBookingRequest);

impl From<CreateBookingRequestWithUserId> for CreateBooking {
    fn from(value: CreateBookingRequestWithUserId) -> Self {
        let CreateBookingRequestWithUserId(
            user_id,
            CreateBookingRequest {
                event_id,
                package,
                event_date,
                guest_count,
                contact_info,
            },
        ) = value;
        CreateBooking {
            user_id,
            event_id,
            package: PackageSnapshot {
                name: package.name,
                price: package.price,
            },
            event_date,
            guest_count,
            contact_info: ContactInfo {
                phone: contact_info.phone,
                address: contact_info.address,
                special_requirements: contact_info.special_requirements,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatusName,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub event_id: EventId,
    pub user: BookingUserResponse,
    pub package: PackageSnapshotResponse,
    pub event_date: DateTime<Utc>,
    pub guest_count: i32,
    pub status: BookingStatusName,
    pub total_amount: i64,
    pub contact_info: ContactInfoResponse,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSnapshotResponse {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoResponse {
    pub phone: String,
    pub address: String,
    pub special_requirements: Option<String>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            event_id,
            user,
            package,
            event_date,
            guest_count,
            status,
            total_amount,
            contact_info,
            created_at,
        } = value;
        Self {
            id: booking_id,
            event_id,
            user: BookingUserResponse {
                id: user.user_id,
                name: user.name,
                email: user.email,
            },
            package: PackageSnapshotResponse {
                name: package.name,
                price: package.price,
            },
            event_date,
            guest_count,
            status: status.into(),
            total_amount,
            contact_info: ContactInfoResponse {
                phone: contact_info.phone,
                address: contact_info.address,
                special_requirements: contact_info.special_requirements,
            },
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            event_id: EventId::new(),
            package: PackageSnapshotRequest {
                name: "Gold".into(),
                price: 50000,
            },
            event_date: Utc::now(),
            guest_count: 20,
            contact_info: ContactInfoRequest {
                phone: "03-1234-5678".into(),
                address: "1-2-3 Shibuya, Tokyo".into(),
                special_requirements: None,
            },
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate(&()).is_ok());
    }

    #[test]
    fn test_zero_guest_count_is_rejected() {
        let mut req = valid_request();
        req.guest_count = 0;
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn test_empty_contact_fields_are_rejected() {
        let mut req = valid_request();
        req.contact_info.phone = "".into();
        assert!(req.validate(&()).is_err());

        let mut req = valid_request();
        req.contact_info.address = "".into();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn test_create_event_copies_package_price() {
        let user_id = UserId::new();
        let req = valid_request();
        let event_id = req.event_id;

        let event = CreateBooking::from(CreateBookingRequestWithUserId::new(user_id, req));

        assert_eq!(event.user_id, user_id);
        assert_eq!(event.event_id, event_id);
        assert_eq!(event.package.name, "Gold");
        assert_eq!(event.package.price, 50000);
    }
}
