use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::{
            event::{CreateBooking, UpdateBookingStatus},
            Booking,
        },
        id::{BookingId, UserId},
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

const SELECT_BOOKING: &str = r#"
    SELECT
        b.booking_id,
        b.event_id,
        b.user_id,
        u.name AS user_name,
        u.email AS user_email,
        b.package_name,
        b.package_price,
        b.event_date,
        b.guest_count,
        b.status,
        b.total_amount,
        b.contact_phone,
        b.contact_address,
        b.special_requirements,
        b.created_at
    FROM bookings AS b
    INNER JOIN users AS u USING (user_id)
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        // total_amount は申込時のプラン価格の写し。以後再計算しない
        sqlx::query_scalar(
            r#"
                INSERT INTO bookings (
                    user_id, event_id, package_name, package_price,
                    event_date, guest_count, status, total_amount,
                    contact_phone, contact_address, special_requirements
                )
                VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8, $9, $10)
                RETURNING booking_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.event_id)
        .bind(&event.package.name)
        .bind(event.package.price)
        .bind(event.event_date)
        .bind(event.guest_count)
        .bind(event.package.price)
        .bind(&event.contact_info.phone)
        .bind(&event.contact_info.address)
        .bind(&event.contact_info.special_requirements)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            &format!("{SELECT_BOOKING} WHERE b.booking_id = $1"),
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            &format!("{SELECT_BOOKING} WHERE b.user_id = $1 ORDER BY b.created_at DESC"),
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            &format!("{SELECT_BOOKING} ORDER BY b.created_at DESC"),
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $2
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.status.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Booking not found".into()));
        }
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let res = sqlx::query("DELETE FROM bookings")
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected())
    }
}
