use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking,
    },
    id::{BookingId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を作成する。ステータスは必ず pending で始まる
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // booking_id から予約を 1 件引く
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // ユーザー ID に紐づく予約一覧を新しい順に取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
    // すべての予約を新しい順に取得する
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    // ステータスを書き換える。対象が存在しなければ EntityNotFound
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()>;
    // 全予約を物理削除する(管理者の一括パージ用)。削除件数を返す
    async fn delete_all(&self) -> AppResult<u64>;
}
