use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// 予約一覧の表示で使う、予約者の名前と連絡先だけの型。
#[derive(Debug, PartialEq, Eq)]
pub struct BookingUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}
