use crate::model::{id::UserId, role::Role};

/// 検証済みトークンから復元したリクエスト主体。
/// リクエストごとに生成され、永続化はしない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone)]
pub struct AccessToken(pub String);
