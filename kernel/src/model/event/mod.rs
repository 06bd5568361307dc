use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

use crate::model::id::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Birthday,
    Wedding,
    Anniversary,
    Corporate,
    Other,
}

#[derive(Debug)]
pub struct Event {
    pub event_id: EventId,
    pub kind: EventKind,
    pub name: String,
    pub description: String,
    pub packages: Vec<Package>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// イベントに紐づく料金プラン。予約時にはここから name と price を
/// スナップショットとして写し取る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
}
