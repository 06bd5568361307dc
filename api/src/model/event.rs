use chrono::{DateTime, Utc};
use kernel::model::{
    event::{Event, EventKind, Package},
    id::EventId,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKindName {
    Birthday,
    Wedding,
    Anniversary,
    Corporate,
    Other,
}

impl From<EventKind> for EventKindName {
    fn from(value: EventKind) -> Self {
        match value {
            EventKind::Birthday => Self::Birthday,
            EventKind::Wedding => Self::Wedding,
            EventKind::Anniversary => Self::Anniversary,
            EventKind::Corporate => Self::Corporate,
            EventKind::Other => Self::Other,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    // フロント側の契約に合わせてキー名は type のまま
    #[serde(rename = "type")]
    pub kind: EventKindName,
    pub name: String,
    pub description: String,
    pub packages: Vec<PackageResponse>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
}

impl From<Package> for PackageResponse {
    fn from(value: Package) -> Self {
        let Package {
            name,
            price,
            description,
            features,
            capacity,
            duration,
        } = value;
        Self {
            name,
            price,
            description,
            features,
            capacity,
            duration,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            event_id,
            kind,
            name,
            description,
            packages,
            images,
            created_at,
        } = value;
        Self {
            id: event_id,
            kind: kind.into(),
            name,
            description,
            packages: packages.into_iter().map(PackageResponse::from).collect(),
            images,
            created_at,
        }
    }
}
