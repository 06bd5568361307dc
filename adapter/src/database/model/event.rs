use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::model::{
    event::{Event, EventKind, Package},
    id::EventId,
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub kind: String,
    pub name: String,
    pub description: String,
    pub packages: Json<Vec<PackageRecord>>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// packages カラム(JSONB)に入れる形。kernel の Package と 1:1。
#[derive(Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl From<PackageRecord> for Package {
    fn from(value: PackageRecord) -> Self {
        let PackageRecord {
            name,
            price,
            description,
            features,
            capacity,
            duration,
        } = value;
        Package {
            name,
            price,
            description,
            features,
            capacity,
            duration,
        }
    }
}

impl TryFrom<EventRow> for Event {
    type Error = AppError;

    fn try_from(value: EventRow) -> Result<Self, Self::Error> {
        let EventRow {
            event_id,
            kind,
            name,
            description,
            packages,
            images,
            created_at,
        } = value;
        let kind = EventKind::from_str(&kind)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(Event {
            event_id,
            kind,
            name,
            description,
            packages: packages.0.into_iter().map(Package::from).collect(),
            images,
            created_at,
        })
    }
}
