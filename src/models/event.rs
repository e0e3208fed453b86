use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::business::ValidationError;

/// An event hosted by a business, as returned by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub business_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Event form input, prior to validation.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
}

impl NewEvent {
    /// Validate the form and build the insert payload for `business_id`.
    pub fn into_row(self, business_id: Uuid) -> Result<EventRow, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(EventRow {
            business_id,
            title: self.title.trim().to_string(),
            description: self.description,
            location: self.location,
            event_date: self.event_date,
        })
    }
}

/// Insert payload for the `business_events` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub business_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub event_date: DateTime<Utc>,
}
