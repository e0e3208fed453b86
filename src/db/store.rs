use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::client::{RestClient, StoreError};
use crate::models::{Business, BusinessRow, Event, EventRow, Photo};

pub const BUSINESSES_TABLE: &str = "businesses";
pub const PHOTOS_TABLE: &str = "business_photos";
pub const EVENTS_TABLE: &str = "business_events";

/// Record-store operations the directory services depend on.
///
/// The deletion workflow and the facade are written against this trait so
/// tests can stand in an in-memory store.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Businesses owned by `user_id`, newest first.
    async fn businesses_for_user(&self, user_id: Uuid) -> Result<Vec<Business>, StoreError>;

    async fn insert_business(&self, row: &BusinessRow) -> Result<Business, StoreError>;

    async fn delete_business(&self, business_id: Uuid) -> Result<(), StoreError>;

    /// Photo records referencing `business_id`.
    async fn photos_for_business(&self, business_id: Uuid) -> Result<Vec<Photo>, StoreError>;

    /// Bulk delete of all photo records referencing `business_id`.
    async fn delete_photos_for_business(&self, business_id: Uuid) -> Result<(), StoreError>;

    async fn events_for_business(&self, business_id: Uuid) -> Result<Vec<Event>, StoreError>;

    async fn insert_event(&self, row: &EventRow) -> Result<Event, StoreError>;

    async fn delete_event(&self, event_id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
impl DirectoryStore for RestClient {
    async fn businesses_for_user(&self, user_id: Uuid) -> Result<Vec<Business>, StoreError> {
        let filter = format!("eq.{}", user_id);
        self.select(
            BUSINESSES_TABLE,
            &[
                ("select", "*"),
                ("user_id", &filter),
                ("order", "created_at.desc"),
            ],
        )
        .await
    }

    async fn insert_business(&self, row: &BusinessRow) -> Result<Business, StoreError> {
        self.insert(BUSINESSES_TABLE, row).await
    }

    async fn delete_business(&self, business_id: Uuid) -> Result<(), StoreError> {
        let filter = format!("eq.{}", business_id);
        self.delete(BUSINESSES_TABLE, &[("id", &filter)]).await
    }

    async fn photos_for_business(&self, business_id: Uuid) -> Result<Vec<Photo>, StoreError> {
        let filter = format!("eq.{}", business_id);
        self.select(
            PHOTOS_TABLE,
            &[("select", "id,business_id,url"), ("business_id", &filter)],
        )
        .await
    }

    async fn delete_photos_for_business(&self, business_id: Uuid) -> Result<(), StoreError> {
        let filter = format!("eq.{}", business_id);
        self.delete(PHOTOS_TABLE, &[("business_id", &filter)]).await
    }

    async fn events_for_business(&self, business_id: Uuid) -> Result<Vec<Event>, StoreError> {
        let filter = format!("eq.{}", business_id);
        self.select(
            EVENTS_TABLE,
            &[
                ("select", "*"),
                ("business_id", &filter),
                ("order", "event_date.asc"),
            ],
        )
        .await
    }

    async fn insert_event(&self, row: &EventRow) -> Result<Event, StoreError> {
        self.insert(EVENTS_TABLE, row).await
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), StoreError> {
        let filter = format!("eq.{}", event_id);
        self.delete(EVENTS_TABLE, &[("id", &filter)]).await
    }
}

#[async_trait]
impl DirectoryStore for Arc<dyn DirectoryStore> {
    async fn businesses_for_user(&self, user_id: Uuid) -> Result<Vec<Business>, StoreError> {
        (**self).businesses_for_user(user_id).await
    }

    async fn insert_business(&self, row: &BusinessRow) -> Result<Business, StoreError> {
        (**self).insert_business(row).await
    }

    async fn delete_business(&self, business_id: Uuid) -> Result<(), StoreError> {
        (**self).delete_business(business_id).await
    }

    async fn photos_for_business(&self, business_id: Uuid) -> Result<Vec<Photo>, StoreError> {
        (**self).photos_for_business(business_id).await
    }

    async fn delete_photos_for_business(&self, business_id: Uuid) -> Result<(), StoreError> {
        (**self).delete_photos_for_business(business_id).await
    }

    async fn events_for_business(&self, business_id: Uuid) -> Result<Vec<Event>, StoreError> {
        (**self).events_for_business(business_id).await
    }

    async fn insert_event(&self, row: &EventRow) -> Result<Event, StoreError> {
        (**self).insert_event(row).await
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), StoreError> {
        (**self).delete_event(event_id).await
    }
}
