use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::Result;
use crate::db::DirectoryStore;
use crate::models::{Event, NewEvent};

/// Events hosted by `business_id`, soonest first.
pub async fn list_events<S>(store: &S, business_id: Uuid) -> Result<Vec<Event>>
where
    S: DirectoryStore + ?Sized,
{
    let events = store.events_for_business(business_id).await?;
    debug!("listed {} events for business {}", events.len(), business_id);
    Ok(events)
}

/// Validate an event form and insert it for `business_id`.
pub async fn add_event<S>(store: &S, business_id: Uuid, input: NewEvent) -> Result<Event>
where
    S: DirectoryStore + ?Sized,
{
    let row = input.into_row(business_id)?;
    let event = store.insert_event(&row).await?;
    info!("created event {} for business {}", event.id, business_id);
    Ok(event)
}

/// Delete one event. Events have no dependent resources, so this is a
/// single store call with no compensation steps.
pub async fn delete_event<S>(store: &S, event_id: Uuid) -> Result<()>
where
    S: DirectoryStore + ?Sized,
{
    store.delete_event(event_id).await?;
    info!("deleted event {}", event_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::testing::FakeStore;
    use chrono::Utc;

    fn form(title: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: None,
            location: None,
            event_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_event_lifecycle() {
        let store = FakeStore::new();
        let business_id = Uuid::new_v4();

        let created = add_event(&store, business_id, form("Wine tasting")).await.unwrap();
        assert_eq!(store.event_count(), 1);

        let listed = list_events(&store, business_id).await.unwrap();
        assert_eq!(listed.len(), 1);

        delete_event(&store, created.id).await.unwrap();
        assert_eq!(store.event_count(), 0);
    }

    #[tokio::test]
    async fn test_add_event_rejects_empty_title() {
        let store = FakeStore::new();
        let result = add_event(&store, Uuid::new_v4(), form("   ")).await;
        assert!(result.is_err());
        assert_eq!(store.event_count(), 0);
    }
}
