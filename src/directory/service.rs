use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::deletion::{self, DeletionOutcome};
use super::{businesses, events};
use crate::core::config::BizdirConfig;
use crate::core::error::Result;
use crate::db::{DirectoryStore, RestClient};
use crate::models::{Business, Event, NewBusiness, NewEvent};
use crate::storage::{EdgeFunctionRemover, FileRemover};

/// Facade over the record store and the file-removal endpoint.
///
/// One instance per signed-in session. The UI is expected to disable the
/// delete trigger while a deletion is in flight; nothing here locks
/// server-side.
pub struct DirectoryService {
    store: Arc<dyn DirectoryStore>,
    remover: Arc<dyn FileRemover>,
    path_marker: String,
}

impl DirectoryService {
    pub fn new(
        store: Arc<dyn DirectoryStore>,
        remover: Arc<dyn FileRemover>,
        path_marker: impl Into<String>,
    ) -> Self {
        info!("Initializing DirectoryService");
        Self {
            store,
            remover,
            path_marker: path_marker.into(),
        }
    }

    /// Wire up the real HTTP clients from a config.
    pub fn from_config(config: &BizdirConfig) -> Result<Self> {
        let store = RestClient::new(config)?;
        let remover = EdgeFunctionRemover::new(config)?;
        Ok(Self::new(
            Arc::new(store),
            Arc::new(remover),
            config.path_marker(),
        ))
    }

    pub async fn list_businesses(&self, user_id: Uuid) -> Result<Vec<Business>> {
        businesses::list_businesses(self.store.as_ref(), user_id).await
    }

    pub async fn add_business(&self, user_id: Uuid, input: NewBusiness) -> Result<Business> {
        businesses::add_business(self.store.as_ref(), user_id, input).await
    }

    /// Run the cascading deletion workflow for one business.
    ///
    /// Surfaces a single success outcome or a single error; per-photo
    /// results live inside the outcome, never as errors. On success the
    /// caller should refresh any cached business listing.
    pub async fn delete_business(&self, business_id: Uuid) -> Result<DeletionOutcome> {
        let outcome = deletion::delete_business(
            self.store.as_ref(),
            self.remover.as_ref(),
            &self.path_marker,
            business_id,
        )
        .await?;
        Ok(outcome)
    }

    pub async fn list_events(&self, business_id: Uuid) -> Result<Vec<Event>> {
        events::list_events(self.store.as_ref(), business_id).await
    }

    pub async fn add_event(&self, business_id: Uuid, input: NewEvent) -> Result<Event> {
        events::add_event(self.store.as_ref(), business_id, input).await
    }

    pub async fn delete_event(&self, event_id: Uuid) -> Result<()> {
        events::delete_event(self.store.as_ref(), event_id).await
    }
}
