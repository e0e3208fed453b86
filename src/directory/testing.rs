//! In-memory fakes for the store and remover seams, used by the workflow
//! and service tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::db::{DirectoryStore, StoreError};
use crate::models::{Business, BusinessRow, Event, EventRow, Photo};
use crate::storage::{FileRemover, RemovalError};

fn induced_store_failure() -> StoreError {
    StoreError::Api {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "induced failure".to_string(),
    }
}

pub fn sample_business() -> Business {
    Business {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: "Casa Azul".to_string(),
        category: "restaurants".to_string(),
        location: Some("Mexico City".to_string()),
        description: None,
        phone: None,
        website: None,
        hours: None,
        tour_3d_url: None,
        coordinates: None,
        created_at: Utc::now(),
    }
}

pub fn sample_photo(business_id: Uuid, url: &str) -> Photo {
    Photo {
        id: Uuid::new_v4(),
        business_id,
        url: url.to_string(),
    }
}

#[derive(Default)]
pub struct FakeStore {
    businesses: Mutex<Vec<Business>>,
    photos: Mutex<Vec<Photo>>,
    events: Mutex<Vec<Event>>,
    fail_photo_list: bool,
    fail_photo_bulk_delete: bool,
    fail_business_delete: bool,
    bulk_photo_deletes: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_business(self, business: Business) -> Self {
        self.businesses.lock().unwrap().push(business);
        self
    }

    pub fn with_photo(self, photo: Photo) -> Self {
        self.photos.lock().unwrap().push(photo);
        self
    }

    pub fn failing_photo_list(mut self) -> Self {
        self.fail_photo_list = true;
        self
    }

    pub fn failing_photo_bulk_delete(mut self) -> Self {
        self.fail_photo_bulk_delete = true;
        self
    }

    pub fn failing_business_delete(mut self) -> Self {
        self.fail_business_delete = true;
        self
    }

    pub fn business_count(&self) -> usize {
        self.businesses.lock().unwrap().len()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.lock().unwrap().len()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn bulk_photo_delete_count(&self) -> usize {
        self.bulk_photo_deletes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DirectoryStore for FakeStore {
    async fn businesses_for_user(&self, user_id: Uuid) -> Result<Vec<Business>, StoreError> {
        let mut rows: Vec<Business> = self
            .businesses
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_business(&self, row: &BusinessRow) -> Result<Business, StoreError> {
        let business = Business {
            id: Uuid::new_v4(),
            user_id: row.user_id,
            name: row.name.clone(),
            category: row.category.clone(),
            location: row.location.clone(),
            description: row.description.clone(),
            phone: row.phone.clone(),
            website: row.website.clone(),
            hours: row.hours.clone(),
            tour_3d_url: row.tour_3d_url.clone(),
            coordinates: row.coordinates,
            created_at: Utc::now(),
        };
        self.businesses.lock().unwrap().push(business.clone());
        Ok(business)
    }

    async fn delete_business(&self, business_id: Uuid) -> Result<(), StoreError> {
        if self.fail_business_delete {
            return Err(induced_store_failure());
        }
        self.businesses.lock().unwrap().retain(|b| b.id != business_id);
        Ok(())
    }

    async fn photos_for_business(&self, business_id: Uuid) -> Result<Vec<Photo>, StoreError> {
        if self.fail_photo_list {
            return Err(induced_store_failure());
        }
        Ok(self
            .photos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn delete_photos_for_business(&self, business_id: Uuid) -> Result<(), StoreError> {
        self.bulk_photo_deletes.fetch_add(1, Ordering::Relaxed);
        if self.fail_photo_bulk_delete {
            return Err(induced_store_failure());
        }
        self.photos.lock().unwrap().retain(|p| p.business_id != business_id);
        Ok(())
    }

    async fn events_for_business(&self, business_id: Uuid) -> Result<Vec<Event>, StoreError> {
        let mut rows: Vec<Event> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.business_id == business_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.event_date.cmp(&b.event_date));
        Ok(rows)
    }

    async fn insert_event(&self, row: &EventRow) -> Result<Event, StoreError> {
        let event = Event {
            id: Uuid::new_v4(),
            business_id: row.business_id,
            title: row.title.clone(),
            description: row.description.clone(),
            location: row.location.clone(),
            event_date: row.event_date,
            created_at: Utc::now(),
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), StoreError> {
        self.events.lock().unwrap().retain(|e| e.id != event_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeRemover {
    failing: HashSet<Uuid>,
    calls: Mutex<Vec<(Uuid, String)>>,
}

impl FakeRemover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, photo_id: Uuid) -> Self {
        self.failing.insert(photo_id);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, p)| p.clone()).collect()
    }
}

#[async_trait]
impl FileRemover for FakeRemover {
    async fn remove(&self, photo_id: Uuid, storage_path: &str) -> Result<(), RemovalError> {
        self.calls
            .lock()
            .unwrap()
            .push((photo_id, storage_path.to_string()));
        if self.failing.contains(&photo_id) {
            return Err(RemovalError::Endpoint {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "induced failure".to_string(),
            });
        }
        Ok(())
    }
}
