use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::BizdirConfig;

#[derive(Debug, Error)]
pub enum RemovalError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint rejected removal ({status}): {message}")]
    Endpoint { status: StatusCode, message: String },
}

/// Remote removal of a stored photo file.
///
/// One attempt per file, no retries; the deletion workflow treats every
/// failure here as non-fatal.
#[async_trait]
pub trait FileRemover: Send + Sync {
    async fn remove(&self, photo_id: Uuid, storage_path: &str) -> Result<(), RemovalError>;
}

#[async_trait]
impl FileRemover for Arc<dyn FileRemover> {
    async fn remove(&self, photo_id: Uuid, storage_path: &str) -> Result<(), RemovalError> {
        (**self).remove(photo_id, storage_path).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveFileBody<'a> {
    photo_id: Uuid,
    storage_path: &'a str,
}

/// Client for the platform's file-removal function.
///
/// Speaks the function's wire format: an HTTP `DELETE` with the anon key as
/// both bearer credential and `apikey` header, and a camelCase JSON body.
pub struct EdgeFunctionRemover {
    http: Client,
    endpoint: String,
    anon_key: String,
}

impl EdgeFunctionRemover {
    pub fn new(config: &BizdirConfig) -> Result<Self, RemovalError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = config.delete_endpoint();
        info!("EdgeFunctionRemover created for {}", endpoint);

        Ok(Self {
            http,
            endpoint,
            anon_key: config.anon_key.clone(),
        })
    }
}

#[async_trait]
impl FileRemover for EdgeFunctionRemover {
    async fn remove(&self, photo_id: Uuid, storage_path: &str) -> Result<(), RemovalError> {
        debug!("removing file {} for photo {}", storage_path, photo_id);

        let response = self
            .http
            .delete(&self.endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&RemoveFileBody {
                photo_id,
                storage_path,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemovalError::Endpoint { status, message });
        }

        debug!("file removed for photo {}", photo_id);
        Ok(())
    }
}
