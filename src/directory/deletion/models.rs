use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::db::StoreError;

/// Result of the remote file-removal attempt for one photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileRemoval {
    /// The endpoint confirmed removal.
    Removed,
    /// The locator URL did not contain the bucket marker; no call was made.
    SkippedNoMarker,
    /// The endpoint or transport failed. One attempt only.
    Failed(String),
}

/// Per-photo cleanup record accumulated by the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCleanup {
    pub photo_id: Uuid,
    pub url: String,
    pub file: FileRemoval,
}

/// Aggregate result of a completed deletion.
///
/// Reaching this type means the business record is gone; the fields report
/// how clean the dependent cleanup was. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionOutcome {
    pub business_id: Uuid,
    pub photos: Vec<PhotoCleanup>,
    /// Whether the bulk delete of photo records succeeded. `true` when
    /// there were no photos to delete.
    pub photo_records_deleted: bool,
    pub completed_at: DateTime<Utc>,
}

impl DeletionOutcome {
    /// Number of photos whose remote file removal failed or was skipped.
    pub fn files_not_removed(&self) -> usize {
        self.photos
            .iter()
            .filter(|p| p.file != FileRemoval::Removed)
            .count()
    }

    /// True when every file was removed and all records were deleted.
    pub fn fully_clean(&self) -> bool {
        self.photo_records_deleted && self.files_not_removed() == 0
    }
}

/// Fatal failures of the deletion workflow. Everything else is logged and
/// tolerated.
#[derive(Debug, Error)]
pub enum DeletionError {
    #[error("failed to list photos for business {business_id}: {source}")]
    EnumeratePhotos {
        business_id: Uuid,
        source: StoreError,
    },

    #[error("failed to delete business {business_id}: {source}")]
    DeleteBusiness {
        business_id: Uuid,
        source: StoreError,
    },
}
