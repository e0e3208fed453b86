use chrono::Utc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::models::{DeletionError, DeletionOutcome, FileRemoval, PhotoCleanup};
use crate::db::DirectoryStore;
use crate::storage::{storage_path_from_url, FileRemover};

/// Remove a business together with its dependent photos.
///
/// Dependents go first so that a crash mid-workflow leaves orphaned
/// files or records pointing at a still-existing business, which a re-run
/// can clean up. The reverse order would strand storage files with no
/// record left to find them by.
///
/// Failure semantics: listing the photos and deleting the business record
/// are fatal; every per-photo removal failure and a failed bulk delete of
/// photo records are logged and tolerated. No step is retried. The managed
/// services offer no cross-service transaction, so this is deliberately
/// best-effort compensation, not two-phase commit.
pub async fn delete_business<S, R>(
    store: &S,
    remover: &R,
    marker: &str,
    business_id: Uuid,
) -> Result<DeletionOutcome, DeletionError>
where
    S: DirectoryStore + ?Sized,
    R: FileRemover + ?Sized,
{
    info!("starting deletion of business {}", business_id);

    // Step 1: enumerate dependents. Nothing has been mutated yet, so a
    // failure here aborts the whole workflow.
    let photos = store
        .photos_for_business(business_id)
        .await
        .map_err(|source| {
            error!("could not list photos for business {}: {}", business_id, source);
            DeletionError::EnumeratePhotos {
                business_id,
                source,
            }
        })?;

    debug!("found {} photos to clean up for business {}", photos.len(), business_id);

    let mut cleanups = Vec::with_capacity(photos.len());
    let mut photo_records_deleted = true;

    if !photos.is_empty() {
        // Step 2: best-effort remote file removal, one photo at a time. A
        // failed or skipped removal never aborts the loop.
        for photo in &photos {
            let file = match storage_path_from_url(&photo.url, marker) {
                None => {
                    warn!(
                        "photo {} url has no '{}' marker, skipping file removal: {}",
                        photo.id, marker, photo.url
                    );
                    FileRemoval::SkippedNoMarker
                }
                Some(path) => match remover.remove(photo.id, path).await {
                    Ok(()) => {
                        debug!("removed file for photo {}", photo.id);
                        FileRemoval::Removed
                    }
                    Err(e) => {
                        warn!("failed to remove file for photo {}: {}", photo.id, e);
                        FileRemoval::Failed(e.to_string())
                    }
                },
            };
            cleanups.push(PhotoCleanup {
                photo_id: photo.id,
                url: photo.url.clone(),
                file,
            });
        }

        // Step 3: bulk delete of the photo records. A failure must not
        // leave the business undeletable, so it is tolerated too.
        if let Err(e) = store.delete_photos_for_business(business_id).await {
            warn!(
                "could not clean up photo records for business {}: {}",
                business_id, e
            );
            photo_records_deleted = false;
        }
    }

    // Step 4: the parent record. This is the one mutation the caller
    // actually asked for; failure here fails the operation even though
    // dependents may already be gone.
    store.delete_business(business_id).await.map_err(|source| {
        error!("failed to delete business {}: {}", business_id, source);
        DeletionError::DeleteBusiness {
            business_id,
            source,
        }
    })?;

    let outcome = DeletionOutcome {
        business_id,
        photos: cleanups,
        photo_records_deleted,
        completed_at: Utc::now(),
    };

    info!(
        "business {} deleted ({} photos processed, {} files not removed)",
        business_id,
        outcome.photos.len(),
        outcome.files_not_removed()
    );

    Ok(outcome)
}
