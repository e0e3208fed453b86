use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::Result;
use crate::db::DirectoryStore;
use crate::models::{Business, NewBusiness};

/// Businesses owned by `user_id`, newest first (ordering is done by the
/// store).
pub async fn list_businesses<S>(store: &S, user_id: Uuid) -> Result<Vec<Business>>
where
    S: DirectoryStore + ?Sized,
{
    let businesses = store.businesses_for_user(user_id).await?;
    debug!("listed {} businesses for user {}", businesses.len(), user_id);
    Ok(businesses)
}

/// Validate a listing form and insert the business for `user_id`.
pub async fn add_business<S>(store: &S, user_id: Uuid, input: NewBusiness) -> Result<Business>
where
    S: DirectoryStore + ?Sized,
{
    let row = input.into_row(user_id)?;
    let business = store.insert_business(&row).await?;
    info!("created business {} for user {}", business.id, user_id);
    Ok(business)
}
