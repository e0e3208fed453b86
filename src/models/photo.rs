use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored photo referencing exactly one business.
///
/// `url` is the storage locator: a public URL that encodes the bucket name
/// and the object path inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: Uuid,
    pub business_id: Uuid,
    pub url: String,
}
