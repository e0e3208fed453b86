use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::error::{BizdirError, Result};
use crate::{DEFAULT_PHOTOS_BUCKET, DEFAULT_TIMEOUT_SECS, DELETE_PHOTO_FN_PATH, REST_PATH};

/// Connection settings for the managed backend platform.
///
/// The auth session itself is bootstrapped elsewhere; this config only
/// carries the anon API key and, once a user is signed in, their access
/// token. Row ownership is enforced by the store's policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BizdirConfig {
    /// Project base URL, e.g. `https://abcd1234.example-platform.co`.
    pub base_url: Url,
    /// Anon API key sent with every request.
    pub anon_key: String,
    /// Access token of the signed-in user, when available.
    pub access_token: Option<String>,
    /// Override for the file-removal function URL. When unset the endpoint
    /// is derived from `base_url`.
    pub delete_fn_url: Option<Url>,
    /// Storage bucket holding photo files.
    pub photos_bucket: String,
    /// Request timeout in seconds for all remote calls.
    pub timeout_secs: u64,
}

impl BizdirConfig {
    pub fn new(base_url: Url, anon_key: impl Into<String>) -> Self {
        Self {
            base_url,
            anon_key: anon_key.into(),
            access_token: None,
            delete_fn_url: None,
            photos_bucket: DEFAULT_PHOTOS_BUCKET.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build a config from `BIZDIR_*` environment variables.
    ///
    /// `BIZDIR_API_URL` and `BIZDIR_ANON_KEY` are required; the rest are
    /// optional overrides.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BIZDIR_API_URL")
            .map_err(|_| BizdirError::Config("BIZDIR_API_URL is not set".to_string()))?;
        let base_url: Url = base_url
            .parse()
            .map_err(|e| BizdirError::Config(format!("BIZDIR_API_URL is not a valid URL: {}", e)))?;
        let anon_key = std::env::var("BIZDIR_ANON_KEY")
            .map_err(|_| BizdirError::Config("BIZDIR_ANON_KEY is not set".to_string()))?;

        let mut config = Self::new(base_url, anon_key);

        if let Ok(token) = std::env::var("BIZDIR_ACCESS_TOKEN") {
            config.access_token = Some(token);
        }
        if let Ok(url) = std::env::var("BIZDIR_DELETE_URL") {
            let url: Url = url.parse().map_err(|e| {
                BizdirError::Config(format!("BIZDIR_DELETE_URL is not a valid URL: {}", e))
            })?;
            config.delete_fn_url = Some(url);
        }
        if let Ok(bucket) = std::env::var("BIZDIR_PHOTOS_BUCKET") {
            config.photos_bucket = bucket;
        }

        Ok(config)
    }

    /// Base of the record store's REST surface.
    pub fn rest_url(&self) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), REST_PATH)
    }

    /// URL of the file-removal function, explicit override or derived.
    pub fn delete_endpoint(&self) -> String {
        match &self.delete_fn_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => format!(
                "{}{}",
                self.base_url.as_str().trim_end_matches('/'),
                DELETE_PHOTO_FN_PATH
            ),
        }
    }

    /// Marker used to locate the storage path inside a photo URL.
    pub fn path_marker(&self) -> String {
        format!("{}/", self.photos_bucket)
    }

    /// Token sent as the bearer credential: the user's access token when
    /// signed in, the anon key otherwise.
    pub fn bearer_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }
}

impl Default for BizdirConfig {
    fn default() -> Self {
        let base_url = "http://localhost:54321"
            .parse()
            .expect("default base URL is valid");
        Self::new(base_url, "anon")
    }
}
