use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::BizdirConfig;

/// Ask the store to echo the created row back on insert.
const PREFER_REPRESENTATION: &str = "return=representation";

/// Suppress response bodies for mutations where we only care about status.
const PREFER_MINIMAL: &str = "return=minimal";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("store returned no row where one was expected")]
    EmptyResponse,
}

/// HTTP client for the managed platform's REST surface.
///
/// Every request carries the anon API key plus a bearer credential (the
/// signed-in user's access token when present). Row-level ownership is
/// enforced by the store's access policies, never here.
pub struct RestClient {
    http: Client,
    rest_url: String,
    anon_key: String,
    bearer: String,
}

impl RestClient {
    pub fn new(config: &BizdirConfig) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let rest_url = config.rest_url();
        info!("RestClient created for {}", rest_url);

        Ok(Self {
            http,
            rest_url,
            anon_key: config.anon_key.clone(),
            bearer: config.bearer_token().to_string(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.bearer)
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Api { status, message })
    }

    /// Fetch rows from `table`, filtered by PostgREST-style query pairs
    /// such as `("business_id", "eq.<uuid>")` or `("order", "created_at.desc")`.
    pub async fn select<T>(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        debug!("select from {} with {:?}", table, query);
        let response = self.request(Method::GET, table).query(query).send().await?;
        let rows = Self::check(response).await?.json::<Vec<T>>().await?;
        Ok(rows)
    }

    /// Insert one row into `table` and return the stored representation.
    pub async fn insert<T, B>(&self, table: &str, body: &B) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        debug!("insert into {}", table);
        let response = self
            .request(Method::POST, table)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&[body])
            .send()
            .await?;
        let mut rows = Self::check(response).await?.json::<Vec<T>>().await?;
        rows.pop().ok_or(StoreError::EmptyResponse)
    }

    /// Delete rows from `table` matching the given filters.
    pub async fn delete(&self, table: &str, query: &[(&str, &str)]) -> Result<(), StoreError> {
        debug!("delete from {} with {:?}", table, query);
        let response = self
            .request(Method::DELETE, table)
            .header("Prefer", PREFER_MINIMAL)
            .query(query)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
