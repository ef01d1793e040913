use crate::models::{Article, ArticleDraft, Vehicle, VehicleDraft};
use crate::store::error::{RecordKind, StoreError};
use crate::store::traits::RecordStore;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Connection details for the hosted backend.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    /// Read the backend location and anon key from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("SUPABASE_URL").context("SUPABASE_URL is not set")?;
        let api_key =
            std::env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY is not set")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// Record store backed by the hosted PostgREST API.
///
/// Reads go out with the anon key; after an admin signs in, the session's
/// access token takes its place in the bearer header so row-level security
/// applies to writes. No caching, no retries.
pub struct SupabaseStore {
    client: Client,
    config: StoreConfig,
    access_token: Option<String>,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            config,
            access_token: None,
        })
    }

    /// Use a signed-in admin session's access token for subsequent calls.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .access_token
            .as_deref()
            .unwrap_or(&self.config.api_key);
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(bearer)
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(StoreError::Backend {
            status,
            message: backend_message(response).await,
        })
    }

    async fn fetch_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        debug!("Fetching all rows from {}", table);
        let response = self
            .authed(self.client.get(self.table_url(table)))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn fetch_one<T: DeserializeOwned>(
        &self,
        table: &str,
        kind: RecordKind,
        id: i64,
    ) -> Result<T, StoreError> {
        debug!("Fetching {} {} from {}", kind, id, table);
        let id_filter = format!("eq.{id}");
        let response = self
            .authed(self.client.get(self.table_url(table)))
            .query(&[("select", "*"), ("id", id_filter.as_str())])
            .send()
            .await?;
        let rows: Vec<T> = Self::check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::NotFound { kind, id })
    }

    async fn insert_row<T, B>(&self, table: &str, draft: &B) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        debug!("Inserting row into {}", table);
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await?;
        let rows: Vec<T> = Self::check(response).await?.json().await?;
        rows.into_iter().next().ok_or(StoreError::Backend {
            status: StatusCode::OK,
            message: format!("insert into {table} returned no rows"),
        })
    }

    async fn update_row<T, B>(
        &self,
        table: &str,
        kind: RecordKind,
        id: i64,
        draft: &B,
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        debug!("Updating {} {} in {}", kind, id, table);
        let id_filter = format!("eq.{id}");
        let response = self
            .authed(self.client.patch(self.table_url(table)))
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await?;
        let rows: Vec<T> = Self::check(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::NotFound { kind, id })
    }

    async fn delete_row(&self, table: &str, id: i64) -> Result<(), StoreError> {
        debug!("Deleting row {} from {}", id, table);
        let id_filter = format!("eq.{id}");
        let response = self
            .authed(self.client.delete(self.table_url(table)))
            .query(&[("id", id_filter.as_str())])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of an error response body. PostgREST
/// and GoTrue use different field names, so try them in turn before falling
/// back to the raw body.
pub(crate) async fn backend_message(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        for field in ["message", "msg", "error_description", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, StoreError> {
        self.fetch_all("vehicles").await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
        self.fetch_all("articles").await
    }

    async fn get_vehicle(&self, id: i64) -> Result<Vehicle, StoreError> {
        self.fetch_one("vehicles", RecordKind::Vehicle, id).await
    }

    async fn get_article(&self, id: i64) -> Result<Article, StoreError> {
        self.fetch_one("articles", RecordKind::Article, id).await
    }

    async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, StoreError> {
        self.insert_row("vehicles", draft).await
    }

    async fn update_vehicle(&self, id: i64, draft: &VehicleDraft) -> Result<Vehicle, StoreError> {
        self.update_row("vehicles", RecordKind::Vehicle, id, draft)
            .await
    }

    async fn delete_vehicle(&self, id: i64) -> Result<(), StoreError> {
        self.delete_row("vehicles", id).await
    }

    async fn create_article(&self, draft: &ArticleDraft) -> Result<Article, StoreError> {
        self.insert_row("articles", draft).await
    }

    async fn update_article(&self, id: i64, draft: &ArticleDraft) -> Result<Article, StoreError> {
        self.update_row("articles", RecordKind::Article, id, draft)
            .await
    }

    async fn delete_article(&self, id: i64) -> Result<(), StoreError> {
        self.delete_row("articles", id).await
    }
}
