use crate::store::error::StoreError;
use crate::store::supabase::{backend_message, StoreConfig};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Bucket holding vehicle card images.
pub const VEHICLE_IMAGE_BUCKET: &str = "vehicles-images";
/// Bucket holding article cover images.
pub const ARTICLE_IMAGE_BUCKET: &str = "articles-images";

/// An image picked by an admin, ready to upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Hosted object storage for listing images. Only the admin flows call
/// this, always before the matching record write.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload a file into a bucket and return its public URL.
    async fn upload(&self, bucket: &str, image: &ImageUpload) -> Result<String, StoreError>;
}

/// Asset store backed by the hosted storage API.
pub struct SupabaseAssets {
    client: Client,
    config: StoreConfig,
}

impl SupabaseAssets {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl AssetStore for SupabaseAssets {
    async fn upload(&self, bucket: &str, image: &ImageUpload) -> Result<String, StoreError> {
        // Millisecond suffix keeps repeated uploads of the same file name
        // from clobbering each other.
        let object_path = format!("{}-{}", image.file_name, Utc::now().timestamp_millis());
        debug!("Uploading {} bytes to {}/{}", image.bytes.len(), bucket, object_path);

        let response = self
            .client
            .post(format!(
                "{}/storage/v1/object/{}/{}",
                self.config.base_url, bucket, object_path
            ))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", &image.content_type)
            .body(image.bytes.clone())
            .send()
            .await
            .map_err(|e| StoreError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Upload(backend_message(response).await));
        }

        let public_url = format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.base_url, bucket, object_path
        );
        info!("Uploaded image to {}", public_url);
        Ok(public_url)
    }
}
