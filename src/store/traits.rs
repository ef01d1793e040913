use crate::models::{Article, ArticleDraft, Vehicle, VehicleDraft};
use crate::store::error::StoreError;
use async_trait::async_trait;

/// Read/write access to the hosted listing tables.
///
/// The catalog only ever reads; the write half is reserved for the admin
/// back office. Keeping both behind one trait lets tests swap in an
/// in-memory double for the whole flow.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All vehicle rows, newest first.
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, StoreError>;

    /// All article rows, newest first.
    async fn list_articles(&self) -> Result<Vec<Article>, StoreError>;

    /// Single vehicle by id; `StoreError::NotFound` on a miss.
    async fn get_vehicle(&self, id: i64) -> Result<Vehicle, StoreError>;

    /// Single article by id; `StoreError::NotFound` on a miss.
    async fn get_article(&self, id: i64) -> Result<Article, StoreError>;

    async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, StoreError>;

    async fn update_vehicle(&self, id: i64, draft: &VehicleDraft) -> Result<Vehicle, StoreError>;

    async fn delete_vehicle(&self, id: i64) -> Result<(), StoreError>;

    async fn create_article(&self, draft: &ArticleDraft) -> Result<Article, StoreError>;

    async fn update_article(&self, id: i64, draft: &ArticleDraft) -> Result<Article, StoreError>;

    async fn delete_article(&self, id: i64) -> Result<(), StoreError>;
}
