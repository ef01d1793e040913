//! Admin back office flows: upload the image first, then write the record.
//! A failed upload aborts the write; nothing is retried.

use crate::models::{Article, ArticleDraft, Vehicle, VehicleDraft};
use crate::store::assets::{ARTICLE_IMAGE_BUCKET, VEHICLE_IMAGE_BUCKET};
use crate::store::{AssetStore, ImageUpload, RecordStore, StoreError};
use tracing::info;

/// Glue between the record store and the asset store for authenticated
/// staff. Construction is gated on a signed-in session by the caller.
pub struct AdminConsole<S, A> {
    store: S,
    assets: A,
}

impl<S: RecordStore, A: AssetStore> AdminConsole<S, A> {
    pub fn new(store: S, assets: A) -> Self {
        Self { store, assets }
    }

    /// Create a vehicle listing. The image is mandatory and is uploaded
    /// before the row is inserted.
    pub async fn add_vehicle(
        &self,
        mut draft: VehicleDraft,
        image: ImageUpload,
    ) -> Result<Vehicle, StoreError> {
        draft.image = self.assets.upload(VEHICLE_IMAGE_BUCKET, &image).await?;
        let vehicle = self.store.create_vehicle(&draft).await?;
        info!("Added vehicle {} ({})", vehicle.name, vehicle.id);
        Ok(vehicle)
    }

    /// Replace a vehicle listing. When a new image is supplied it is
    /// uploaded and its URL replaces the draft's; otherwise the existing
    /// URL on the draft is kept.
    pub async fn update_vehicle(
        &self,
        id: i64,
        mut draft: VehicleDraft,
        image: Option<ImageUpload>,
    ) -> Result<Vehicle, StoreError> {
        if let Some(image) = image {
            draft.image = self.assets.upload(VEHICLE_IMAGE_BUCKET, &image).await?;
        }
        let vehicle = self.store.update_vehicle(id, &draft).await?;
        info!("Updated vehicle {} ({})", vehicle.name, vehicle.id);
        Ok(vehicle)
    }

    pub async fn remove_vehicle(&self, id: i64) -> Result<(), StoreError> {
        self.store.delete_vehicle(id).await?;
        info!("Removed vehicle {}", id);
        Ok(())
    }

    /// Create an article. As with vehicles, the cover image is uploaded
    /// first and the insert only happens once the upload succeeded.
    pub async fn add_article(
        &self,
        mut draft: ArticleDraft,
        image: ImageUpload,
    ) -> Result<Article, StoreError> {
        draft.image = Some(self.assets.upload(ARTICLE_IMAGE_BUCKET, &image).await?);
        let article = self.store.create_article(&draft).await?;
        info!("Added article {} ({})", article.title, article.id);
        Ok(article)
    }

    pub async fn update_article(
        &self,
        id: i64,
        mut draft: ArticleDraft,
        image: Option<ImageUpload>,
    ) -> Result<Article, StoreError> {
        if let Some(image) = image {
            draft.image = Some(self.assets.upload(ARTICLE_IMAGE_BUCKET, &image).await?);
        }
        let article = self.store.update_article(id, &draft).await?;
        info!("Updated article {} ({})", article.title, article.id);
        Ok(article)
    }

    pub async fn remove_article(&self, id: i64) -> Result<(), StoreError> {
        self.store.delete_article(id).await?;
        info!("Removed article {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleCategory;
    use crate::store::error::RecordKind;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory record store double.
    #[derive(Default)]
    struct MemoryStore {
        vehicles: Mutex<Vec<Vehicle>>,
        articles: Mutex<Vec<Article>>,
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn list_vehicles(&self) -> Result<Vec<Vehicle>, StoreError> {
            Ok(self.vehicles.lock().unwrap().clone())
        }

        async fn list_articles(&self) -> Result<Vec<Article>, StoreError> {
            Ok(self.articles.lock().unwrap().clone())
        }

        async fn get_vehicle(&self, id: i64) -> Result<Vehicle, StoreError> {
            self.vehicles
                .lock()
                .unwrap()
                .iter()
                .find(|v| v.id == id)
                .cloned()
                .ok_or(StoreError::NotFound {
                    kind: RecordKind::Vehicle,
                    id,
                })
        }

        async fn get_article(&self, id: i64) -> Result<Article, StoreError> {
            self.articles
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or(StoreError::NotFound {
                    kind: RecordKind::Article,
                    id,
                })
        }

        async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, StoreError> {
            let mut vehicles = self.vehicles.lock().unwrap();
            let vehicle = Vehicle {
                id: vehicles.len() as i64 + 1,
                name: draft.name.clone(),
                vehicle_type: draft.vehicle_type.clone(),
                category: draft.category,
                price: draft.price,
                image: draft.image.clone(),
                badge: draft.badge,
                year: draft.year,
                mileage: draft.mileage,
                horsepower: draft.horsepower,
                acceleration: draft.acceleration.clone(),
                mpg: draft.mpg.clone(),
                drivetrain: draft.drivetrain,
                featured: draft.featured,
                created_at: Utc::now(),
            };
            vehicles.push(vehicle.clone());
            Ok(vehicle)
        }

        async fn update_vehicle(
            &self,
            id: i64,
            draft: &VehicleDraft,
        ) -> Result<Vehicle, StoreError> {
            let mut vehicles = self.vehicles.lock().unwrap();
            let vehicle = vehicles
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or(StoreError::NotFound {
                    kind: RecordKind::Vehicle,
                    id,
                })?;
            vehicle.name = draft.name.clone();
            vehicle.image = draft.image.clone();
            vehicle.price = draft.price;
            vehicle.featured = draft.featured;
            Ok(vehicle.clone())
        }

        async fn delete_vehicle(&self, id: i64) -> Result<(), StoreError> {
            self.vehicles.lock().unwrap().retain(|v| v.id != id);
            Ok(())
        }

        async fn create_article(&self, draft: &ArticleDraft) -> Result<Article, StoreError> {
            let mut articles = self.articles.lock().unwrap();
            let article = Article {
                id: articles.len() as i64 + 1,
                title: draft.title.clone(),
                excerpt: draft.excerpt.clone(),
                content: draft.content.clone(),
                category: draft.category.clone(),
                author: draft.author.clone(),
                image: draft.image.clone(),
                featured: draft.featured,
                created_at: Utc::now(),
            };
            articles.push(article.clone());
            Ok(article)
        }

        async fn update_article(
            &self,
            id: i64,
            draft: &ArticleDraft,
        ) -> Result<Article, StoreError> {
            let mut articles = self.articles.lock().unwrap();
            let article = articles
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(StoreError::NotFound {
                    kind: RecordKind::Article,
                    id,
                })?;
            article.title = draft.title.clone();
            article.image = draft.image.clone();
            article.featured = draft.featured;
            Ok(article.clone())
        }

        async fn delete_article(&self, id: i64) -> Result<(), StoreError> {
            self.articles.lock().unwrap().retain(|a| a.id != id);
            Ok(())
        }
    }

    /// Asset store double that records uploads or fails on demand.
    struct MemoryAssets {
        fail: bool,
        uploads: Mutex<Vec<String>>,
    }

    impl MemoryAssets {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                uploads: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AssetStore for MemoryAssets {
        async fn upload(&self, bucket: &str, image: &ImageUpload) -> Result<String, StoreError> {
            if self.fail {
                return Err(StoreError::Upload("bucket quota exceeded".to_string()));
            }
            let url = format!("https://cdn.test/{}/{}", bucket, image.file_name);
            self.uploads.lock().unwrap().push(url.clone());
            Ok(url)
        }
    }

    fn vehicle_draft() -> VehicleDraft {
        VehicleDraft {
            name: "Audi RS6 Avant".to_string(),
            vehicle_type: "Performance Wagon".to_string(),
            category: VehicleCategory::Sports,
            price: 126_500.0,
            image: String::new(),
            badge: None,
            year: 2024,
            mileage: 120,
            horsepower: Some(621.0),
            acceleration: Some("3.5s".to_string()),
            mpg: Some("17 MPG".to_string()),
            drivetrain: None,
            featured: false,
        }
    }

    fn image() -> ImageUpload {
        ImageUpload {
            file_name: "rs6.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    #[tokio::test]
    async fn add_vehicle_uploads_then_inserts_with_public_url() {
        let admin = AdminConsole::new(MemoryStore::default(), MemoryAssets::new(false));
        let vehicle = admin.add_vehicle(vehicle_draft(), image()).await.unwrap();
        assert_eq!(vehicle.image, "https://cdn.test/vehicles-images/rs6.jpg");
        assert_eq!(admin.store.list_vehicles().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_upload_blocks_the_insert() {
        let admin = AdminConsole::new(MemoryStore::default(), MemoryAssets::new(true));
        let err = admin
            .add_vehicle(vehicle_draft(), image())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Upload(_)));
        assert!(admin.store.list_vehicles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_without_new_image_keeps_existing_url() {
        let admin = AdminConsole::new(MemoryStore::default(), MemoryAssets::new(false));
        let created = admin.add_vehicle(vehicle_draft(), image()).await.unwrap();

        let mut draft = vehicle_draft();
        draft.image = created.image.clone();
        draft.price = 119_000.0;
        let updated = admin
            .update_vehicle(created.id, draft, None)
            .await
            .unwrap();
        assert_eq!(updated.image, created.image);
        assert_eq!(updated.price, 119_000.0);
        // Only the original upload happened.
        assert_eq!(admin.assets.uploads.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_with_new_image_replaces_url() {
        let admin = AdminConsole::new(MemoryStore::default(), MemoryAssets::new(false));
        let created = admin.add_vehicle(vehicle_draft(), image()).await.unwrap();

        let mut draft = vehicle_draft();
        draft.image = created.image.clone();
        let replacement = ImageUpload {
            file_name: "rs6-front.jpg".to_string(),
            ..image()
        };
        let updated = admin
            .update_vehicle(created.id, draft, Some(replacement))
            .await
            .unwrap();
        assert_eq!(
            updated.image,
            "https://cdn.test/vehicles-images/rs6-front.jpg"
        );
    }

    #[tokio::test]
    async fn remove_vehicle_deletes_the_row() {
        let admin = AdminConsole::new(MemoryStore::default(), MemoryAssets::new(false));
        let created = admin.add_vehicle(vehicle_draft(), image()).await.unwrap();
        admin.remove_vehicle(created.id).await.unwrap();
        assert!(matches!(
            admin.store.get_vehicle(created.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn add_article_uploads_cover_image() {
        let admin = AdminConsole::new(MemoryStore::default(), MemoryAssets::new(false));
        let draft = ArticleDraft {
            title: "Winter Tire Guide".to_string(),
            excerpt: Some("When to switch and what to buy.".to_string()),
            content: None,
            category: Some("Buying Guide".to_string()),
            author: Some("Sarah Johnson".to_string()),
            image: None,
            featured: false,
        };
        let article = admin
            .add_article(
                draft,
                ImageUpload {
                    file_name: "tires.jpg".to_string(),
                    ..image()
                },
            )
            .await
            .unwrap();
        assert_eq!(
            article.image.as_deref(),
            Some("https://cdn.test/articles-images/tires.jpg")
        );
    }
}
