//! Page-load flows shared by the public site. Each one is a single fetch
//! per collection with no retry: a failed fetch degrades to an empty
//! collection and the page renders its "no results" state. Loading state is
//! driven by the futures themselves, never by timers.

use crate::catalog::{self, Partition, QueryState};
use crate::models::{Article, StaticPage, Vehicle};
use crate::search::{self, SearchEntry};
use crate::store::{RecordStore, StoreError};
use tracing::warn;

/// Everything the vehicles page needs to render.
#[derive(Debug)]
pub struct VehiclesPage {
    pub vehicles: Vec<Vehicle>,
    /// How many records exist before filtering, for the "showing X of Y"
    /// line.
    pub total: usize,
}

/// Everything the articles page needs to render.
#[derive(Debug)]
pub struct ArticlesPage {
    pub articles: Partition<Article>,
    pub total: usize,
}

/// Featured strips for the homepage carousel and article section.
#[derive(Debug)]
pub struct HomePage {
    pub featured_vehicles: Vec<Vehicle>,
    pub featured_articles: Vec<Article>,
}

fn fetch_or_empty<T>(result: Result<Vec<T>, StoreError>, what: &str) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(err) => {
            warn!("Failed to fetch {}: {}", what, err);
            Vec::new()
        }
    }
}

/// Load and query the vehicle catalog.
pub async fn load_vehicles_page(store: &dyn RecordStore, state: &QueryState) -> VehiclesPage {
    let all = fetch_or_empty(store.list_vehicles().await, "vehicles");
    let total = all.len();
    VehiclesPage {
        vehicles: catalog::query(&all, state),
        total,
    }
}

/// Load, query, and partition the articles listing.
pub async fn load_articles_page(store: &dyn RecordStore, state: &QueryState) -> ArticlesPage {
    let all = fetch_or_empty(store.list_articles().await, "articles");
    let total = all.len();
    let filtered = catalog::query(&all, state);
    ArticlesPage {
        articles: catalog::partition(&filtered),
        total,
    }
}

/// Load the homepage's featured strips. The two fetches run concurrently
/// and there is no ordering guarantee between them.
pub async fn load_home_page(store: &dyn RecordStore) -> HomePage {
    let (vehicles, articles) = tokio::join!(store.list_vehicles(), store.list_articles());
    let vehicles = fetch_or_empty(vehicles, "vehicles");
    let articles = fetch_or_empty(articles, "articles");
    HomePage {
        featured_vehicles: catalog::partition(&vehicles).featured,
        featured_articles: catalog::partition(&articles).featured,
    }
}

/// Single-vehicle lookup for the detail page. `NotFound` flows through so
/// the caller can render the dedicated not-found view.
pub async fn load_vehicle_detail(
    store: &dyn RecordStore,
    id: i64,
) -> Result<Vehicle, StoreError> {
    store.get_vehicle(id).await
}

/// Single-article lookup for the detail page.
pub async fn load_article_detail(
    store: &dyn RecordStore,
    id: i64,
) -> Result<Article, StoreError> {
    store.get_article(id).await
}

/// Build the global search index for a search session. Both collections are
/// fetched concurrently and the index only exists once both have resolved;
/// there is no partial-index fallback.
pub async fn load_search_index(
    store: &dyn RecordStore,
    pages: &[StaticPage],
) -> Vec<SearchEntry> {
    let (vehicles, articles) = tokio::join!(store.list_vehicles(), store.list_articles());
    let vehicles = fetch_or_empty(vehicles, "vehicles");
    let articles = fetch_or_empty(articles, "articles");
    search::build_index(&vehicles, &articles, pages)
}
