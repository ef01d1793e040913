use showroom::catalog::{self, QueryState, SortKey};
use showroom::models::{Article, Vehicle};
use showroom::search;
use showroom::store::{fixtures, RecordStore, StoreConfig, SupabaseStore};
use tracing::{info, warn, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🚗 Showroom - Dealership Catalog");
    info!("================================");
    info!("");

    let (vehicles, articles) = load_records().await?;

    // Run a catalog query the way the vehicles page does
    let state = QueryState {
        sort: SortKey::PriceLow,
        ..Default::default()
    };
    let results = catalog::query(&vehicles, &state);

    info!("✅ Showing {} of {} vehicles\n", results.len(), vehicles.len());

    for (i, vehicle) in results.iter().enumerate() {
        println!(
            "{}. {} (${})",
            i + 1,
            vehicle.name,
            vehicle.price as i64
        );
        println!("   {} • {} • {} miles", vehicle.vehicle_type, vehicle.year, vehicle.mileage);
        println!("   Category: {}", vehicle.category.label());
        println!("   ID: {}", vehicle.id);
        println!();
    }

    // Featured partition, as used by the homepage carousel
    let featured = catalog::partition(&vehicles);
    info!(
        "Featured: {} vehicles, regular: {}",
        featured.featured.len(),
        featured.regular.len()
    );

    // Global search session across vehicles, articles, and static pages
    let index = search::build_index(&vehicles, &articles, &fixtures::static_pages());
    let hits = search::search(&index, "electric");
    info!("Search for \"electric\" returned {} results", hits.len());
    for hit in &hits {
        println!("   [{:?}] {} -> {}", hit.kind, hit.title, hit.target_url);
    }

    // Save the query results to a JSON file
    let json = serde_json::to_string_pretty(&results)?;
    tokio::fs::write("catalog.json", json).await?;
    info!("💾 Saved query results to catalog.json");

    Ok(())
}

/// Fetch from the hosted store when it is configured, otherwise fall back to
/// the seed fixtures so the demo still has something to show.
async fn load_records() -> anyhow::Result<(Vec<Vehicle>, Vec<Article>)> {
    match StoreConfig::from_env() {
        Ok(config) => {
            info!("Fetching records from {}", config.base_url);
            let store = SupabaseStore::new(config)?;
            let (vehicles, articles) =
                tokio::join!(store.list_vehicles(), store.list_articles());
            let vehicles = vehicles.unwrap_or_else(|err| {
                warn!("Failed to fetch vehicles: {}", err);
                Vec::new()
            });
            let articles = articles.unwrap_or_else(|err| {
                warn!("Failed to fetch articles: {}", err);
                Vec::new()
            });
            Ok((vehicles, articles))
        }
        Err(err) => {
            warn!("Record store not configured ({}), using seed fixtures", err);
            Ok((fixtures::seed_vehicles(), fixtures::seed_articles()))
        }
    }
}
