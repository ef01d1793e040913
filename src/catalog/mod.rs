//! The catalog query engine: pure filtering, sorting, and featured/regular
//! partitioning over listing records. Every listing surface (vehicles page,
//! articles page, home carousel) goes through `query` and `partition` so the
//! behavior is identical everywhere.

use crate::models::CatalogRecord;
use std::cmp::Ordering;

/// Category filter keys the UI actually offers. Anything else is treated as
/// "all" rather than silently matching nothing.
const KNOWN_CATEGORY_KEYS: &[&str] = &[
    // vehicle categories
    "sedans",
    "sports",
    "suvs",
    "electric",
    "trucks",
    "classics",
    // article categories
    "electric-vehicles",
    "maintenance",
    "buying-guide",
    "technology",
    "market-analysis",
    "sustainability",
];

/// Price bucket boundaries, in dollars. Buckets are inclusive of their lower
/// bound and exclusive of their upper bound, so exactly 100k lands in
/// 100k-200k and exactly 200k lands in over-200k.
const PRICE_BUCKET_LOW: f64 = 100_000.0;
const PRICE_BUCKET_HIGH: f64 = 200_000.0;

/// Category filter: either everything, or one recognized category key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Key(String),
}

impl CategoryFilter {
    /// Parse a raw filter value. Unrecognized keys fail open to `All`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if KNOWN_CATEGORY_KEYS.contains(&value) {
            CategoryFilter::Key(value.to_string())
        } else {
            CategoryFilter::All
        }
    }

    fn matches<R: CatalogRecord>(&self, record: &R) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Key(key) => record.matches_category(key),
        }
    }
}

/// Named price range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Under100k,
    From100kTo200k,
    Over200k,
}

impl PriceFilter {
    /// Parse a raw filter value. Unrecognized buckets fail open to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "under-100k" => PriceFilter::Under100k,
            "100k-200k" => PriceFilter::From100kTo200k,
            "over-200k" => PriceFilter::Over200k,
            _ => PriceFilter::All,
        }
    }

    fn matches(&self, price: Option<f64>) -> bool {
        match self {
            PriceFilter::All => true,
            // A record without a price cannot fall inside a named bucket.
            PriceFilter::Under100k => price.is_some_and(|p| p < PRICE_BUCKET_LOW),
            PriceFilter::From100kTo200k => {
                price.is_some_and(|p| p >= PRICE_BUCKET_LOW && p < PRICE_BUCKET_HIGH)
            }
            PriceFilter::Over200k => price.is_some_and(|p| p >= PRICE_BUCKET_HIGH),
        }
    }
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by title, comparing lowercased Unicode code points.
    #[default]
    Name,
    /// Ascending by price; records without a price sort last.
    PriceLow,
    /// Descending by price; records without a price sort last.
    PriceHigh,
    /// Descending by year (newest first); ties keep their input order.
    Year,
}

impl SortKey {
    /// Parse a raw sort value. Unrecognized keys fail open to `Name`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "name" => SortKey::Name,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "year" => SortKey::Year,
            _ => SortKey::Name,
        }
    }
}

/// Grid/list toggle. Presentation-only; it never affects query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "list" => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

/// Per-session query state owned by a listing page. Created fresh on
/// navigation and never persisted.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub search_text: String,
    pub category: CategoryFilter,
    pub price_range: PriceFilter,
    pub sort: SortKey,
    pub view_mode: ViewMode,
}

/// Run the full filter + sort pipeline over one collection of records.
///
/// Filtering is conjunctive across the category, price, and free-text
/// predicates; the text match is a trimmed, case-insensitive substring check
/// against the title and secondary text. The sort is stable, so records the
/// sort key cannot distinguish keep the store's newest-first order.
/// Identical inputs always produce identical output.
pub fn query<R: CatalogRecord>(records: &[R], state: &QueryState) -> Vec<R> {
    let needle = state.search_text.trim().to_lowercase();

    let mut results: Vec<R> = records
        .iter()
        .filter(|record| {
            state.category.matches(*record)
                && state.price_range.matches(record.price())
                && matches_text(*record, &needle)
        })
        .cloned()
        .collect();

    sort_records(&mut results, state.sort);
    results
}

fn matches_text<R: CatalogRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if record.title().to_lowercase().contains(needle) {
        return true;
    }
    record
        .secondary_text()
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

fn sort_records<R: CatalogRecord>(records: &mut [R], sort: SortKey) {
    match sort {
        SortKey::Name => {
            records.sort_by(|a, b| a.title().to_lowercase().cmp(&b.title().to_lowercase()));
        }
        SortKey::PriceLow => {
            records.sort_by(|a, b| compare_prices(a.price(), b.price(), false));
        }
        SortKey::PriceHigh => {
            records.sort_by(|a, b| compare_prices(a.price(), b.price(), true));
        }
        SortKey::Year => {
            records.sort_by(|a, b| match (a.year(), b.year()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
}

/// Compare optional prices. Missing prices order last regardless of
/// direction.
fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if descending {
                b.total_cmp(&a)
            } else {
                a.total_cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Result of splitting a collection on the `featured` flag.
#[derive(Debug, Clone)]
pub struct Partition<R> {
    pub featured: Vec<R>,
    pub regular: Vec<R>,
}

/// Split records into featured and regular lists, preserving relative order.
/// Every record lands in exactly one side.
pub fn partition<R: CatalogRecord>(records: &[R]) -> Partition<R> {
    let (featured, regular) = records
        .iter()
        .cloned()
        .partition(|record| record.featured());
    Partition { featured, regular }
}
