use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inventory category a vehicle is filed under.
///
/// Wire values are the lowercase keys used by the hosted store. Unknown
/// values deserialize to `Other` so a listing with a category outside the
/// fixed set still shows up in result sets (it just lands in the "Other"
/// display bucket and never matches a specific category filter).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sedans,
    Sports,
    Suvs,
    Electric,
    Trucks,
    Classics,
    #[serde(other)]
    Other,
}

impl VehicleCategory {
    /// Filter key as it appears in query strings and select inputs.
    pub fn key(&self) -> &'static str {
        match self {
            VehicleCategory::Sedans => "sedans",
            VehicleCategory::Sports => "sports",
            VehicleCategory::Suvs => "suvs",
            VehicleCategory::Electric => "electric",
            VehicleCategory::Trucks => "trucks",
            VehicleCategory::Classics => "classics",
            VehicleCategory::Other => "other",
        }
    }

    /// Human-readable label for cards and search results.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Sedans => "Sedans",
            VehicleCategory::Sports => "Sports",
            VehicleCategory::Suvs => "SUVs",
            VehicleCategory::Electric => "Electric",
            VehicleCategory::Trucks => "Trucks",
            VehicleCategory::Classics => "Classics",
            VehicleCategory::Other => "Other",
        }
    }
}

/// Promotional badge shown on a vehicle card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Badge {
    #[serde(rename = "New Arrival")]
    NewArrival,
    Popular,
    Limited,
    Electric,
    Performance,
    Exotic,
    Luxury,
    #[serde(rename = "Off-Road")]
    OffRoad,
}

/// Drivetrain layout, stored exactly as displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Drivetrain {
    RWD,
    FWD,
    AWD,
    #[serde(rename = "4WD")]
    FourWd,
}

/// A vehicle listing row from the hosted store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub category: VehicleCategory,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub badge: Option<Badge>,
    pub year: i32,
    pub mileage: u32,
    #[serde(default)]
    pub horsepower: Option<f64>,
    #[serde(default)]
    pub acceleration: Option<String>,
    #[serde(default)]
    pub mpg: Option<String>,
    #[serde(default)]
    pub drivetrain: Option<Drivetrain>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// An article/blog row from the hosted store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or replacing a vehicle row. The `image` URL is filled
/// in by the admin flow once the upload has succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub category: VehicleCategory,
    pub price: f64,
    pub image: String,
    pub badge: Option<Badge>,
    pub year: i32,
    pub mileage: u32,
    pub horsepower: Option<f64>,
    pub acceleration: Option<String>,
    pub mpg: Option<String>,
    pub drivetrain: Option<Drivetrain>,
    pub featured: bool,
}

/// Fields for creating or replacing an article row.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
}

/// A static informational page that participates in global search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPage {
    pub title: String,
    pub url: String,
}

/// Lowercase a display category into its filter key
/// ("Buying Guide" -> "buying-guide").
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Common view of anything the catalog engine can filter, sort, and
/// partition. Implemented by vehicles and articles; the engine never needs
/// to know which one it is handling.
pub trait CatalogRecord: Clone {
    /// Primary display text (vehicle name / article title).
    fn title(&self) -> &str;

    /// Secondary text the free-text search also matches against
    /// (vehicle type / article excerpt).
    fn secondary_text(&self) -> Option<&str>;

    /// Whether this record belongs to the given category filter key.
    fn matches_category(&self, key: &str) -> bool;

    /// Listing price, when the record type has one.
    fn price(&self) -> Option<f64>;

    /// Model year, when the record type has one.
    fn year(&self) -> Option<i32>;

    fn featured(&self) -> bool;

    fn created_at(&self) -> DateTime<Utc>;
}

impl CatalogRecord for Vehicle {
    fn title(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.vehicle_type)
    }

    fn matches_category(&self, key: &str) -> bool {
        self.category.key() == key
    }

    fn price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CatalogRecord for Article {
    fn title(&self) -> &str {
        &self.title
    }

    fn secondary_text(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn matches_category(&self, key: &str) -> bool {
        self.category.as_deref().map(slugify).as_deref() == Some(key)
    }

    fn price(&self) -> Option<f64> {
        None
    }

    fn year(&self) -> Option<i32> {
        None
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
