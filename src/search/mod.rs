//! The global search index behind the site-wide search modal: a flattened
//! list of everything searchable (vehicles, articles, static pages) answered
//! by case-insensitive substring matching.

use crate::models::{Article, StaticPage, Vehicle};
use serde::Serialize;

/// What a search entry points at.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Vehicle,
    Article,
    Page,
}

/// A normalized, minimal representation of one searchable object.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEntry {
    pub kind: EntryKind,
    pub title: String,
    pub category: String,
    pub target_url: String,
}

/// Flatten the source collections into one index. A pure mapping; the index
/// is rebuilt whenever the sources change rather than maintained
/// incrementally.
pub fn build_index(
    vehicles: &[Vehicle],
    articles: &[Article],
    pages: &[StaticPage],
) -> Vec<SearchEntry> {
    let mut index = Vec::with_capacity(vehicles.len() + articles.len() + pages.len());

    for vehicle in vehicles {
        index.push(SearchEntry {
            kind: EntryKind::Vehicle,
            title: vehicle.name.clone(),
            category: vehicle.category.label().to_string(),
            target_url: format!("/vehicles/{}", vehicle.id),
        });
    }

    for article in articles {
        index.push(SearchEntry {
            kind: EntryKind::Article,
            title: article.title.clone(),
            category: article
                .category
                .clone()
                .unwrap_or_else(|| "Article".to_string()),
            target_url: format!("/articles/{}", article.id),
        });
    }

    for page in pages {
        index.push(SearchEntry {
            kind: EntryKind::Page,
            title: page.title.clone(),
            category: "Page".to_string(),
            target_url: page.url.clone(),
        });
    }

    index
}

/// Answer a search-modal query: entries whose title or category contains the
/// query, case-insensitively. An empty or all-whitespace query returns an
/// empty result set; the caller distinguishes "nothing typed yet" from "no
/// matches" by checking the query itself.
pub fn search(index: &[SearchEntry], query_text: &str) -> Vec<SearchEntry> {
    let needle = query_text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
