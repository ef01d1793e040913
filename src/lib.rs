//! Catalog toolkit for a dealership marketing site: listing records, the
//! pure query engine behind every listing page, the global search index,
//! and thin adapters for the hosted record/asset/auth backends.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod models;
pub mod search;
pub mod site;
pub mod store;
