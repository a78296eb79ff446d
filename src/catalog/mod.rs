// Extension catalog API module.
// Provides the client and types for the extensions.gnome.org query endpoint.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{CATALOG_BASE_URL, CatalogClient};
pub use types::*;
