//! Product catalog: HTTP fetch and record validation

pub mod client;
pub mod types;

pub use client::CatalogClient;
pub use types::{validate_products, ProductRecord, RawProduct, Rating};
