//! # Catalog Source
//!
//! The public, read-only view of a merchant's storefront.
//!
//! One slug, one storefront: `fetch_catalog("chai-stall")` returns the
//! page title, description, and product list a visitor sees. No auth.
//! A missing or typo'd slug comes back as `ApiError::NotFound`, which
//! the storefront session renders as its not-found view.

use async_trait::async_trait;
use shopfront_core::Storefront;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Where storefront catalogs come from.
///
/// The session layer depends on this trait, not on [`ApiClient`], so it
/// can be tested against canned catalogs without a network.
#[async_trait]
pub trait CatalogSource {
    /// Fetches the storefront published under `slug`.
    async fn fetch_catalog(&self, slug: &str) -> ApiResult<Storefront>;
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn fetch_catalog(&self, slug: &str) -> ApiResult<Storefront> {
        self.get_json(&format!("/pages/{}", slug), None).await
    }
}
