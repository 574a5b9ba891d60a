//! # Merchant API
//!
//! The authenticated dashboard surface: a merchant's own page, its
//! products, and the orders customers have placed against it.
//!
//! ## Ownership Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Merchant, One Page                             │
//! │                                                                         │
//! │  fetch_my_page ──► 404 ──► "no page yet" (dashboard onboarding state)  │
//! │                └─► 200 ──► the page, with products                     │
//! │                                                                         │
//! │  create_page ────► rejected once a page exists                         │
//! │  update_page ────► PUT /pages/me (no id; "my page" is unambiguous)     │
//! │                                                                         │
//! │  products belong to the caller's page; the backend enforces            │
//! │  ownership on update/delete, surfacing as Unauthorized/NotFound        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method takes `&AuthSession` explicitly.

use async_trait::async_trait;
use serde::Serialize;
use shopfront_core::money::{serde_major, serde_major_opt};
use shopfront_core::{Money, Order, Page, Product};

use crate::auth::AuthSession;
use crate::client::ApiClient;
use crate::error::ApiResult;

// =============================================================================
// Request DTOs
// =============================================================================

/// Request body for `POST /pages/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    pub title: String,
    pub description: Option<String>,
}

/// Request body for `PUT /pages/me`. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for `POST /products/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    /// Serialized as a decimal amount on the wire.
    #[serde(with = "serde_major")]
    pub price: Money,
}

/// Request body for `PUT /products/{id}`. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "serde_major_opt", skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

// =============================================================================
// MerchantApi
// =============================================================================

/// The dashboard's view of the backend.
///
/// A trait seam so the dashboard session can be driven by a mock in
/// tests. [`ApiClient`] is the production implementation.
#[async_trait]
pub trait MerchantApi {
    /// Fetches the caller's page. `NotFound` means "no page yet", which
    /// the dashboard treats as a state rather than a failure.
    async fn fetch_my_page(&self, session: &AuthSession) -> ApiResult<Page>;

    /// Creates the caller's page. Rejected if one already exists.
    async fn create_page(&self, session: &AuthSession, page: &NewPage) -> ApiResult<Page>;

    /// Updates the caller's page in place.
    async fn update_page(&self, session: &AuthSession, update: &PageUpdate) -> ApiResult<Page>;

    /// Adds a product to the caller's page.
    async fn create_product(
        &self,
        session: &AuthSession,
        product: &NewProduct,
    ) -> ApiResult<Product>;

    /// Updates one of the caller's products.
    async fn update_product(
        &self,
        session: &AuthSession,
        product_id: i64,
        update: &ProductUpdate,
    ) -> ApiResult<Product>;

    /// Deletes one of the caller's products, returning it as it stood.
    async fn delete_product(&self, session: &AuthSession, product_id: i64) -> ApiResult<Product>;

    /// Fetches the orders placed against the caller's page, newest first.
    async fn fetch_my_orders(&self, session: &AuthSession) -> ApiResult<Vec<Order>>;
}

#[async_trait]
impl MerchantApi for ApiClient {
    async fn fetch_my_page(&self, session: &AuthSession) -> ApiResult<Page> {
        self.get_json("/pages/me", Some(session)).await
    }

    async fn create_page(&self, session: &AuthSession, page: &NewPage) -> ApiResult<Page> {
        self.post_json("/pages/", page, Some(session)).await
    }

    async fn update_page(&self, session: &AuthSession, update: &PageUpdate) -> ApiResult<Page> {
        self.put_json("/pages/me", update, Some(session)).await
    }

    async fn create_product(
        &self,
        session: &AuthSession,
        product: &NewProduct,
    ) -> ApiResult<Product> {
        self.post_json("/products/", product, Some(session)).await
    }

    async fn update_product(
        &self,
        session: &AuthSession,
        product_id: i64,
        update: &ProductUpdate,
    ) -> ApiResult<Product> {
        self.put_json(&format!("/products/{}", product_id), update, Some(session))
            .await
    }

    async fn delete_product(&self, session: &AuthSession, product_id: i64) -> ApiResult<Product> {
        self.delete_json(&format!("/products/{}", product_id), Some(session))
            .await
    }

    async fn fetch_my_orders(&self, session: &AuthSession) -> ApiResult<Vec<Order>> {
        self.get_json("/orders/my-orders", Some(session)).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
