//! # Order Sink
//!
//! Submits finished checkouts to the backend.
//!
//! The sink receives an [`OrderDraft`] exactly as the cart produced it:
//! contact fields plus `(product_id, quantity)` pairs. The backend is
//! authoritative for pricing; the client's snapshot totals are display
//! only and never sent.
//!
//! A submission either returns the recorded [`Order`] or an error the
//! checkout folds into one `Failed(reason)` with retry available. The
//! sink itself makes exactly one attempt per call; retry is always an
//! explicit user action upstream.

use async_trait::async_trait;
use shopfront_core::{Order, OrderDraft};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Where finished checkouts go.
#[async_trait]
pub trait OrderSink {
    /// Submits `draft` as an order against the storefront at `slug`.
    async fn submit(&self, slug: &str, draft: &OrderDraft) -> ApiResult<Order>;
}

#[async_trait]
impl OrderSink for ApiClient {
    async fn submit(&self, slug: &str, draft: &OrderDraft) -> ApiResult<Order> {
        self.post_json(&format!("/orders/{}", slug), draft, None)
            .await
    }
}
