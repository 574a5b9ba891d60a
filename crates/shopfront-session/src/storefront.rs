//! # Storefront Session
//!
//! One customer browsing one public storefront: catalog, cart, checkout.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Session Flow                            │
//! │                                                                         │
//! │  open()                    set_quantity(id, qty)     submit_order()    │
//! │    │                              │                        │            │
//! │    ▼                              ▼                        ▼            │
//! │  CatalogState              resolve id against        begin_submission   │
//! │  Loading ─► Ready          the loaded catalog,             │            │
//! │          └► NotFound       snapshot into cart        OrderSink::submit  │
//! │          └► Failed                                         │            │
//! │                                             ┌──────────────┴────┐      │
//! │                                             ▼                   ▼      │
//! │                                     complete_success    complete_failure│
//! │                                     (cart emptied)      (cart intact)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! - One session per customer, owned exclusively: all methods take
//!   `&mut self` and there is nothing to lock.
//! - The catalog is fetched once at `open()` and never refetched; cart
//!   snapshots make stale prices harmless.
//! - At most one order submission is in flight, enforced by the checkout
//!   state machine before any sink call is made.
//! - If the caller drops a `submit_order` future mid-flight (navigation),
//!   the state stays `Submitting` and the response is simply never
//!   recorded. That matches discarding a stale completion.

use tracing::{debug, info, warn};
use uuid::Uuid;

use shopfront_client::{CatalogSource, OrderSink};
use shopfront_core::{Checkout, Money, Order, Storefront};

use crate::error::{SessionError, SessionResult};

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// `open()` has not completed yet.
    Loading,

    /// The storefront is live and browsable.
    Ready(Storefront),

    /// No storefront is published under this slug.
    NotFound,

    /// The catalog could not be loaded.
    Failed(String),
}

/// One customer's browsing session against one storefront slug.
pub struct StorefrontSession<C, S> {
    /// Correlates this session's log lines; never sent to the backend.
    id: Uuid,
    slug: String,
    source: C,
    sink: S,
    catalog: CatalogState,
    checkout: Checkout,
    last_order: Option<Order>,
}

impl<C: CatalogSource, S: OrderSink> StorefrontSession<C, S> {
    /// Creates a session for the storefront published under `slug`.
    ///
    /// The catalog is not fetched until [`open`](Self::open).
    pub fn new(slug: impl Into<String>, source: C, sink: S) -> Self {
        StorefrontSession {
            id: Uuid::new_v4(),
            slug: slug.into(),
            source,
            sink,
            catalog: CatalogState::Loading,
            checkout: Checkout::new(),
            last_order: None,
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Loads the catalog. Called once per session.
    pub async fn open(&mut self) {
        debug!(session = %self.id, slug = %self.slug, "Opening storefront");
        self.catalog = match self.source.fetch_catalog(&self.slug).await {
            Ok(storefront) => {
                info!(
                    session = %self.id,
                    slug = %self.slug,
                    products = storefront.products.len(),
                    "Storefront loaded"
                );
                CatalogState::Ready(storefront)
            }
            Err(err) if err.is_not_found() => {
                debug!(session = %self.id, slug = %self.slug, "Storefront not found");
                CatalogState::NotFound
            }
            Err(err) => {
                warn!(session = %self.id, slug = %self.slug, error = %err, "Catalog load failed");
                CatalogState::Failed(err.reason())
            }
        };
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The loaded storefront, if the catalog is ready.
    pub fn storefront(&self) -> Option<&Storefront> {
        match &self.catalog {
            CatalogState::Ready(storefront) => Some(storefront),
            _ => None,
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Sets the cart quantity for a catalog product.
    ///
    /// Resolves `product_id` against the loaded catalog; ids the catalog
    /// does not contain are rejected before they can reach the cart.
    /// Synchronous: quantity bookkeeping never waits on the network.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) -> SessionResult<()> {
        let storefront = match &self.catalog {
            CatalogState::Ready(storefront) => storefront,
            _ => return Err(SessionError::CatalogNotReady),
        };
        let product = storefront
            .product(product_id)
            .ok_or(SessionError::UnknownProduct { product_id })?;

        self.checkout.set_quantity(product, quantity);
        debug!(
            session = %self.id,
            product_id,
            quantity,
            total = %self.checkout.total(),
            "Cart updated"
        );
        Ok(())
    }

    /// Current cart total.
    pub fn total(&self) -> Money {
        self.checkout.total()
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.checkout.set_customer_name(name);
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) {
        self.checkout.set_customer_phone(phone);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submits the current cart as an order.
    ///
    /// Local precondition failures (empty cart, missing contact info, a
    /// submission already in flight) return `Err` immediately, with zero
    /// sink calls and the submission state unchanged. A remote outcome is
    /// recorded IN the state instead: `Succeeded` empties the cart,
    /// `Failed(reason)` keeps it intact for a retry, and this method
    /// returns `Ok` either way.
    pub async fn submit_order(&mut self) -> SessionResult<()> {
        let draft = self.checkout.begin_submission()?;
        info!(
            session = %self.id,
            slug = %self.slug,
            items = draft.items.len(),
            "Submitting order"
        );

        match self.sink.submit(&self.slug, &draft).await {
            Ok(order) => {
                info!(session = %self.id, order_id = order.id, "Order placed");
                self.checkout.complete_success();
                self.last_order = Some(order);
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "Order submission failed");
                self.checkout.complete_failure(err.reason());
            }
        }
        Ok(())
    }

    /// The confirmed order from the most recent successful submission.
    pub fn last_order(&self) -> Option<&Order> {
        self.last_order.as_ref()
    }

    /// "Place another order": back to an idle checkout. The cart is
    /// already empty (success is the only path here that empties it).
    pub fn place_another_order(&mut self) {
        self.checkout.reset();
        self.last_order = None;
    }
}
