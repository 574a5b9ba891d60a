//! # Dashboard Session
//!
//! One merchant managing their page: products, page settings, received
//! orders.
//!
//! ## The "No Page Yet" State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dashboard Load Branching                           │
//! │                                                                         │
//! │  open()                                                                 │
//! │    │                                                                    │
//! │    ├─ fetch_my_page Ok ──► fetch_my_orders ──► Ready { page, orders }  │
//! │    │                              └─ Err ────► Failed(reason)          │
//! │    │                                                                    │
//! │    ├─ Err(NotFound) ─────► NoPageYet      (onboarding, NOT an error)   │
//! │    │                                                                    │
//! │    └─ other Err ─────────► Failed(reason)                              │
//! │                                                                         │
//! │  A brand-new merchant has no page; the dashboard shows the             │
//! │  "create your first page" flow. Only NotFound means that — any         │
//! │  other failure is a real failure.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! After a successful CRUD call the session updates its local copy of
//! the page in place instead of refetching. The backend response is the
//! authoritative record of what changed.

use tracing::{debug, info, warn};
use uuid::Uuid;

use shopfront_client::{
    AuthSession, MerchantApi, NewPage, NewProduct, PageUpdate, ProductUpdate,
};
use shopfront_core::validation::{validate_page_title, validate_price, validate_product_name};
use shopfront_core::{Order, Page, Product};

use crate::error::{SessionError, SessionResult};

/// Where the dashboard load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// `open()` has not completed yet.
    Loading,

    /// The merchant has not created a page. Onboarding, not an error.
    NoPageYet,

    /// The page and its received orders are loaded.
    Ready { page: Page, orders: Vec<Order> },

    /// The dashboard could not be loaded.
    Failed(String),
}

/// One merchant's dashboard session.
pub struct DashboardSession<M> {
    id: Uuid,
    api: M,
    auth: AuthSession,
    state: DashboardState,
}

impl<M: MerchantApi> DashboardSession<M> {
    pub fn new(api: M, auth: AuthSession) -> Self {
        DashboardSession {
            id: Uuid::new_v4(),
            api,
            auth,
            state: DashboardState::Loading,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The loaded page, if any.
    pub fn page(&self) -> Option<&Page> {
        match &self.state {
            DashboardState::Ready { page, .. } => Some(page),
            _ => None,
        }
    }

    /// Orders received against the loaded page.
    pub fn orders(&self) -> &[Order] {
        match &self.state {
            DashboardState::Ready { orders, .. } => orders,
            _ => &[],
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads the merchant's page and received orders.
    pub async fn open(&mut self) {
        debug!(session = %self.id, "Opening dashboard");
        self.state = match self.api.fetch_my_page(&self.auth).await {
            Ok(page) => match self.api.fetch_my_orders(&self.auth).await {
                Ok(orders) => {
                    info!(
                        session = %self.id,
                        slug = %page.slug,
                        products = page.products.len(),
                        orders = orders.len(),
                        "Dashboard loaded"
                    );
                    DashboardState::Ready { page, orders }
                }
                Err(err) => {
                    warn!(session = %self.id, error = %err, "Order list load failed");
                    DashboardState::Failed(err.reason())
                }
            },
            Err(err) if err.is_not_found() => {
                info!(session = %self.id, "No page yet");
                DashboardState::NoPageYet
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "Dashboard load failed");
                DashboardState::Failed(err.reason())
            }
        };
    }

    /// Refetches the received-order list, keeping the page as is.
    pub async fn refresh_orders(&mut self) -> SessionResult<()> {
        let fresh = self.api.fetch_my_orders(&self.auth).await?;
        if let DashboardState::Ready { orders, .. } = &mut self.state {
            *orders = fresh;
            Ok(())
        } else {
            Err(SessionError::NoPageLoaded)
        }
    }

    // =========================================================================
    // Page CRUD
    // =========================================================================

    /// Creates the merchant's page. Valid from `NoPageYet`.
    pub async fn create_page(&mut self, page: NewPage) -> SessionResult<()> {
        validate_page_title(&page.title)?;
        let created = self.api.create_page(&self.auth, &page).await?;
        info!(session = %self.id, slug = %created.slug, "Page created");
        self.state = DashboardState::Ready {
            page: created,
            orders: Vec::new(),
        };
        Ok(())
    }

    /// Updates the page's title/description.
    pub async fn update_page(&mut self, update: PageUpdate) -> SessionResult<()> {
        if let Some(title) = &update.title {
            validate_page_title(title)?;
        }
        let updated = self.api.update_page(&self.auth, &update).await?;
        match &mut self.state {
            DashboardState::Ready { page, .. } => {
                *page = updated;
                Ok(())
            }
            _ => Err(SessionError::NoPageLoaded),
        }
    }

    // =========================================================================
    // Product CRUD
    // =========================================================================

    /// Adds a product to the page.
    pub async fn add_product(&mut self, product: NewProduct) -> SessionResult<()> {
        validate_product_name(&product.name)?;
        validate_price(product.price)?;
        self.require_page()?;

        let created = self.api.create_product(&self.auth, &product).await?;
        info!(session = %self.id, product_id = created.id, "Product added");
        if let DashboardState::Ready { page, .. } = &mut self.state {
            page.products.push(created);
        }
        Ok(())
    }

    /// Updates one of the page's products in place.
    pub async fn update_product(
        &mut self,
        product_id: i64,
        update: ProductUpdate,
    ) -> SessionResult<()> {
        if let Some(name) = &update.name {
            validate_product_name(name)?;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
        }
        self.require_product(product_id)?;

        let updated = self.api.update_product(&self.auth, product_id, &update).await?;
        if let DashboardState::Ready { page, .. } = &mut self.state {
            if let Some(slot) = page.products.iter_mut().find(|p| p.id == product_id) {
                *slot = updated;
            }
        }
        Ok(())
    }

    /// Removes a product, returning it as it stood before deletion.
    pub async fn remove_product(&mut self, product_id: i64) -> SessionResult<Product> {
        self.require_product(product_id)?;

        let deleted = self.api.delete_product(&self.auth, product_id).await?;
        info!(session = %self.id, product_id, "Product removed");
        if let DashboardState::Ready { page, .. } = &mut self.state {
            page.products.retain(|p| p.id != product_id);
        }
        Ok(deleted)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_page(&self) -> SessionResult<()> {
        match &self.state {
            DashboardState::Ready { .. } => Ok(()),
            _ => Err(SessionError::NoPageLoaded),
        }
    }

    fn require_product(&self, product_id: i64) -> SessionResult<()> {
        match &self.state {
            DashboardState::Ready { page, .. } => {
                if page.products.iter().any(|p| p.id == product_id) {
                    Ok(())
                } else {
                    Err(SessionError::UnknownProduct { product_id })
                }
            }
            _ => Err(SessionError::NoPageLoaded),
        }
    }
}
