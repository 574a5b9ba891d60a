//! # shopfront-session: Per-Session State Machines
//!
//! The thin layer a UI binds to. Each session is a state machine driven
//! by a single logical thread of user events, owned exclusively by its
//! caller (`&mut self` everywhere, no locks).
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Architecture                             │
//! │                                                                         │
//! │  UI (out of scope)                                                      │
//! │      │  user events: set_quantity, submit_order, ...                    │
//! │      ▼                                                                  │
//! │  shopfront-session          StorefrontSession   DashboardSession        │
//! │      │                      AuthContext         ModalState              │
//! │      │  trait seams: CatalogSource, OrderSink, MerchantApi, TokenStore  │
//! │      ▼                                                                  │
//! │  shopfront-client           ApiClient (HTTP) — or mocks in tests        │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  shopfront-core             Cart, Checkout, Money (pure logic)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sessions are generic over the collaborator traits, never over
//! `ApiClient` itself: every test in this crate runs without a network.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod modal;
pub mod storefront;
pub mod telemetry;

pub use auth::{AuthContext, AuthState};
pub use dashboard::{DashboardSession, DashboardState};
pub use error::SessionError;
pub use modal::ModalState;
pub use storefront::{CatalogState, StorefrontSession};
