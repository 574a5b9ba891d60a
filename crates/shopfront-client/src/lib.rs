//! # shopfront-client: HTTP API Client for Shopfront
//!
//! Everything that talks to the backend lives here, behind narrow trait
//! seams so the session layer can be tested without a network.
//!
//! ## Boundary Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     shopfront-client Boundaries                         │
//! │                                                                         │
//! │  shopfront-session                 Backend API                          │
//! │  ─────────────────                 ───────────                          │
//! │                                                                         │
//! │  CatalogSource ───► fetch_catalog ───► GET  /pages/{slug}              │
//! │  OrderSink ───────► submit ──────────► POST /orders/{slug}             │
//! │                                                                         │
//! │  (authenticated, explicit AuthSession - no global token)               │
//! │  MerchantApi ─────► fetch_my_page ───► GET  /pages/me                  │
//! │              ─────► create_page ─────► POST /pages/                    │
//! │              ─────► update_page ─────► PUT  /pages/me                  │
//! │              ─────► create_product ──► POST /products/                 │
//! │              ─────► update_product ──► PUT  /products/{id}             │
//! │              ─────► delete_product ──► DEL  /products/{id}             │
//! │              ─────► fetch_my_orders ─► GET  /orders/my-orders          │
//! │                                                                         │
//! │  register ────────────────────────────► POST /users/                   │
//! │  login ───────────────────────────────► POST /users/login (form)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod merchant;
pub mod orders;

pub use auth::{AuthSession, FileTokenStore, InMemoryTokenStore, TokenStore, UserProfile};
pub use catalog::CatalogSource;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use merchant::{MerchantApi, NewPage, NewProduct, PageUpdate, ProductUpdate};
pub use orders::OrderSink;
