//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of the Shopfront client. It contains the
//! shopping-cart and checkout logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopfront-session (views)                       │   │
//! │  │   Storefront ──► Checkout form ──► Dashboard ──► Modals         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shopfront-client (HTTP)                         │   │
//! │  │   fetch_catalog, submit order, auth, page/product CRUD          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │Submission │  │   │
//! │  │   │   Order   │  │           │  │ CartLine  │  │  State    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Storefront, Page, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and CartLine with quantity bookkeeping
//! - [`checkout`] - The submission state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and token storage are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64) to avoid
//!    float errors; floats exist only at the JSON boundary
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::cart::Cart;
//! use shopfront_core::money::Money;
//! use shopfront_core::types::Product;
//!
//! let chai = Product {
//!     id: 1,
//!     name: "Masala Chai".into(),
//!     description: None,
//!     price: Money::from_minor(10_000), // ₹100.00
//! };
//!
//! let mut cart = Cart::new();
//! cart.set_quantity(&chai, 2);
//! assert_eq!(cart.total(), Money::from_minor(20_000));
//!
//! // Setting the quantity to zero removes the line entirely.
//! cart.set_quantity(&chai, 0);
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`.

pub use cart::{Cart, CartLine};
pub use checkout::{Checkout, SubmissionState};
pub use error::{CheckoutError, ValidationError};
pub use money::Money;
pub use types::*;
