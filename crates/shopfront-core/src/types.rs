//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   Storefront    │   │     Page        │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  title          │   │  id, slug       │       │
//! │  │  name           │   │  description    │   │  title, owner   │       │
//! │  │  price (Money)  │   │  products[]     │   │  products[]     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   OrderDraft    │   │     Order       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  customer_name  │   │  id, total      │                             │
//! │  │  customer_phone │   │  created_at     │                             │
//! │  │  items[]        │   │  items[]        │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Storefront` is what an anonymous customer sees (no ids, no owner);
//! `Page` is the merchant-owned view of the same data. `OrderDraft` is the
//! ephemeral upload payload; `Order` is what the backend confirms and what
//! the dashboard lists.
//!
//! Wire prices are JSON decimals; every price field goes through the
//! [`crate::money::serde_major`] boundary adapter exactly once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product listed on a merchant's page.
///
/// Read-only from the cart's perspective: the catalog is
/// authoritative and immutable for the duration of a browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, assigned by the backend.
    pub id: i64,

    /// Display name (non-empty).
    pub name: String,

    /// Optional description shown under the name.
    pub description: Option<String>,

    /// Price (non-negative), decimal on the wire.
    #[serde(with = "crate::money::serde_major")]
    #[ts(as = "f64")]
    pub price: Money,
}

// =============================================================================
// Storefront (public catalog)
// =============================================================================

/// The public payload for one merchant page, fetched by slug.
///
/// This is the entire catalog a browsing session operates on. It is
/// fetched once when the storefront opens and never re-fetched
/// automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Storefront {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Storefront {
    /// Looks up a product by id in the loaded catalog.
    pub fn product(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

// =============================================================================
// Page (merchant view)
// =============================================================================

/// The merchant-owned view of their page, as returned by the
/// authenticated endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page {
    pub id: i64,

    /// URL slug identifying the public storefront.
    pub slug: String,

    pub title: String,
    pub description: Option<String>,

    /// Owning merchant account id.
    pub owner_id: i64,

    #[serde(default)]
    pub products: Vec<Product>,
}

// =============================================================================
// Order Draft (upload payload)
// =============================================================================

/// One line of an order draft: a product reference and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItemDraft {
    pub product_id: i64,
    pub quantity: i64,
}

/// The ephemeral payload built from cart contents plus customer contact
/// info at submission time.
///
/// ## Lifecycle
/// Constructed only when a submission begins, handed to the Order Sink,
/// and discarded after the call resolves. Never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItemDraft>,
}

// =============================================================================
// Order (confirmed)
// =============================================================================

/// A line item of a confirmed order.
///
/// Uses the snapshot pattern: `product_name` and `price_per_item` are
/// frozen copies taken by the backend at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub id: i64,

    /// Product name at time of ordering (frozen).
    pub product_name: String,

    pub quantity: i64,

    /// Unit price at time of ordering (frozen), decimal on the wire.
    #[serde(with = "crate::money::serde_major")]
    #[ts(as = "f64")]
    pub price_per_item: Money,
}

impl OrderItem {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price_per_item.multiply_quantity(self.quantity)
    }
}

/// A confirmed order, as returned by the Order Sink and listed on the
/// merchant dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: String,

    /// Grand total computed by the backend, decimal on the wire.
    #[serde(with = "crate::money::serde_major")]
    #[ts(as = "f64")]
    pub total_price: Money,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_wire_decimal() {
        let json = r#"{"id": 7, "name": "Masala Chai", "description": null, "price": 100.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.price, Money::from_minor(10_000));
    }

    #[test]
    fn test_storefront_product_lookup() {
        let storefront = Storefront {
            title: "Chai Stall".into(),
            description: None,
            products: vec![Product {
                id: 1,
                name: "Chai".into(),
                description: None,
                price: Money::from_minor(2_500),
            }],
        };
        assert!(storefront.product(1).is_some());
        assert!(storefront.product(99).is_none());
    }

    #[test]
    fn test_order_draft_serializes_for_the_api() {
        let draft = OrderDraft {
            customer_name: "Asha".into(),
            customer_phone: "9999999999".into(),
            items: vec![OrderItemDraft {
                product_id: 1,
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["customer_name"], "Asha");
        assert_eq!(json["items"][0]["product_id"], 1);
        assert_eq!(json["items"][0]["quantity"], 2);
    }

    #[test]
    fn test_order_item_line_total() {
        let item = OrderItem {
            id: 1,
            product_name: "Chai".into(),
            quantity: 3,
            price_per_item: Money::from_minor(2_500),
        };
        assert_eq!(item.line_total(), Money::from_minor(7_500));
    }
}
