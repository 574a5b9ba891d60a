//! # Cart
//!
//! The per-session shopping cart: selected products and quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  User Action               Operation               Cart Change          │
//! │  ───────────               ─────────               ───────────          │
//! │                                                                         │
//! │  "Add to Cart" ──────────► set_quantity(p, 1) ───► insert snapshot     │
//! │                                                                         │
//! │  "+" button ─────────────► set_quantity(p, q+1) ─► replace quantity    │
//! │                                                                         │
//! │  "-" button to zero ─────► set_quantity(p, 0) ───► remove the line     │
//! │                                                                         │
//! │  Order succeeded ────────► clear() ──────────────► empty cart          │
//! │                                                                         │
//! │  INVARIANTS: at most one line per product id;                          │
//! │              every line has quantity >= 1 (never a zero entry).        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{OrderItemDraft, Product};

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the catalog product
/// - `name`/`unit_price`: Frozen copies of product data at the time the
///   line was first inserted. The cart stays correct even if the catalog
///   is refetched with changed prices mid-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product id this line refers to.
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    /// We lock in the price when the line is created.
    #[ts(as = "f64")]
    #[serde(with = "crate::money::serde_major")]
    pub unit_price: Money,

    /// Quantity in cart. Always >= 1; a line at quantity zero is removed,
    /// never stored.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a cart line by snapshotting a catalog product.
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one browsing session.
///
/// Lines keep insertion order for display; order is irrelevant for
/// totals. Each session owns its cart exclusively, so no locking is
/// involved anywhere in this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Sets the quantity for a product, inserting, replacing, or removing
    /// the line as needed.
    ///
    /// ## Contract
    /// - `quantity <= 0`: remove any existing line for this product
    ///   (no-op if absent) — removal, never a zero entry.
    /// - Line exists: replace its quantity with `quantity`.
    /// - No line yet: insert a new snapshot line with `quantity`.
    ///
    /// Idempotent: repeating the call with the same arguments leaves the
    /// cart unchanged. No upper bound is enforced here.
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|line| line.product_id != product.id);
            return;
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
    }

    /// Returns the quantity currently in the cart for a product, if any.
    pub fn quantity_of(&self, product_id: i64) -> Option<i64> {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// Calculates the cart total: sum of `unit_price × quantity` over all
    /// lines, using the prices captured when each line was added.
    ///
    /// Deterministic, pure function of the current cart state.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// The lines in display (insertion) order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Builds the `(product_id, quantity)` pairs for an order draft,
    /// taken verbatim from the current lines.
    pub fn draft_items(&self) -> Vec<OrderItemDraft> {
        self.lines
            .iter()
            .map(|line| OrderItemDraft {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price_minor: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: None,
            price: Money::from_minor(price_minor),
        }
    }

    #[test]
    fn test_set_quantity_inserts_snapshot_line() {
        let mut cart = Cart::new();
        let chai = product(1, 10_000);

        cart.set_quantity(&chai, 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), Some(2));
        assert_eq!(cart.lines()[0].name, "Product 1");
        assert_eq!(cart.lines()[0].unit_price, Money::from_minor(10_000));
    }

    #[test]
    fn test_set_quantity_replaces_not_accumulates() {
        let mut cart = Cart::new();
        let chai = product(1, 10_000);

        cart.set_quantity(&chai, 2);
        cart.set_quantity(&chai, 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), Some(5));
    }

    #[test]
    fn test_nonpositive_quantity_means_removal() {
        let mut cart = Cart::new();
        let chai = product(1, 10_000);

        cart.set_quantity(&chai, 3);
        cart.set_quantity(&chai, 0);
        assert!(cart.is_empty());

        // Negative quantities are removal too, never a stored negative line.
        cart.set_quantity(&chai, 2);
        cart.set_quantity(&chai, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_removal_is_idempotent() {
        let mut cart = Cart::new();
        let chai = product(1, 10_000);

        // Removing an absent line is a no-op, both times.
        cart.set_quantity(&chai, 0);
        assert!(cart.is_empty());
        cart.set_quantity(&chai, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_no_sequence_of_calls_produces_a_nonpositive_line() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        let b = product(2, 200);

        for qty in [-3, 0, 1, 5, 0, 2, -1, 7] {
            cart.set_quantity(&a, qty);
            cart.set_quantity(&b, 9 - qty);
            assert!(cart.lines().iter().all(|line| line.quantity >= 1));
        }
    }

    #[test]
    fn test_total_across_adds_and_removals() {
        // Cart = {A(price=100, qty=2), B(price=50, qty=1)} → total 250.
        let mut cart = Cart::new();
        let a = product(1, 10_000); // ₹100
        let b = product(2, 5_000); // ₹50

        cart.set_quantity(&a, 2);
        cart.set_quantity(&b, 1);
        assert_eq!(cart.total(), Money::from_minor(25_000));

        // Removing A leaves {B(qty=1)}, total 50.
        cart.set_quantity(&a, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_minor(5_000));

        // set_quantity(B, -1) removes, leaving an empty cart.
        cart.set_quantity(&b, -1);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_quantity_change_shifts_total_by_price_delta() {
        let mut cart = Cart::new();
        let a = product(1, 1_234);
        let b = product(2, 999);
        cart.set_quantity(&a, 3);
        cart.set_quantity(&b, 4);

        let before = cart.total();
        cart.set_quantity(&a, 7); // q: 3 → 7
        let after = cart.total();

        // Δtotal = price × (q' − q)
        assert_eq!(after - before, Money::from_minor(1_234).multiply_quantity(4));
    }

    #[test]
    fn test_snapshot_price_survives_catalog_change() {
        let mut cart = Cart::new();
        let chai = product(1, 10_000);
        cart.set_quantity(&chai, 1);

        // A refetched catalog may carry a new price; existing lines keep
        // the price captured when they were added.
        let repriced = product(1, 12_000);
        cart.set_quantity(&repriced, 2);

        assert_eq!(cart.lines()[0].unit_price, Money::from_minor(10_000));
        assert_eq!(cart.total(), Money::from_minor(20_000));
    }

    #[test]
    fn test_draft_items_taken_verbatim() {
        let mut cart = Cart::new();
        cart.set_quantity(&product(5, 100), 2);
        cart.set_quantity(&product(9, 100), 1);

        let items = cart.draft_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, 5);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].product_id, 9);
        assert_eq!(items[1].quantity, 1);
    }
}
