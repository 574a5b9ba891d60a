//! # Checkout
//!
//! The order-submission state machine for one browsing session.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Submission State Machine                            │
//! │                                                                         │
//! │                  begin_submission() ok                                  │
//! │   ┌──────────┐ ─────────────────────────► ┌────────────┐               │
//! │   │   Idle   │                            │ Submitting │               │
//! │   └──────────┘ ◄──────────┐               └─────┬──────┘               │
//! │        ▲                  │                     │                       │
//! │        │ reset()          │            complete_success() /            │
//! │        │ ("place another  │            complete_failure(reason)        │
//! │        │   order")        │                     │                       │
//! │   ┌────┴──────┐           │               ┌─────▼──────┐               │
//! │   │ Succeeded │           └───────────────┤   Failed   │               │
//! │   └───────────┘    corrected submission   └────────────┘               │
//! │                    goes back through                                    │
//! │                    begin_submission()                                   │
//! │                                                                         │
//! │  • Local validation failures never leave Idle/Failed.                  │
//! │  • complete_success() is the ONLY path that empties the cart.          │
//! │  • Failed keeps cart and contact fields intact for a retry.            │
//! │  • Failed is not terminal.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The checkout itself performs no I/O. The session layer calls
//! [`Checkout::begin_submission`] to obtain an [`OrderDraft`], hands it to
//! the Order Sink, and reports back through [`Checkout::complete_success`]
//! or [`Checkout::complete_failure`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::{OrderDraft, Product};

// =============================================================================
// Submission State
// =============================================================================

/// Where the current cart session stands with respect to order submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum SubmissionState {
    /// No submission attempted yet (or reset after success).
    #[default]
    Idle,

    /// One submission is in flight; repeats are rejected.
    Submitting,

    /// The Order Sink accepted the order; the cart has been emptied.
    Succeeded,

    /// The Order Sink rejected the order (validation, network, server
    /// fault — undistinguished). The reason is human-readable and the
    /// cart is intact for a retry.
    Failed(String),
}

impl SubmissionState {
    /// Checks whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Owns the cart, the customer contact fields, and the submission state
/// for one browsing session.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    cart: Cart,
    customer_name: String,
    customer_phone: String,
    state: SubmissionState,
}

impl Checkout {
    /// Creates a fresh checkout with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Cart & Contact Accessors
    // =========================================================================

    /// Sets the quantity for a catalog product. See [`Cart::set_quantity`].
    ///
    /// Allowed in any state except mid-flight edits mattering: the draft
    /// is built from the cart at `begin_submission` time, so edits after
    /// that point affect only the NEXT submission.
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) {
        self.cart.set_quantity(product, quantity);
    }

    /// The cart (read-only).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current cart total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Current submission state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) {
        self.customer_phone = phone.into();
    }

    // =========================================================================
    // Submission Transitions
    // =========================================================================

    /// Validates the session locally and, on success, enters `Submitting`
    /// and returns the draft to hand to the Order Sink.
    ///
    /// ## Precondition Order (all before any network effect)
    /// 1. No submission already in flight (`SubmissionInFlight`)
    /// 2. Cart non-empty (`EmptyCart`)
    /// 3. Both contact fields non-blank (`MissingContactInfo`)
    ///
    /// Local failures leave the state exactly where it was (`Idle` or
    /// `Failed`); only a passing validation moves to `Submitting`.
    pub fn begin_submission(&mut self) -> CheckoutResult<OrderDraft> {
        if self.state.is_submitting() {
            return Err(CheckoutError::SubmissionInFlight);
        }

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if self.customer_name.trim().is_empty() || self.customer_phone.trim().is_empty() {
            return Err(CheckoutError::MissingContactInfo);
        }

        self.state = SubmissionState::Submitting;

        Ok(OrderDraft {
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            items: self.cart.draft_items(),
        })
    }

    /// Records a successful submission: empties the cart, clears the
    /// contact fields, and enters `Succeeded`.
    ///
    /// This is the only path that empties the cart. Ignored unless a
    /// submission is in flight (a response arriving after the user
    /// navigated away is simply discarded).
    pub fn complete_success(&mut self) {
        if !self.state.is_submitting() {
            return;
        }
        self.cart.clear();
        self.customer_name.clear();
        self.customer_phone.clear();
        self.state = SubmissionState::Succeeded;
    }

    /// Records a failed submission: enters `Failed(reason)` with the cart
    /// and contact fields untouched, so the user can retry without
    /// re-entering anything.
    ///
    /// Ignored unless a submission is in flight.
    pub fn complete_failure(&mut self, reason: impl Into<String>) {
        if !self.state.is_submitting() {
            return;
        }
        self.state = SubmissionState::Failed(reason.into());
    }

    /// "Place another order": returns to `Idle` from `Succeeded`.
    ///
    /// Harmless from `Idle`/`Failed` as well; never interrupts an
    /// in-flight submission.
    pub fn reset(&mut self) {
        if self.state.is_submitting() {
            return;
        }
        self.state = SubmissionState::Idle;
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

    fn ready_checkout() -> Checkout {
        let mut checkout = Checkout::new();
        checkout.set_quantity(&product(1, 10_000), 2);
        checkout.set_customer_name("Asha");
        checkout.set_customer_phone("9999999999");
        checkout
    }

    #[test]
    fn test_empty_cart_fails_before_anything_else_remote() {
        let mut checkout = Checkout::new();
        checkout.set_customer_name("Asha");
        checkout.set_customer_phone("9999999999");

        assert_eq!(checkout.begin_submission(), Err(CheckoutError::EmptyCart));
        assert_eq!(checkout.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_missing_contact_info_fails_locally() {
        let mut checkout = Checkout::new();
        checkout.set_quantity(&product(1, 10_000), 1);
        checkout.set_customer_phone("9999999999");

        // Blank name on a non-empty cart: local failure, cart unchanged.
        assert_eq!(
            checkout.begin_submission(),
            Err(CheckoutError::MissingContactInfo)
        );
        assert_eq!(checkout.state(), &SubmissionState::Idle);
        assert_eq!(checkout.cart().len(), 1);

        // Whitespace-only counts as missing too.
        checkout.set_customer_name("   ");
        assert_eq!(
            checkout.begin_submission(),
            Err(CheckoutError::MissingContactInfo)
        );
    }

    #[test]
    fn test_begin_submission_builds_draft_and_enters_submitting() {
        let mut checkout = ready_checkout();

        let draft = checkout.begin_submission().unwrap();
        assert_eq!(checkout.state(), &SubmissionState::Submitting);
        assert_eq!(draft.customer_name, "Asha");
        assert_eq!(draft.customer_phone, "9999999999");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].product_id, 1);
        assert_eq!(draft.items[0].quantity, 2);
    }

    #[test]
    fn test_second_submission_rejected_while_in_flight() {
        let mut checkout = ready_checkout();

        checkout.begin_submission().unwrap();
        assert_eq!(
            checkout.begin_submission(),
            Err(CheckoutError::SubmissionInFlight)
        );
        // The in-flight submission is unaffected.
        assert_eq!(checkout.state(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_success_is_the_only_path_that_empties_the_cart() {
        let mut checkout = ready_checkout();
        checkout.begin_submission().unwrap();

        checkout.complete_success();
        assert_eq!(checkout.state(), &SubmissionState::Succeeded);
        assert!(checkout.cart().is_empty());
        assert_eq!(checkout.customer_name(), "");
        assert_eq!(checkout.customer_phone(), "");
    }

    #[test]
    fn test_failure_leaves_cart_and_contact_intact() {
        let mut checkout = ready_checkout();
        checkout.begin_submission().unwrap();

        checkout.complete_failure("There was an error placing your order.");
        assert_eq!(
            checkout.state(),
            &SubmissionState::Failed("There was an error placing your order.".into())
        );
        assert_eq!(checkout.cart().len(), 1);
        assert_eq!(checkout.customer_name(), "Asha");
        assert_eq!(checkout.customer_phone(), "9999999999");
    }

    #[test]
    fn test_failed_is_not_terminal() {
        let mut checkout = ready_checkout();
        checkout.begin_submission().unwrap();
        checkout.complete_failure("boom");

        // Further edits and a corrected resubmission are allowed.
        checkout.set_quantity(&product(2, 5_000), 1);
        let draft = checkout.begin_submission().unwrap();
        assert_eq!(draft.items.len(), 2);
        assert_eq!(checkout.state(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_local_failure_does_not_clear_failed_state() {
        let mut checkout = ready_checkout();
        checkout.begin_submission().unwrap();
        checkout.complete_failure("boom");

        // Empty the cart, then try again: local validation error, and the
        // state stays Failed rather than snapping back to Idle.
        let p = product(1, 10_000);
        checkout.set_quantity(&p, 0);
        assert_eq!(checkout.begin_submission(), Err(CheckoutError::EmptyCart));
        assert!(matches!(checkout.state(), SubmissionState::Failed(_)));
    }

    #[test]
    fn test_reset_returns_to_idle_for_another_order() {
        let mut checkout = ready_checkout();
        checkout.begin_submission().unwrap();
        checkout.complete_success();

        checkout.reset();
        assert_eq!(checkout.state(), &SubmissionState::Idle);
        assert!(checkout.cart().is_empty());
    }

    #[test]
    fn test_stale_completions_are_discarded() {
        let mut checkout = Checkout::new();

        // A result arriving when nothing is in flight is ignored.
        checkout.complete_success();
        assert_eq!(checkout.state(), &SubmissionState::Idle);
        checkout.complete_failure("late response");
        assert_eq!(checkout.state(), &SubmissionState::Idle);
    }
}
