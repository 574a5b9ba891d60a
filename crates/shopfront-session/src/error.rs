//! Session-level errors.
//!
//! These are the LOCAL rejections a UI shows inline (a message next to
//! the form), as opposed to remote failures, which land in the session's
//! state (`Failed(reason)`) so they survive across renders with a retry
//! available.

use thiserror::Error;

use shopfront_client::ApiError;
use shopfront_core::{CheckoutError, ValidationError};

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A session operation that could not proceed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog has not loaded (or failed to), so cart edits have
    /// nothing to resolve product ids against.
    #[error("The storefront is not loaded yet.")]
    CatalogNotReady,

    /// The product id does not exist in the loaded catalog.
    #[error("Unknown product: {product_id}")]
    UnknownProduct { product_id: i64 },

    /// The dashboard has no loaded page to operate on.
    #[error("No page loaded.")]
    NoPageLoaded,

    /// A local checkout precondition failed (empty cart, missing contact
    /// info, submission already in flight).
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// A form field failed local validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend rejected a dashboard operation.
    #[error(transparent)]
    Api(#[from] ApiError),
}
