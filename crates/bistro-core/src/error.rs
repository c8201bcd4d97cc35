//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Cart limits exceeded                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app)                                               │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front-end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart operations themselves are total and never produce these errors.
//! Only the validating entry point [`crate::Cart::try_add_product`] does.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the validating cart entry points.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Adding a new line would exceed [`crate::MAX_CART_LINES`].
    #[error("Cart cannot have more than {max} products")]
    CartTooLarge { max: usize },

    /// The resulting quantity of a line would exceed the maximum.
    ///
    /// ## When This Occurs
    /// ```text
    /// Line "p1" already has qty 998
    ///      │
    ///      ▼
    /// try_add_product(p1, qty 5)
    ///      │
    ///      ▼
    /// QuantityTooLarge { product_id: "p1", requested: 1003, max: 999 }
    /// ```
    #[error("Quantity {requested} of {product_id} exceeds maximum allowed ({max})")]
    QuantityTooLarge {
        product_id: String,
        requested: i64,
        max: i64,
    },

    /// A serialized cart lists the same product twice.
    #[error("Product {product_id} appears more than once in the cart")]
    DuplicateLine { product_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed product id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            product_id: "p1".to_string(),
            requested: 1003,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1003 of p1 exceeds maximum allowed (999)"
        );

        let err = CoreError::CartTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Cart cannot have more than 100 products");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
