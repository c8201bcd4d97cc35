//! # bistro-core: Pure Ordering Logic
//!
//! Everything the restaurant ordering front-end needs that is not
//! presentation: integer money, the catalog and order records it displays,
//! and the shopping cart state container.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front-end (React)                        │   │
//! │  │    Menu ──► Product Details ──► Cart Panel ──► Order History    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON DTOs                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  storefront (session layer)                     │   │
//! │  │    Session, add_to_cart, toggle_cart, list_orders, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   Order   │  │           │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog and order records (Product, Order, OrderStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart state container
//! - [`error`] - Domain error types
//! - [`validation`] - Optional checks for cart input
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{Cart, CartLine, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_product(CartLine::new("p1", "Burger", Money::from_cents(1000), "/burger.png", 1));
//! cart.add_product(CartLine::new("p1", "Burger", Money::from_cents(1000), "/burger.png", 2));
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_price().cents(), 3000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct lines accepted by [`Cart::try_add_product`].
///
/// The plain [`Cart::add_product`] never enforces this.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line accepted by [`Cart::try_add_product`].
pub const MAX_ITEM_QUANTITY: i64 = 999;
