//! # Cart
//!
//! The shopping cart of one browsing session: the products selected for
//! purchase, their quantities, and whether the cart panel is visible.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation               Cart Change           │
//! │  ───────────              ─────────               ───────────           │
//! │                                                                         │
//! │  Tap bag icon ──────────► toggle_visibility() ──► is_open = !is_open   │
//! │                                                                         │
//! │  "Adicionar à sacola" ──► add_product(line) ────► push or qty += n     │
//! │                                                                         │
//! │  Tap "+" on a line ─────► increase_quantity() ──► qty += 1             │
//! │                                                                         │
//! │  Tap "-" on a line ─────► decrease_quantity() ──► qty -= 1 (min 1)     │
//! │                                                                         │
//! │  Tap trash icon ────────► remove_product() ─────► line removed         │
//! │                                                                         │
//! │  Render total ──────────► total_price() ────────► Σ price × qty        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product raises quantity)
//! - Every line has quantity >= 1; only [`Cart::remove_product`] removes a line
//! - Lines keep the order in which their product was first added
//! - The total is derived from the lines on every read, never stored
//!
//! None of the operations can fail. Unknown product ids are no-ops.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Line
// =============================================================================

/// One product's presence in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog product id. Unique within a cart.
    pub id: String,

    /// Display name at the time the product was first added.
    pub name: String,

    /// Unit price at the time the product was first added.
    pub unit_price: Money,

    /// Product photo.
    pub image_url: String,

    /// Units of this product, >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a candidate line.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        image_url: impl Into<String>,
        quantity: i64,
    ) -> Self {
        CartLine {
            id: id.into(),
            name: name.into(),
            unit_price,
            image_url: image_url.into(),
            quantity,
        }
    }

    /// Creates a candidate line from a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart state container.
///
/// Fields are private so that lines can only change through the
/// operations below and the total can never drift from them. Deserializing
/// rebuilds the cart through [`Cart::try_add_product`], so a JSON cart with
/// duplicate ids or out-of-range quantities is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartSnapshot")]
pub struct Cart {
    is_open: bool,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty, closed cart.
    pub fn new() -> Self {
        Cart::default()
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Whether the cart panel is visible.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Lines in first-added order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == product_id)
    }

    /// Number of distinct products.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `unit_price × quantity` over all lines, recomputed on each call.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units (the bag badge count).
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Flips the cart panel between closed and open.
    pub fn toggle_visibility(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Adds a product to the cart or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - Product not in cart: the line is appended as given
    /// - Product already in cart: its quantity grows by `line.quantity`; the
    ///   existing name, price and image are kept and the incoming ones are
    ///   discarded (first-seen price sticks)
    ///
    /// Input is trusted. Use [`Cart::try_add_product`] to validate first.
    pub fn add_product(&mut self, line: CartLine) {
        match self.line_mut(&line.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    /// Validating variant of [`Cart::add_product`].
    ///
    /// ## Returns
    /// - `Ok(())` after applying exactly what `add_product` would
    /// - `Err(CoreError)` with the cart unchanged if the line is malformed,
    ///   the resulting quantity exceeds [`MAX_ITEM_QUANTITY`], or a new line
    ///   would exceed [`crate::MAX_CART_LINES`]
    pub fn try_add_product(&mut self, line: CartLine) -> CoreResult<()> {
        validation::validate_cart_line(&line)?;

        match self.line(&line.id) {
            Some(existing) => {
                let requested = existing.quantity.saturating_add(line.quantity);
                if requested > MAX_ITEM_QUANTITY {
                    return Err(CoreError::QuantityTooLarge {
                        product_id: line.id,
                        requested,
                        max: MAX_ITEM_QUANTITY,
                    });
                }
            }
            None => {
                if validation::validate_cart_size(self.lines.len()).is_err() {
                    return Err(CoreError::CartTooLarge {
                        max: crate::MAX_CART_LINES,
                    });
                }
            }
        }

        self.add_product(line);
        Ok(())
    }

    /// Adds one unit to a line. Returns `false` if the product is not in the cart.
    pub fn increase_quantity(&mut self, product_id: &str) -> bool {
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes one unit from a line, stopping at 1.
    ///
    /// A line at quantity 1 is left in place; removal is always explicit.
    /// Returns `false` when nothing changed.
    pub fn decrease_quantity(&mut self, product_id: &str) -> bool {
        match self.line_mut(product_id) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Deletes a line. Returns `false` if the product was not in the cart.
    pub fn remove_product(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != product_id);
        self.lines.len() != before
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.id == product_id)
    }
}

/// Serialized shape of a [`Cart`], validated on the way in.
#[derive(Deserialize)]
struct CartSnapshot {
    #[serde(default)]
    is_open: bool,
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl TryFrom<CartSnapshot> for Cart {
    type Error = CoreError;

    fn try_from(snapshot: CartSnapshot) -> CoreResult<Self> {
        let mut cart = Cart {
            is_open: snapshot.is_open,
            lines: Vec::with_capacity(snapshot.lines.len()),
        };
        for line in snapshot.lines {
            if cart.line(&line.id).is_some() {
                return Err(CoreError::DuplicateLine { product_id: line.id });
            }
            cart.try_add_product(line)?;
        }
        Ok(cart)
    }
}
