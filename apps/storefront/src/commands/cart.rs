//! # Cart Commands
//!
//! Cart manipulation for one session, returning the view the cart panel
//! renders after every change.
//!
//! ## Cart Panel Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Panel                                           │
//! │                                                                         │
//! │  ┌──────────┐   toggle_cart   ┌──────────┐                              │
//! │  │  Closed  │ ──────────────► │   Open   │                              │
//! │  │          │ ◄────────────── │          │                              │
//! │  └──────────┘   toggle_cart   └──────────┘                              │
//! │                                    │                                    │
//! │                      increase_cart_item / decrease_cart_item            │
//! │                      remove_from_cart                                   │
//! │                                                                         │
//! │  add_to_cart works in either state.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these can fail except [`add_to_cart_checked`].

use bistro_core::{Cart, CartLine, Money};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, Session};

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub formatted_unit_price: String,
    pub line_total: Money,
    pub formatted_line_total: String,
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_price: Money,
    pub formatted_total: String,
}

/// Cart response: visibility, lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub is_open: bool,
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
}

impl CartResponse {
    /// Renders a cart. Totals are recomputed from the lines here.
    pub fn render(cart: &Cart, config: &ConfigState) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                id: line.id.clone(),
                name: line.name.clone(),
                image_url: line.image_url.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                formatted_unit_price: config.format_currency(line.unit_price),
                line_total: line.line_total(),
                formatted_line_total: config.format_currency(line.line_total()),
            })
            .collect();

        let total_price = cart.total_price();
        CartResponse {
            is_open: cart.is_open(),
            lines,
            totals: CartTotals {
                line_count: cart.len(),
                total_quantity: cart.total_quantity(),
                total_price,
                formatted_total: config.format_currency(total_price),
            },
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &Session, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::render(session.cart(), config)
}

/// Shows or hides the cart panel.
pub fn toggle_cart(session: &mut Session, config: &ConfigState) -> CartResponse {
    session.cart_mut().toggle_visibility();
    debug!(is_open = session.cart().is_open(), "toggle_cart command");
    CartResponse::render(session.cart(), config)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases, first price is kept
/// - If product not in cart: added as new line
pub fn add_to_cart(session: &mut Session, config: &ConfigState, line: CartLine) -> CartResponse {
    debug!(product_id = %line.id, quantity = line.quantity, "add_to_cart command");
    session.cart_mut().add_product(line);
    CartResponse::render(session.cart(), config)
}

/// Validating variant of [`add_to_cart`]. The cart is unchanged on error.
pub fn add_to_cart_checked(
    session: &mut Session,
    config: &ConfigState,
    line: CartLine,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %line.id, quantity = line.quantity, "add_to_cart_checked command");
    session.cart_mut().try_add_product(line)?;
    Ok(CartResponse::render(session.cart(), config))
}

/// Adds one unit to a line. Unknown ids are ignored.
pub fn increase_cart_item(
    session: &mut Session,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    let changed = session.cart_mut().increase_quantity(product_id);
    debug!(product_id = %product_id, changed, "increase_cart_item command");
    CartResponse::render(session.cart(), config)
}

/// Removes one unit from a line, never going below 1. Unknown ids are ignored.
pub fn decrease_cart_item(
    session: &mut Session,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    let changed = session.cart_mut().decrease_quantity(product_id);
    debug!(product_id = %product_id, changed, "decrease_cart_item command");
    CartResponse::render(session.cart(), config)
}

/// Removes a line. Unknown ids are ignored.
pub fn remove_from_cart(
    session: &mut Session,
    config: &ConfigState,
    product_id: &str,
) -> CartResponse {
    let changed = session.cart_mut().remove_product(product_id);
    debug!(product_id = %product_id, changed, "remove_from_cart command");
    CartResponse::render(session.cart(), config)
}
