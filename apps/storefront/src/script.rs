//! # Session Replay
//!
//! Drives a [`Session`] from a JSON script: a catalog snapshot, an order
//! history snapshot, and the user actions to apply in sequence.
//!
//! ## Script Format
//! ```json
//! {
//!   "products": [ { "id": "p1", "name": "Burger", "price": 1000, ... } ],
//!   "orders": [],
//!   "actions": [
//!     { "type": "openProduct", "productId": "p1" },
//!     { "type": "incrementSelection" },
//!     { "type": "addToBag" },
//!     { "type": "decreaseQuantity", "productId": "p1" },
//!     { "type": "addProduct", "line": {
//!         "id": "p2", "name": "Soda", "unit_price": 500, "image_url": "/s.png", "quantity": 1
//!     } },
//!     { "type": "toggleCart" }
//!   ]
//! }
//! ```
//!
//! Action fields are camelCase (`productId`). Embedded records (`products`,
//! `orders`, and the `line` of `addProduct` / `addProductChecked`) keep the
//! snake_case field names of the core types (`unit_price`, `image_url`).
//!
//! A rejected action is recorded and skipped; replay carries on with the
//! next one.

use bistro_core::{CartLine, Order, Product};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::commands::cart::{self, CartResponse};
use crate::commands::order::{self, OrderListResponse};
use crate::commands::product::{ProductDetails, ProductDetailsResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, Session};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    ToggleCart,
    /// Adds a line as given, no checks.
    AddProduct { line: CartLine },
    /// Adds a line after validating it.
    AddProductChecked { line: CartLine },
    #[serde(rename_all = "camelCase")]
    IncreaseQuantity { product_id: String },
    #[serde(rename_all = "camelCase")]
    DecreaseQuantity { product_id: String },
    #[serde(rename_all = "camelCase")]
    RemoveProduct { product_id: String },
    /// Navigates to a product page from the catalog.
    #[serde(rename_all = "camelCase")]
    OpenProduct { product_id: String },
    IncrementSelection,
    DecrementSelection,
    AddToBag,
}

/// A session script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }

    fn product(&self, product_id: &str) -> Result<&Product, ApiError> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    }
}

/// An action that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedAction {
    pub index: usize,
    pub error: ApiError,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayOutput {
    pub session_id: Uuid,
    pub restaurant_slug: String,
    pub cart: CartResponse,
    pub product: Option<ProductDetailsResponse>,
    pub orders: OrderListResponse,
    pub rejected: Vec<RejectedAction>,
}

/// Applies every action of `script` to `session`, in order.
pub fn replay(session: &mut Session, script: &Script, config: &ConfigState) -> ReplayOutput {
    let span = session.span();
    let _guard = span.enter();

    let mut page: Option<ProductDetails> = None;
    let mut rejected = Vec::new();

    for (index, action) in script.actions.iter().enumerate() {
        if let Err(error) = apply(session, script, config, &mut page, action) {
            warn!(index, code = ?error.code, "action rejected: {}", error.message);
            rejected.push(RejectedAction { index, error });
        }
    }

    let mut orders = script.orders.clone();
    order::sort_newest_first(&mut orders);

    info!(
        actions = script.actions.len(),
        rejected = rejected.len(),
        "replay finished"
    );

    ReplayOutput {
        session_id: session.id(),
        restaurant_slug: session.restaurant_slug().to_string(),
        cart: cart::get_cart(session, config),
        product: page.as_ref().map(|p| p.view(config)),
        orders: order::list_orders(&orders, config),
        rejected,
    }
}

fn apply(
    session: &mut Session,
    script: &Script,
    config: &ConfigState,
    page: &mut Option<ProductDetails>,
    action: &Action,
) -> Result<(), ApiError> {
    match action {
        Action::ToggleCart => {
            cart::toggle_cart(session, config);
        }
        Action::AddProduct { line } => {
            cart::add_to_cart(session, config, line.clone());
        }
        Action::AddProductChecked { line } => {
            cart::add_to_cart_checked(session, config, line.clone())?;
        }
        Action::IncreaseQuantity { product_id } => {
            cart::increase_cart_item(session, config, product_id);
        }
        Action::DecreaseQuantity { product_id } => {
            cart::decrease_cart_item(session, config, product_id);
        }
        Action::RemoveProduct { product_id } => {
            cart::remove_from_cart(session, config, product_id);
        }
        Action::OpenProduct { product_id } => {
            let product = script.product(product_id)?;
            *page = Some(ProductDetails::open(product.clone()));
        }
        Action::IncrementSelection => open_page(page)?.increment(),
        Action::DecrementSelection => open_page(page)?.decrement(),
        Action::AddToBag => {
            open_page(page)?.add_to_bag(session, config);
        }
    }
    Ok(())
}

fn open_page(page: &mut Option<ProductDetails>) -> Result<&mut ProductDetails, ApiError> {
    page.as_mut()
        .ok_or_else(|| ApiError::validation("No product page is open"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const SCRIPT: &str = r#"{
        "products": [
            {
                "id": "p1",
                "name": "Burger",
                "description": "Grilled",
                "price": 1000,
                "image_url": "/burger.png",
                "ingredients": ["Bun", "Beef"],
                "restaurant": { "name": "FSW Donalds", "avatar_image_url": "/a.png" }
            }
        ],
        "orders": [
            {
                "id": 1, "status": "FINISHED", "total": 1000,
                "created_at": "2026-01-10T12:00:00Z",
                "restaurant": { "name": "FSW Donalds", "avatar_image_url": "/a.png" },
                "products": []
            },
            {
                "id": 2, "status": "PENDING", "total": 2000,
                "created_at": "2026-01-11T12:00:00Z",
                "restaurant": { "name": "FSW Donalds", "avatar_image_url": "/a.png" }
            }
        ],
        "actions": [
            { "type": "openProduct", "productId": "p1" },
            { "type": "incrementSelection" },
            { "type": "incrementSelection" },
            { "type": "addToBag" },
            { "type": "decreaseQuantity", "productId": "p1" },
            { "type": "decreaseQuantity", "productId": "p1" },
            { "type": "decreaseQuantity", "productId": "p1" },
            { "type": "increaseQuantity", "productId": "unknown" },
            { "type": "openProduct", "productId": "missing" },
            { "type": "addProductChecked", "line": {
                "id": "p2", "name": "Soda", "unit_price": 500, "image_url": "/s.png", "quantity": 0
            } }
        ]
    }"#;

    #[test]
    fn test_replay() {
        let config = ConfigState::default();
        let script = Script::from_json(SCRIPT).unwrap();
        let mut session = Session::new(config.restaurant_slug.clone());

        let out = replay(&mut session, &script, &config);

        // 3 added, decreased to 1 and held there
        assert!(out.cart.is_open);
        assert_eq!(out.cart.lines.len(), 1);
        assert_eq!(out.cart.lines[0].quantity, 1);
        assert_eq!(out.cart.totals.formatted_total, "R$ 10,00");

        // page stays on the last opened product
        assert_eq!(out.product.as_ref().unwrap().quantity, 3);

        // newest order first
        let ids: Vec<i64> = out.orders.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);

        assert_eq!(out.rejected.len(), 2);
        assert_eq!(out.rejected[0].index, 8);
        assert_eq!(out.rejected[0].error.code, ErrorCode::NotFound);
        assert_eq!(out.rejected[1].index, 9);
        assert_eq!(out.rejected[1].error.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_demo_script_replays_cleanly() {
        let config = ConfigState::default();
        let script = Script::from_json(include_str!("../../../demos/session.json")).unwrap();
        let mut session = Session::new("fsw-donalds");

        let out = replay(&mut session, &script, &config);

        assert!(out.rejected.is_empty());
        // bag opened by the first add, closed by the final toggle
        assert!(!out.cart.is_open);
        let quantities: Vec<i64> = out.cart.lines.iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![1, 2]);
        assert_eq!(out.cart.totals.formatted_total, "R$ 51,70");
        assert_eq!(out.orders.orders[0].status_label, "Em preparo");
    }

    #[test]
    fn test_selection_without_page_is_rejected() {
        let config = ConfigState::default();
        let script = Script::from_json(r#"{ "actions": [ { "type": "addToBag" } ] }"#).unwrap();
        let mut session = Session::new("fsw-donalds");

        let out = replay(&mut session, &script, &config);

        assert_eq!(out.rejected.len(), 1);
        assert_eq!(out.rejected[0].error.message, "No product page is open");
        assert!(out.cart.lines.is_empty());
    }

    #[test]
    fn test_malformed_script() {
        let err = Script::from_json(r#"{ "actions": [ { "type": "explode" } ] }"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_add_product_line_uses_core_field_names() {
        let action: Action = serde_json::from_str(
            r#"{ "type": "addProduct", "line": {
                "id": "p2", "name": "Soda", "unit_price": 500, "image_url": "/s.png", "quantity": 1
            } }"#,
        )
        .unwrap();
        let Action::AddProduct { line } = action else {
            panic!("expected addProduct");
        };
        assert_eq!(line.unit_price.cents(), 500);
        assert_eq!(line.image_url, "/s.png");

        let camel = r#"{ "type": "addProduct", "line": {
            "id": "p2", "name": "Soda", "unitPrice": 500, "imageUrl": "/s.png", "quantity": 1
        } }"#;
        assert!(serde_json::from_str::<Action>(camel).is_err());
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_value(Action::RemoveProduct {
            product_id: "p1".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "removeProduct");
        assert_eq!(json["productId"], "p1");
    }
}
