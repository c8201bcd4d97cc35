//! # Domain Types
//!
//! Catalog and order records displayed by the ordering front-end.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │  OrderProduct   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  product_id     │       │
//! │  │  name           │   │  status         │   │  product_name   │       │
//! │  │  price          │   │  total          │   │  quantity       │       │
//! │  │  restaurant ────┼─┐ │  restaurant ────┼─┐ │  unit_price     │       │
//! │  └─────────────────┘ │ └─────────────────┘ │ └─────────────────┘       │
//! │                      ▼                     ▼                            │
//! │               ┌──────────────────────────────┐                          │
//! │               │     RestaurantSummary        │                          │
//! │               │  name, avatar_image_url      │                          │
//! │               └──────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These records are produced by the catalog/order data layer and are
//! read-only here. Nothing in this crate fetches them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Restaurant
// =============================================================================

/// The slice of a restaurant record shown next to products and orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RestaurantSummary {
    pub name: String,
    pub avatar_image_url: String,
}

// =============================================================================
// Product
// =============================================================================

/// A menu product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, assigned by the catalog.
    pub id: String,

    /// Display name shown on the menu and in the cart.
    pub name: String,

    /// Text shown under "Sobre".
    pub description: String,

    /// Unit price in cents.
    pub price: Money,

    /// Product photo.
    pub image_url: String,

    /// Shown under "Ingredientes".
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Restaurant this product belongs to.
    pub restaurant: RestaurantSummary,
}

// =============================================================================
// Order Status
// =============================================================================

/// Preparation status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, not yet picked up by the kitchen.
    #[default]
    Pending,
    /// Kitchen is working on it.
    InPreparation,
    /// Ready / delivered.
    Finished,
}

impl OrderStatus {
    /// Label shown on the order history badge.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::InPreparation => "Em preparo",
            OrderStatus::Finished => "Finalizado",
        }
    }

    /// Finished orders get the highlighted badge.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self, OrderStatus::Finished)
    }
}

// =============================================================================
// Order
// =============================================================================

/// One product line of a placed order.
///
/// Name and unit price are frozen at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderProduct {
    pub id: i64,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl OrderProduct {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// A placed order as shown in the order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: i64,
    pub status: OrderStatus,

    /// Total charged, as recorded when the order was placed.
    pub total: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    pub restaurant: RestaurantSummary,

    #[serde(default)]
    pub products: Vec<OrderProduct>,
}

impl Order {
    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(|p| p.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Pending.label(), "Pendente");
        assert_eq!(OrderStatus::InPreparation.label(), "Em preparo");
        assert_eq!(OrderStatus::Finished.label(), "Finalizado");
    }

    #[test]
    fn test_only_finished_is_finished() {
        assert!(OrderStatus::Finished.is_finished());
        assert!(!OrderStatus::Pending.is_finished());
        assert!(!OrderStatus::InPreparation.is_finished());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::InPreparation).unwrap();
        assert_eq!(json, "\"IN_PREPARATION\"");
        let status: OrderStatus = serde_json::from_str("\"FINISHED\"").unwrap();
        assert_eq!(status, OrderStatus::Finished);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_line_totals() {
        let order = Order {
            id: 1,
            status: OrderStatus::Pending,
            total: Money::from_cents(8970),
            created_at: Utc::now(),
            restaurant: RestaurantSummary {
                name: "FSW Donalds".to_string(),
                avatar_image_url: "/avatar.png".to_string(),
            },
            products: vec![
                OrderProduct {
                    id: 1,
                    product_id: "p1".to_string(),
                    product_name: "McOferta".to_string(),
                    quantity: 2,
                    unit_price: Money::from_cents(3990),
                },
                OrderProduct {
                    id: 2,
                    product_id: "p2".to_string(),
                    product_name: "Coca-Cola".to_string(),
                    quantity: 1,
                    unit_price: Money::from_cents(990),
                },
            ],
        };

        assert_eq!(order.total_quantity(), 3);
        assert_eq!(order.products[0].line_total().cents(), 7980);
    }

    #[test]
    fn test_product_ingredients_default_to_empty() {
        let json = r#"{
            "id": "p1",
            "name": "Burger",
            "description": "Grilled",
            "price": 1000,
            "image_url": "/burger.png",
            "restaurant": { "name": "FSW Donalds", "avatar_image_url": "/a.png" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.ingredients.is_empty());
        assert_eq!(product.price.cents(), 1000);
    }
}
