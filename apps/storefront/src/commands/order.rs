//! # Order History
//!
//! Read model for the "Meus pedidos" page.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  [Finalizado]                              │  ◄── badge, Success tone
//! │  [avatar] FSW Donalds                      │
//! │  ────────────────────────────────────────  │
//! │  (2) McOferta Média                        │
//! │  (1) Coca-Cola                             │
//! │  ────────────────────────────────────────  │
//! │  R$ 89,70                                  │
//! └────────────────────────────────────────────┘
//! ```

use bistro_core::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// Page heading.
pub const ORDER_LIST_TITLE: &str = "Meus pedidos";

/// Status badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    /// Green badge
    Success,
    /// Grey badge
    Muted,
}

impl From<OrderStatus> for BadgeTone {
    fn from(status: OrderStatus) -> Self {
        if status.is_finished() {
            BadgeTone::Success
        } else {
            BadgeTone::Muted
        }
    }
}

/// One product row of an order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCardLine {
    pub id: i64,
    pub quantity: i64,
    pub name: String,
}

/// One order in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub id: i64,
    pub status: OrderStatus,
    pub status_label: String,
    pub badge_tone: BadgeTone,
    pub restaurant_name: String,
    pub restaurant_avatar_url: String,
    pub products: Vec<OrderCardLine>,
    pub formatted_total: String,
    pub created_at: DateTime<Utc>,
}

impl OrderCard {
    pub fn render(order: &Order, config: &ConfigState) -> Self {
        OrderCard {
            id: order.id,
            status: order.status,
            status_label: order.status.label().to_string(),
            badge_tone: order.status.into(),
            restaurant_name: order.restaurant.name.clone(),
            restaurant_avatar_url: order.restaurant.avatar_image_url.clone(),
            products: order
                .products
                .iter()
                .map(|p| OrderCardLine {
                    id: p.id,
                    quantity: p.quantity,
                    name: p.product_name.clone(),
                })
                .collect(),
            formatted_total: config.format_currency(order.total),
            created_at: order.created_at,
        }
    }
}

/// The order history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub title: String,
    pub orders: Vec<OrderCard>,
}

/// Renders orders in the order given.
pub fn list_orders(orders: &[Order], config: &ConfigState) -> OrderListResponse {
    debug!(count = orders.len(), "list_orders command");
    OrderListResponse {
        title: ORDER_LIST_TITLE.to_string(),
        orders: orders.iter().map(|o| OrderCard::render(o, config)).collect(),
    }
}

/// Sorts orders most recent first; ties keep their relative order.
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
