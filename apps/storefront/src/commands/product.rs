//! # Product Details
//!
//! The product page: restaurant header, name, price, a quantity stepper and
//! the "Adicionar à sacola" button.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [avatar] FSW Donalds                                                   │
//! │  McOferta Média Big Mac Duplo                                           │
//! │  R$ 39,90                                      [ < ]  2  [ > ]          │
//! │                                                                         │
//! │  Sobre          ...                                                     │
//! │  Ingredientes   ...                                                     │
//! │                                                                         │
//! │  [            Adicionar à sacola            ]                           │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  add_to_cart(line with qty 2) ──► cart panel opens                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bistro_core::{CartLine, Money, Product};
use serde::Serialize;
use tracing::debug;

use crate::commands::cart::{self, CartResponse};
use crate::state::{ConfigState, Session};

/// Product page state: the product being viewed and the selected quantity.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    product: Product,
    quantity: i64,
}

impl ProductDetails {
    /// Opens the page with quantity 1.
    pub fn open(product: Product) -> Self {
        debug!(product_id = %product.id, "open_product command");
        ProductDetails {
            product,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Selected quantity, always >= 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity += 1;
    }

    /// Steps the quantity down, stopping at 1.
    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Puts the selected quantity in the bag and opens the cart panel.
    pub fn add_to_bag(&self, session: &mut Session, config: &ConfigState) -> CartResponse {
        let line = CartLine::from_product(&self.product, self.quantity);
        cart::add_to_cart(session, config, line);

        if !session.cart().is_open() {
            return cart::toggle_cart(session, config);
        }
        cart::get_cart(session, config)
    }

    /// Renders the page.
    pub fn view(&self, config: &ConfigState) -> ProductDetailsResponse {
        ProductDetailsResponse {
            id: self.product.id.clone(),
            name: self.product.name.clone(),
            description: self.product.description.clone(),
            ingredients: self.product.ingredients.clone(),
            image_url: self.product.image_url.clone(),
            restaurant_name: self.product.restaurant.name.clone(),
            restaurant_avatar_url: self.product.restaurant.avatar_image_url.clone(),
            price: self.product.price,
            formatted_price: config.format_currency(self.product.price),
            quantity: self.quantity,
        }
    }
}

/// Rendered product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image_url: String,
    pub restaurant_name: String,
    pub restaurant_avatar_url: String,
    pub price: Money,
    pub formatted_price: String,
    pub quantity: i64,
}
