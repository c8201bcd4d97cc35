//! # Commands
//!
//! Operations the front-end invokes. Each takes the session (and config)
//! explicitly and returns a serializable view.
//!
//! - [`cart`] - toggle, add, increase, decrease, remove
//! - [`product`] - product page stepper and "add to bag"
//! - [`order`] - order history page

pub mod cart;
pub mod order;
pub mod product;
