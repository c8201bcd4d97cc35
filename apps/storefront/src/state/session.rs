//! # Session State
//!
//! One browsing session and the cart it owns.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Ownership                                    │
//! │                                                                         │
//! │  Session::new() ──► Session { id, slug, started_at, cart: Cart }       │
//! │                          │                                              │
//! │                          │  &mut Session passed to each command         │
//! │                          ▼                                              │
//! │  commands::cart::*  ─────► session.cart_mut().add_product(...)          │
//! │                                                                         │
//! │  Session::end() ──► cart dropped, nothing persisted                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global cart. Commands run one at a time on the session's
//! own thread, so no lock is involved.

use bistro_core::Cart;
use chrono::{DateTime, Utc};
use tracing::{info, info_span, Span};
use uuid::Uuid;

/// A single user's browsing session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    restaurant_slug: String,
    started_at: DateTime<Utc>,
    cart: Cart,
}

impl Session {
    /// Starts a session with an empty, closed cart.
    pub fn new(restaurant_slug: impl Into<String>) -> Self {
        let session = Session {
            id: Uuid::new_v4(),
            restaurant_slug: restaurant_slug.into(),
            started_at: Utc::now(),
            cart: Cart::new(),
        };
        info!(session_id = %session.id, restaurant = %session.restaurant_slug, "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn restaurant_slug(&self) -> &str {
        &self.restaurant_slug
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Span carrying the session id, for entering around command batches.
    pub fn span(&self) -> Span {
        info_span!("session", session_id = %self.id, restaurant = %self.restaurant_slug)
    }

    /// Ends the session. The cart goes with it.
    pub fn end(self) {
        let elapsed = Utc::now() - self.started_at;
        info!(
            session_id = %self.id,
            lines = self.cart.len(),
            elapsed_ms = elapsed.num_milliseconds(),
            "session ended"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{CartLine, Money};

    #[test]
    fn test_new_session_has_empty_cart() {
        let session = Session::new("fsw-donalds");
        assert!(session.cart().is_empty());
        assert!(!session.cart().is_open());
        assert_eq!(session.restaurant_slug(), "fsw-donalds");
        assert!(session.started_at() <= Utc::now());
    }

    #[test]
    fn test_sessions_do_not_share_carts() {
        let mut a = Session::new("fsw-donalds");
        let b = Session::new("fsw-donalds");

        a.cart_mut()
            .add_product(CartLine::new("p1", "Burger", Money::from_cents(1000), "/b.png", 1));

        assert_eq!(a.cart().len(), 1);
        assert!(b.cart().is_empty());
        assert_ne!(a.id(), b.id());
    }
}
