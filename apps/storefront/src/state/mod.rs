//! # State Module
//!
//! Session-scoped and process-scoped state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────┐          │
//! │  │      Session         │            │     ConfigState      │          │
//! │  │                      │            │                      │          │
//! │  │  id, started_at      │            │  restaurant_slug     │          │
//! │  │  Cart (owned)        │            │  currency format     │          │
//! │  └──────────────────────┘            └──────────────────────┘          │
//! │   one per browsing session            read-only after startup          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::Session;
