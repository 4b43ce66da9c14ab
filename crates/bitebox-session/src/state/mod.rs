//! # State Module
//!
//! Session-scoped state, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │   CartState      │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Arc<Mutex<      │                 │  fees            │              │
//! │  │    Cart          │                 │  currency        │              │
//! │  │  >>              │                 │                  │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  • CartState: every write goes through the cart's operations           │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::CartState;
pub use config::ConfigState;
