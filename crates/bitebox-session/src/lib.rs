//! # bitebox-session: Cart Session Layer
//!
//! Wires a single cart into a browsing session and exposes the commands the
//! web frontend calls.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Startup                                   │
//! │                                                                         │
//! │  1. init_tracing() ───────────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO (bitebox crates at DEBUG), RUST_LOG overrides       │
//! │                                                                         │
//! │  2. ConfigState::from_env() ──────────────────────────────────────────► │
//! │     • Fee schedule and currency, BITEBOX_* overrides                    │
//! │                                                                         │
//! │  3. CartState::new(config.fees) ──────────────────────────────────────► │
//! │     • Empty delivery cart, one per session                              │
//! │                                                                         │
//! │  4. Hand &CartState / &ConfigState to every consumer                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global cart. Whoever starts the session owns the `CartState`
//! and passes it (or a clone of the handle) to the views that need it.

pub mod commands;
pub mod error;
pub mod state;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::{CartState, ConfigState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bitebox_session=trace` - Trace for this crate only
/// - Default: INFO, DEBUG for bitebox crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bitebox_session=debug,bitebox_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
