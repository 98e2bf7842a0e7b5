//! Observability for the RhinoFuse storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Session-scoped structured logging over `tracing`
//! - `init_tracing` - Subscriber setup for binaries and tests

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;

// Re-export from rhino-core for convenience
pub use rhino_core::{LogFormat, SessionId};
