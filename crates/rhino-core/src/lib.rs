//! Core abstractions for the RhinoFuse storefront.
//!
//! This crate provides the fundamental types shared by every page:
//! - `StoreConfig` - Store configuration loaded from TOML or JSON
//! - `Page` - Static dispatch from request path to page
//! - `SessionId` - Identifier for one in-memory shopping session

mod config;
mod route;
mod session;

pub use config::*;
pub use route::*;
pub use session::*;
