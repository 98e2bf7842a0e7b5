//! Storefront errors.

use rhino_commerce::CommerceError;
use rhino_core::ConfigError;
use thiserror::Error;

/// Errors surfaced by the storefront session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("invalid store config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
