//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `VtError` into them
//! via `From` impls where a configuration failure can surface.

use thiserror::Error;

/// The error type for `vt-core`: a `TownConfig` that failed validation.
#[derive(Debug, Error)]
pub enum VtError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vt-core`.
pub type VtResult<T> = Result<T, VtError>;
