//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `TxError` as one variant
//! where they surface core failures.

use thiserror::Error;

/// The top-level error type for `tx-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TxError {
    #[error("invalid location {0:?}: expected a single character A-F")]
    InvalidLocation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tx-core`.
pub type TxResult<T> = Result<T, TxError>;
