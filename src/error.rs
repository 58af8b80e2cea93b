//! Crate error type

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the arena core.
///
/// Only `InvalidConfiguration`, `Json` and `Io` ever leave the crate through
/// the simulator API. `DivideByZero` is produced by the vector math and is
/// absorbed by collision resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// Division by an exact zero (zero-length normalize or a zero scalar).
    #[error("division by zero in {what}")]
    DivideByZero { what: &'static str },

    /// Rejected particle count or physical parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed settings document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
