//! Error type shared by every Catena operation.
//!
//! All parameter validation happens before any buffer is allocated or any
//! digest is invoked, so an error never leaves partial state behind.

/// Errors returned by the Catena password hashing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A cost or length parameter is outside its legal range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A buffer does not have the fixed size its operation requires.
    #[error("invalid length for {what} (expected {expected} bytes, got {actual})")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The memory array for this garlic level cannot be allocated.
    #[error("memory array for garlic {garlic} cannot be allocated")]
    MemoryCost { garlic: u8 },
}

/// Result type
pub type Result<T> = core::result::Result<T, Error>;
