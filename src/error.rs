//! Error types for the waytrack library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when the packed order's internal invariants
//!   are violated, i.e. a register that does not decode to a permutation.
//!
//! The mutating operations never produce errors; [`InvariantError`] only
//! surfaces from explicit validation of externally supplied registers.
//!
//! ## Example Usage
//!
//! ```
//! use waytrack::error::InvariantError;
//! use waytrack::order::PackedOrder8;
//!
//! // A fresh order always validates.
//! assert!(PackedOrder8::new().check_invariants().is_ok());
//!
//! // A raw register restored from storage can be checked before use.
//! let err: InvariantError = PackedOrder8::from_raw(0).check_invariants().unwrap_err();
//! assert!(err.message().contains("more than one position"));
//! ```

use std::fmt;

/// Error returned when a packed order register violates its invariants.
///
/// Produced by [`PackedOrder::check_invariants`](crate::order::PackedOrder::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
