//! Error types for byte-buffer-backed tensor access.
//!
//! Every fallible operation in the vbuf crates returns [`Result`]. Failures are
//! reported to the caller immediately: nothing is retried, clamped or wrapped
//! around.
//!
//! # Usage
//!
//! ```rust
//! use vbuf_core::{Error, Result};
//!
//! fn offset_of(index: i64, width: i64) -> Result<i64> {
//!     index
//!         .checked_mul(width)
//!         .ok_or_else(|| Error::overflow("component index * width"))
//! }
//!
//! assert!(offset_of(i64::MAX, 8).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::range`] - offset validation
//! - [`crate::index`] - overflow-checked offset arithmetic
//! - [`crate::buffer`] - capacity checks on typed access
//! - `vbuf-tensors` - every accessor and mutator

use thiserror::Error;

use crate::Encoding;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer-backed tensor access.
///
/// # Categories
///
/// - **Range errors**: [`OutOfRange`](Error::OutOfRange), [`OutOfBounds`](Error::OutOfBounds)
/// - **Arithmetic errors**: [`ArithmeticOverflow`](Error::ArithmeticOverflow)
/// - **Value errors**: [`ValueOutOfRange`](Error::ValueOutOfRange) (strict narrowing only)
/// - **Construction errors**: [`InvalidArgument`](Error::InvalidArgument)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte offset, row or column lies outside its valid range.
    ///
    /// The valid range is the half-open interval `[lower, upper)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vbuf_core::Error;
    ///
    /// let err = Error::out_of_range("byte offset", -1, 0, 2147483647);
    /// assert!(err.to_string().contains("-1"));
    /// assert!(err.is_range_error());
    /// ```
    #[error("{what} {value} is out of range [{lower}, {upper})")]
    OutOfRange {
        /// What was being checked ("byte offset", "row", ...)
        what: &'static str,
        /// The offending value
        value: i64,
        /// Inclusive lower bound
        lower: i64,
        /// Exclusive upper bound
        upper: i64,
    },

    /// Offset or index arithmetic overflowed the signed 64-bit domain.
    #[error("arithmetic overflow computing {operation}")]
    ArithmeticOverflow {
        /// Description of the computation that overflowed
        operation: &'static str,
    },

    /// A typed access would read or write past the end of the buffer.
    #[error("access of {width} bytes at offset {offset} exceeds buffer capacity {capacity}")]
    OutOfBounds {
        /// Absolute byte offset of the access
        offset: i64,
        /// Width of the access in bytes
        width: usize,
        /// Buffer capacity in bytes
        capacity: usize,
    },

    /// An integral value does not fit the target encoding.
    ///
    /// Only raised when a view is configured with
    /// [`Narrowing::Strict`](crate::Narrowing::Strict).
    #[error("value {value} does not fit encoding {encoding}")]
    ValueOutOfRange {
        /// The logical value that was rejected
        value: i64,
        /// Target storage encoding
        encoding: Encoding,
    },

    /// A construction argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(what: &'static str, value: i64, lower: i64, upper: i64) -> Self {
        Self::OutOfRange {
            what,
            value,
            lower,
            upper,
        }
    }

    /// Creates an [`Error::ArithmeticOverflow`] error.
    #[inline]
    pub fn overflow(operation: &'static str) -> Self {
        Self::ArithmeticOverflow { operation }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(offset: i64, width: usize, capacity: usize) -> Self {
        Self::OutOfBounds {
            offset,
            width,
            capacity,
        }
    }

    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` for [`OutOfRange`](Error::OutOfRange) and
    /// [`OutOfBounds`](Error::OutOfBounds).
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is an arithmetic overflow.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::ArithmeticOverflow { .. })
    }
}
