//! Byte offset range validation.
//!
//! Every offset a view computes passes through [`check_offset`] before it
//! reaches the buffer. The addressable range is `[0, ADDRESSABLE_LIMIT)`.
//! The limit is the positive signed 32-bit range, so byte offsets stay
//! compatible with APIs that index with an `i32`.

use crate::{Error, Result};

/// Exclusive upper bound on byte offsets.
pub const ADDRESSABLE_LIMIT: i64 = i32::MAX as i64;

/// Validates `offset` against `[0, ADDRESSABLE_LIMIT)`.
///
/// Returns the offset unchanged on success.
///
/// # Example
///
/// ```rust
/// use vbuf_core::range::{check_offset, ADDRESSABLE_LIMIT};
///
/// assert_eq!(check_offset(0).unwrap(), 0);
/// assert!(check_offset(-1).is_err());
/// assert!(check_offset(ADDRESSABLE_LIMIT).is_err());
/// ```
#[inline]
pub fn check_offset(offset: i64) -> Result<i64> {
    check_range("byte offset", offset, 0, ADDRESSABLE_LIMIT)
}

/// Validates that `lower <= value < upper`.
#[inline]
pub fn check_range(what: &'static str, value: i64, lower: i64, upper: i64) -> Result<i64> {
    if value >= lower && value < upper {
        Ok(value)
    } else {
        Err(Error::out_of_range(what, value, lower, upper))
    }
}
