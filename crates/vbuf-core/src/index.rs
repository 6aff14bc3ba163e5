//! Component indexing and byte offset arithmetic.
//!
//! Matrices are stored **column-major**: the component at `(row, column)` of
//! an `N x N` matrix has linear index `column * N + row`.
//!
//! ```text
//! | r0c0 r0c1 r0c2 |      index:  | 0 3 6 |
//! | r1c0 r1c1 r1c2 |              | 1 4 7 |
//! | r2c0 r2c1 r2c2 |              | 2 5 8 |
//! ```
//!
//! This matches the layout graphics APIs expect, so a buffer of matrices can
//! be uploaded without transposing. Vectors are stored in declaration order
//! (x, y, z, w).
//!
//! All byte arithmetic is overflow checked and then range checked with
//! [`crate::range::check_offset`].

use crate::range::{check_offset, check_range};
use crate::{Error, Result};

/// Column-major linear index of `(row, column)` in a `dimension x dimension` matrix.
///
/// Fails with [`Error::OutOfRange`] if `row` or `column` is not below `dimension`.
///
/// # Example
///
/// ```rust
/// use vbuf_core::index::matrix_index;
///
/// assert_eq!(matrix_index(0, 1, 3).unwrap(), 3);
/// assert_eq!(matrix_index(2, 1, 3).unwrap(), 5);
/// assert!(matrix_index(3, 0, 3).is_err());
/// ```
#[inline]
pub fn matrix_index(row: usize, column: usize, dimension: usize) -> Result<usize> {
    let dim = dimension as i64;
    check_range("row", row as i64, 0, dim)?;
    check_range("column", column as i64, 0, dim)?;
    Ok(column * dimension + row)
}

/// Adds a view's constant offset to its base, overflow checked.
#[inline]
pub fn effective_offset(base: i64, constant: i64) -> Result<i64> {
    base.checked_add(constant)
        .ok_or_else(|| Error::overflow("base + constant offset"))
}

/// Byte offset of component `index` of a tensor starting at `base`.
///
/// Computes `base + index * width` with checked arithmetic and validates the
/// result with [`check_offset`].
///
/// # Example
///
/// ```rust
/// use vbuf_core::index::component_byte_offset;
///
/// assert_eq!(component_byte_offset(16, 3, 4).unwrap(), 28);
/// assert!(component_byte_offset(i64::MAX, 1, 8).unwrap_err().is_overflow());
/// ```
#[inline]
pub fn component_byte_offset(base: i64, index: usize, width: usize) -> Result<i64> {
    let index = i64::try_from(index).map_err(|_| Error::overflow("component index"))?;
    let width = i64::try_from(width).map_err(|_| Error::overflow("component width"))?;
    let delta = index
        .checked_mul(width)
        .ok_or_else(|| Error::overflow("component index * width"))?;
    let offset = base
        .checked_add(delta)
        .ok_or_else(|| Error::overflow("base + component offset"))?;
    check_offset(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::ADDRESSABLE_LIMIT;

    #[test]
    fn test_column_major_3x3() {
        let mut expected = 0;
        for column in 0..3 {
            for row in 0..3 {
                assert_eq!(matrix_index(row, column, 3).unwrap(), expected);
                expected += 1;
            }
        }
    }

    #[test]
    fn test_matrix_index_per_dimension() {
        assert_eq!(matrix_index(1, 1, 2).unwrap(), 3);
        assert_eq!(matrix_index(3, 3, 4).unwrap(), 15);
        assert_eq!(matrix_index(1, 2, 4).unwrap(), 9);
        assert!(matrix_index(0, 2, 2).unwrap_err().is_range_error());
    }

    #[test]
    fn test_component_offset_range() {
        assert_eq!(component_byte_offset(0, 0, 8).unwrap(), 0);
        assert!(component_byte_offset(-8, 0, 8).is_err());
        assert!(component_byte_offset(-8, 1, 8).is_ok());
        assert!(component_byte_offset(ADDRESSABLE_LIMIT - 4, 1, 4).unwrap_err().is_range_error());
        assert!(component_byte_offset(0, usize::MAX, 2).unwrap_err().is_overflow());
    }

    #[test]
    fn test_effective_offset() {
        assert_eq!(effective_offset(100, 28).unwrap(), 128);
        assert!(effective_offset(i64::MAX, 1).unwrap_err().is_overflow());
    }
}
