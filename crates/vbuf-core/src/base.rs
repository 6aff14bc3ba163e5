//! Shared, relocatable base offsets.
//!
//! A [`BaseOffset`] is a mutable integer cell that any number of views can
//! hold at once. Setting it moves every attached view to a new region of
//! the buffer at the same moment. This lets one view walk a vertex buffer
//! without being rebuilt:
//!
//! ```rust
//! use vbuf_core::BaseOffset;
//!
//! let base = BaseOffset::new(0);
//! let shared = base.clone();
//! base.set(32);
//! assert_eq!(shared.get(), 32);
//! ```
//!
//! No validation happens here. The value is checked only when a view turns it
//! into an actual byte offset.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::{Error, Result};

/// Shared mutable base offset cell.
///
/// Cloning shares the cell. It is single-threaded and unsynchronized, so it
/// is neither `Send` nor `Sync`.
#[derive(Clone, Default)]
pub struct BaseOffset {
    cell: Rc<Cell<i64>>,
}

impl BaseOffset {
    /// Creates a new, unshared cell.
    pub fn new(value: i64) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.cell.get()
    }

    /// Replaces the value, relocating every view attached to this cell.
    #[inline]
    pub fn set(&self, value: i64) {
        self.cell.set(value);
    }

    /// Adds `delta`, failing on overflow.
    ///
    /// Convenient for stepping through an array of equally sized elements.
    pub fn advance(&self, delta: i64) -> Result<i64> {
        let next = self
            .get()
            .checked_add(delta)
            .ok_or_else(|| Error::overflow("base offset advance"))?;
        self.set(next);
        Ok(next)
    }

    /// Returns `true` if both handles share one cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for BaseOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BaseOffset").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_cell() {
        let a = BaseOffset::new(4);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        b.set(-12);
        assert_eq!(a.get(), -12);
    }

    #[test]
    fn test_independent_cells() {
        let a = BaseOffset::new(0);
        let b = BaseOffset::new(0);
        a.set(1);
        assert_eq!(b.get(), 0);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_advance() {
        let base = BaseOffset::default();
        assert_eq!(base.advance(16).unwrap(), 16);
        assert_eq!(base.advance(16).unwrap(), 32);
        base.set(i64::MAX);
        assert!(base.advance(1).unwrap_err().is_overflow());
        assert_eq!(base.get(), i64::MAX);
    }
}
