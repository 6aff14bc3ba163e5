//! Buffered 2x2, 3x3 and 4x4 matrices.
//!
//! [`MatrixBuffered<E, N, T0, T1>`] stores an `N x N` matrix in **column-major**
//! order, the layout graphics APIs expect for uniform and vertex data:
//!
//! ```text
//!            column 0          column 1          column 2
//! offset:  0w   1w   2w      3w   4w   5w      6w   7w   8w
//!         [r0c0 r1c0 r2c0]  [r0c1 r1c1 r2c1]  [r0c2 r1c2 r2c2]
//! ```
//!
//! Values move in and out in the usual row-by-row reading order, so callers
//! never see the column-major layout:
//!
//! ```rust
//! use vbuf_math::Matrix3x3D;
//! use vbuf_tensors::Matrix3x3BufferedF64;
//!
//! let m = Matrix3x3BufferedF64::create_heap();
//! m.set_matrix_3x3d(&Matrix3x3D::of(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0)).unwrap();
//! assert_eq!(m.row_column(0, 1).unwrap(), 1.0);
//! assert_eq!(m.r2c0().unwrap(), 6.0);
//!
//! // Column 0 comes first in the buffer.
//! assert_eq!(m.byte_buffer().get_f64(8).unwrap(), 3.0);
//! ```

use std::fmt;
use std::marker::PhantomData;

use vbuf_core::index::matrix_index;
use vbuf_core::{BaseOffset, ByteBuffer, Floating, Result};
use vbuf_math::{Matrix2x2D, Matrix3x3D, Matrix4x4D, PMatrix2x2D, PMatrix3x3D, PMatrix4x4D};

use crate::storage::Storage;
use crate::Untagged;

/// An `N x N` matrix stored column-major in a byte buffer with encoding `E`,
/// mapping coordinate system `T0` to `T1`.
///
/// Use the aliases in the crate root (`Matrix4x4BufferedF32`,
/// `PMatrix3x3BufferedF16<T0, T1>`, ...) rather than naming this type directly.
pub struct MatrixBuffered<E: Floating, const N: usize, T0: ?Sized = Untagged, T1: ?Sized = Untagged> {
    storage: Storage,
    _marker: PhantomData<(E, fn() -> (*const T0, *const T1))>,
}

impl<E: Floating, const N: usize, T0: ?Sized, T1: ?Sized> MatrixBuffered<E, N, T0, T1> {
    /// Number of rows, and of columns.
    pub const DIMENSION: usize = N;

    /// Number of components.
    pub const COMPONENTS: usize = N * N;

    /// Size of the matrix in bytes.
    pub const SIZE_BYTES: usize = N * N * E::WIDTH;

    fn from_storage(storage: Storage) -> Self {
        Self {
            storage,
            _marker: PhantomData,
        }
    }

    /// Allocates a zeroed heap buffer of exactly [`Self::SIZE_BYTES`] and views
    /// it at offset 0.
    ///
    /// The result is the zero matrix, not the identity.
    pub fn create_heap() -> Self {
        Self::create_with(ByteBuffer::heap(Self::SIZE_BYTES))
    }

    /// Allocates a zeroed direct buffer of exactly [`Self::SIZE_BYTES`] and views
    /// it at offset 0.
    pub fn create_direct() -> Self {
        Self::create_with(ByteBuffer::direct(Self::SIZE_BYTES))
    }

    /// Views `buffer` at a private byte offset of 0.
    pub fn create_with(buffer: ByteBuffer) -> Self {
        Self::from_storage(Storage::fixed(buffer, 0))
    }

    /// Views `buffer` at `base + offset`, where `base` may be shared with other
    /// views.
    pub fn create_with_base(buffer: ByteBuffer, base: BaseOffset, offset: i64) -> Self {
        Self::from_storage(Storage::shared(buffer, base, offset))
    }

    /// Size of the matrix in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        Self::SIZE_BYTES
    }

    /// The backing buffer (the same handle, not a copy).
    #[inline]
    pub fn byte_buffer(&self) -> &ByteBuffer {
        self.storage.buffer()
    }

    /// The shared base, for views made with [`Self::create_with_base`].
    #[inline]
    pub fn base(&self) -> Option<&BaseOffset> {
        self.storage.base()
    }

    /// Effective byte offset of `r0c0`.
    #[inline]
    pub fn byte_offset(&self) -> Result<i64> {
        self.storage.byte_offset()
    }

    /// Moves the matrix to `offset`.
    ///
    /// For views over a shared base this rewrites the base and so moves every
    /// view attached to it.
    pub fn set_byte_offset(&mut self, offset: i64) -> Result<()> {
        self.storage.set_byte_offset(offset)
    }

    /// Component at `(row, column)`.
    #[inline]
    pub fn row_column(&self, row: usize, column: usize) -> Result<f64> {
        self.storage.get::<E>(matrix_index(row, column, N)?)
    }

    /// Sets the component at `(row, column)`.
    #[inline]
    pub fn set_row_column(&self, row: usize, column: usize, value: f64) -> Result<()> {
        self.storage.put::<E>(matrix_index(row, column, N)?, value)
    }

    /// Reads every component as `[row][column]`.
    pub fn to_rows(&self) -> Result<[[f64; N]; N]> {
        let mut out = [[0.0; N]; N];
        for (row, values) in out.iter_mut().enumerate() {
            for (column, value) in values.iter_mut().enumerate() {
                *value = self.row_column(row, column)?;
            }
        }
        Ok(out)
    }

    /// Writes every component from `[row][column]`, row by row.
    ///
    /// Components written before a failing one stay written.
    pub fn set_rows(&self, rows: &[[f64; N]; N]) -> Result<()> {
        for (row, values) in rows.iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                self.set_row_column(row, column, *value)?;
            }
        }
        Ok(())
    }
}

impl<E: Floating, const N: usize, T0: ?Sized, T1: ?Sized> Clone for MatrixBuffered<E, N, T0, T1> {
    /// Clones the view. The buffer and any shared base stay shared.
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone())
    }
}

impl<E: Floating, const N: usize, T0: ?Sized, T1: ?Sized> fmt::Debug for MatrixBuffered<E, N, T0, T1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixBuffered")
            .field("encoding", &E::ENCODING)
            .field("dimension", &N)
            .field("byte_offset", &self.byte_offset().ok())
            .field("buffer", self.byte_buffer())
            .finish()
    }
}

macro_rules! accessors {
    ($n:literal, $(($get:ident, $set:ident, $row:literal, $column:literal)),+ $(,)?) => {
        impl<E: Floating, T0: ?Sized, T1: ?Sized> MatrixBuffered<E, $n, T0, T1> {
            $(
                #[doc = concat!("Component at row ", $row, ", column ", $column, ".")]
                #[inline]
                pub fn $get(&self) -> Result<f64> {
                    self.row_column($row, $column)
                }

                #[doc = concat!("Sets the component at row ", $row, ", column ", $column, ".")]
                #[inline]
                pub fn $set(&self, value: f64) -> Result<()> {
                    self.set_row_column($row, $column, value)
                }
            )+
        }
    };
}

accessors!(2,
    (r0c0, set_r0c0, 0, 0), (r0c1, set_r0c1, 0, 1),
    (r1c0, set_r1c0, 1, 0), (r1c1, set_r1c1, 1, 1),
);
accessors!(3,
    (r0c0, set_r0c0, 0, 0), (r0c1, set_r0c1, 0, 1), (r0c2, set_r0c2, 0, 2),
    (r1c0, set_r1c0, 1, 0), (r1c1, set_r1c1, 1, 1), (r1c2, set_r1c2, 1, 2),
    (r2c0, set_r2c0, 2, 0), (r2c1, set_r2c1, 2, 1), (r2c2, set_r2c2, 2, 2),
);
accessors!(4,
    (r0c0, set_r0c0, 0, 0), (r0c1, set_r0c1, 0, 1), (r0c2, set_r0c2, 0, 2), (r0c3, set_r0c3, 0, 3),
    (r1c0, set_r1c0, 1, 0), (r1c1, set_r1c1, 1, 1), (r1c2, set_r1c2, 1, 2), (r1c3, set_r1c3, 1, 3),
    (r2c0, set_r2c0, 2, 0), (r2c1, set_r2c1, 2, 1), (r2c2, set_r2c2, 2, 2), (r2c3, set_r2c3, 2, 3),
    (r3c0, set_r3c0, 3, 0), (r3c1, set_r3c1, 3, 1), (r3c2, set_r3c2, 3, 2), (r3c3, set_r3c3, 3, 3),
);

macro_rules! bulk {
    ($n:literal, $plain:ident, $tagged:ident, $set:ident, $get:ident, $pset:ident, $pget:ident) => {
        impl<E: Floating, T0: ?Sized, T1: ?Sized> MatrixBuffered<E, $n, T0, T1> {
            #[doc = concat!("Writes every component of a [`", stringify!($plain), "`], row by row.")]
            pub fn $set(&self, m: &$plain) -> Result<()> {
                self.set_rows(&m.m)
            }

            #[doc = concat!("Reads the matrix into a [`", stringify!($plain), "`].")]
            pub fn $get(&self) -> Result<$plain> {
                self.to_rows().map($plain::from_rows)
            }

            #[doc = concat!("Writes every component of a [`", stringify!($tagged), "`] with this view's tags.")]
            pub fn $pset(&self, m: &$tagged<T0, T1>) -> Result<()> {
                self.$set(&m.value())
            }

            #[doc = concat!("Reads the matrix into a [`", stringify!($tagged), "`] with this view's tags.")]
            pub fn $pget(&self) -> Result<$tagged<T0, T1>> {
                self.$get().map($tagged::new)
            }
        }
    };
}

bulk!(2, Matrix2x2D, PMatrix2x2D, set_matrix_2x2d, matrix_2x2d, set_pmatrix_2x2d, pmatrix_2x2d);
bulk!(3, Matrix3x3D, PMatrix3x3D, set_matrix_3x3d, matrix_3x3d, set_pmatrix_3x3d, pmatrix_3x3d);
bulk!(4, Matrix4x4D, PMatrix4x4D, set_matrix_4x4d, matrix_4x4d, set_pmatrix_4x4d, pmatrix_4x4d);

#[cfg(test)]
mod tests {
    use super::*;
    use vbuf_core::codec::{F16, F32, F64};
    use vbuf_core::Error;

    #[test]
    fn test_column_major_bytes() {
        let m = MatrixBuffered::<F32, 2>::create_heap();
        m.set_matrix_2x2d(&Matrix2x2D::of(1.0, 2.0, 3.0, 4.0)).unwrap();
        let buf = m.byte_buffer();
        assert_eq!(buf.get_f32(0).unwrap(), 1.0);
        assert_eq!(buf.get_f32(4).unwrap(), 3.0);
        assert_eq!(buf.get_f32(8).unwrap(), 2.0);
        assert_eq!(buf.get_f32(12).unwrap(), 4.0);
    }

    #[test]
    fn test_named_accessors_4x4() {
        let m = MatrixBuffered::<F64, 4>::create_heap();
        m.set_r3c1(7.0).unwrap();
        m.set_r1c3(-7.0).unwrap();
        assert_eq!(m.row_column(3, 1).unwrap(), 7.0);
        assert_eq!(m.r1c3().unwrap(), -7.0);
        // (3, 1) -> index 1 * 4 + 3 = 7
        assert_eq!(m.byte_buffer().get_f64(7 * 8).unwrap(), 7.0);
    }

    #[test]
    fn test_row_column_checked() {
        let m = MatrixBuffered::<F16, 3>::create_heap();
        assert!(matches!(
            m.row_column(3, 0),
            Err(Error::OutOfRange { what: "row", value: 3, .. })
        ));
        assert!(matches!(
            m.set_row_column(0, 4, 1.0),
            Err(Error::OutOfRange { what: "column", value: 4, .. })
        ));
    }

    #[test]
    fn test_create_heap_is_zero_not_identity() {
        let m = MatrixBuffered::<F64, 3>::create_heap();
        assert_eq!(m.matrix_3x3d().unwrap(), Matrix3x3D::ZERO);
    }

    #[test]
    fn test_half_matrix_lossy() {
        let m = MatrixBuffered::<F16, 2>::create_direct();
        m.set_matrix_2x2d(&Matrix2x2D::of(0.1, 1.0, 65504.0, 1.0e9)).unwrap();
        assert_eq!(m.r0c0().unwrap(), half::f16::from_f64(0.1).to_f64());
        assert_eq!(m.r0c1().unwrap(), 1.0);
        assert_eq!(m.r1c0().unwrap(), 65504.0);
        assert_eq!(m.r1c1().unwrap(), f64::INFINITY);
    }
}
