//! Plain 2x2, 3x3 and 4x4 `f64` matrices.
//!
//! # Convention
//!
//! Values are written and stored **row by row**: `m[row][column]`. The
//! `of` constructors take components in reading order:
//!
//! ```text
//! Matrix3x3D::of(a, b, c,      | a b c |
//!                d, e, f,  =>  | d e f |
//!                g, h, i)      | g h i |
//! ```
//!
//! The column-major layout used inside byte buffers is a storage concern of
//! `vbuf-tensors`. These values never expose it.
//!
//! ```rust
//! use vbuf_math::Matrix2x2D;
//!
//! let m = Matrix2x2D::of(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(m.row_column(0, 1), 2.0);
//! assert_eq!(m.transpose().row_column(0, 1), 3.0);
//! ```

use std::ops::Index;

macro_rules! matrix_type {
    ($(#[$doc:meta])* $name:ident, $n:literal, $glam:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            /// Elements in row-major order: `m[row][column]`.
            pub m: [[f64; $n]; $n],
        }

        impl $name {
            /// Number of rows (and columns).
            pub const DIMENSION: usize = $n;

            /// Zero matrix.
            pub const ZERO: Self = Self { m: [[0.0; $n]; $n] };

            /// Identity matrix.
            pub const IDENTITY: Self = {
                let mut m = [[0.0; $n]; $n];
                let mut i = 0;
                while i < $n {
                    m[i][i] = 1.0;
                    i += 1;
                }
                Self { m }
            };

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[f64; $n]; $n]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            #[inline]
            pub fn from_cols(cols: [[f64; $n]; $n]) -> Self {
                Self::from_rows(cols).transpose()
            }

            /// Component at `(row, column)`.
            ///
            /// # Panics
            ///
            /// Panics if `row` or `column` is not below the dimension.
            #[inline]
            pub fn row_column(&self, row: usize, column: usize) -> f64 {
                self.m[row][column]
            }

            /// Returns the transpose.
            pub fn transpose(&self) -> Self {
                let mut out = Self::ZERO;
                for (r, row) in self.m.iter().enumerate() {
                    for (c, value) in row.iter().enumerate() {
                        out.m[c][r] = *value;
                    }
                }
                out
            }

            /// Returns true if all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().flatten().all(|x| x.is_finite())
            }
        }

        /// The identity matrix.
        ///
        /// Unlike vectors, whose default is zero, a matrix defaults to
        /// [`Self::IDENTITY`]. Freshly created buffered matrices read back as
        /// [`Self::ZERO`].
        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl Index<usize> for $name {
            type Output = [f64; $n];

            #[inline]
            fn index(&self, row: usize) -> &[f64; $n] {
                &self.m[row]
            }
        }

        // glam is column-major, so conversions go through columns.
        impl From<$glam> for $name {
            #[inline]
            fn from(m: $glam) -> Self {
                Self::from_cols(m.to_cols_array_2d())
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(m: $name) -> Self {
                <$glam>::from_cols_array_2d(&m.transpose().m)
            }
        }
    };
}

matrix_type!(
    /// A 2x2 matrix of `f64`.
    Matrix2x2D, 2, glam::DMat2
);
matrix_type!(
    /// A 3x3 matrix of `f64`.
    Matrix3x3D, 3, glam::DMat3
);
matrix_type!(
    /// A 4x4 matrix of `f64`.
    Matrix4x4D, 4, glam::DMat4
);

impl Matrix2x2D {
    /// Creates a matrix from components in row-by-row order.
    #[inline]
    pub const fn of(r0c0: f64, r0c1: f64, r1c0: f64, r1c1: f64) -> Self {
        Self::from_rows([[r0c0, r0c1], [r1c0, r1c1]])
    }
}

impl Matrix3x3D {
    /// Creates a matrix from components in row-by-row order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn of(
        r0c0: f64, r0c1: f64, r0c2: f64,
        r1c0: f64, r1c1: f64, r1c2: f64,
        r2c0: f64, r2c1: f64, r2c2: f64,
    ) -> Self {
        Self::from_rows([
            [r0c0, r0c1, r0c2],
            [r1c0, r1c1, r1c2],
            [r2c0, r2c1, r2c2],
        ])
    }
}

impl Matrix4x4D {
    /// Creates a matrix from components in row-by-row order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub const fn of(
        r0c0: f64, r0c1: f64, r0c2: f64, r0c3: f64,
        r1c0: f64, r1c1: f64, r1c2: f64, r1c3: f64,
        r2c0: f64, r2c1: f64, r2c2: f64, r2c3: f64,
        r3c0: f64, r3c1: f64, r3c2: f64, r3c3: f64,
    ) -> Self {
        Self::from_rows([
            [r0c0, r0c1, r0c2, r0c3],
            [r1c0, r1c1, r1c2, r1c3],
            [r2c0, r2c1, r2c2, r2c3],
            [r3c0, r3c1, r3c2, r3c3],
        ])
    }
}
