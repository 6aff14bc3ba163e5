//! Plain 2/3/4-component vectors.
//!
//! `Vector{2,3,4}D` hold `f64` components and `Vector{2,3,4}L` hold `i64`
//! components, matching the logical domains of floating and integral buffer
//! encodings. They are ordinary `Copy` values and own no buffer.
//!
//! ```rust
//! use vbuf_math::{Vector3D, Vector4L};
//!
//! let v = Vector3D::new(1.0, 2.0, 3.0);
//! assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
//!
//! let w = Vector4L::from(vbuf_math::glam::I64Vec4::new(1, 2, 3, 4));
//! assert_eq!(w.w, 4);
//! ```

use std::ops::Index;

macro_rules! vector_type {
    (
        $(#[$doc:meta])*
        $name:ident, $scalar:ty, $n:literal, $glam:ty, [$($field:ident),+]
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            $(
                #[doc = concat!("`", stringify!($field), "` component")]
                pub $field: $scalar,
            )+
        }

        impl $name {
            /// Number of components.
            pub const COMPONENTS: usize = $n;

            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0 as $scalar),+ };

            /// Creates a vector from its components.
            #[inline]
            pub const fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates from an array in declaration order.
            #[inline]
            pub const fn from_array(a: [$scalar; $n]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }

            /// Converts to an array in declaration order.
            #[inline]
            pub const fn to_array(self) -> [$scalar; $n] {
                [$(self.$field),+]
            }
        }

        impl Index<usize> for $name {
            type Output = $scalar;

            #[inline]
            fn index(&self, i: usize) -> &$scalar {
                [$(&self.$field),+][i]
            }
        }

        impl From<[$scalar; $n]> for $name {
            #[inline]
            fn from(a: [$scalar; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$glam> for $name {
            #[inline]
            fn from(v: $glam) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl From<$name> for $glam {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam>::new($(v.$field),+)
            }
        }
    };
}

vector_type!(
    /// Two `f64` components.
    Vector2D, f64, 2, glam::DVec2, [x, y]
);
vector_type!(
    /// Three `f64` components.
    Vector3D, f64, 3, glam::DVec3, [x, y, z]
);
vector_type!(
    /// Four `f64` components.
    Vector4D, f64, 4, glam::DVec4, [x, y, z, w]
);
vector_type!(
    /// Two `i64` components.
    Vector2L, i64, 2, glam::I64Vec2, [x, y]
);
vector_type!(
    /// Three `i64` components.
    Vector3L, i64, 3, glam::I64Vec3, [x, y, z]
);
vector_type!(
    /// Four `i64` components.
    Vector4L, i64, 4, glam::I64Vec4, [x, y, z, w]
);
