//! Phantom-tagged vectors and matrices.
//!
//! A tag is any type used purely at compile time to say which coordinate
//! system a value belongs to. Tagged values have exactly the runtime
//! representation of their plain counterparts, so an object-space position
//! cannot be passed where a world-space one is expected:
//!
//! ```compile_fail
//! use vbuf_math::{PVector3D, Vector3D};
//!
//! struct Object;
//! struct World;
//!
//! fn to_world(_: PVector3D<World>) {}
//!
//! let p: PVector3D<Object> = PVector3D::new(Vector3D::ZERO);
//! to_world(p); // mismatched tag
//! ```
//!
//! Matrices carry two tags, the source and target coordinate systems.
//!
//! Tags need no trait implementations and any type, even an uninhabited
//! `enum`, works. The `PhantomData<fn() -> T>` marker keeps tagged values
//! `Copy`, `Send` and `Sync` no matter what the tag is.

use std::fmt;
use std::marker::PhantomData;

use crate::{Matrix2x2D, Matrix3x3D, Matrix4x4D, Vector2D, Vector2L, Vector3D, Vector3L, Vector4D, Vector4L};

macro_rules! tagged {
    ($(#[$doc:meta])* $name:ident<$($tag:ident),+>, $plain:ident) => {
        $(#[$doc])*
        pub struct $name<$($tag: ?Sized),+> {
            value: $plain,
            _tag: PhantomData<fn() -> ($(*const $tag,)+)>,
        }

        impl<$($tag: ?Sized),+> $name<$($tag),+> {
            /// Tags a plain value.
            #[inline]
            pub const fn new(value: $plain) -> Self {
                Self { value, _tag: PhantomData }
            }

            /// The untagged value.
            #[inline]
            pub const fn value(&self) -> $plain {
                self.value
            }
        }

        impl<$($tag: ?Sized),+> Clone for $name<$($tag),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($tag: ?Sized),+> Copy for $name<$($tag),+> {}

        impl<$($tag: ?Sized),+> PartialEq for $name<$($tag),+> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<$($tag: ?Sized),+> fmt::Debug for $name<$($tag),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.value).finish()
            }
        }

        impl<$($tag: ?Sized),+> From<$plain> for $name<$($tag),+> {
            #[inline]
            fn from(value: $plain) -> Self {
                Self::new(value)
            }
        }

        impl<$($tag: ?Sized),+> From<$name<$($tag),+>> for $plain {
            #[inline]
            fn from(v: $name<$($tag),+>) -> Self {
                v.value
            }
        }
    };
}

tagged!(
    /// [`Vector2D`] tagged with coordinate system `T`.
    PVector2D<T>, Vector2D
);
tagged!(
    /// [`Vector3D`] tagged with coordinate system `T`.
    PVector3D<T>, Vector3D
);
tagged!(
    /// [`Vector4D`] tagged with coordinate system `T`.
    PVector4D<T>, Vector4D
);
tagged!(
    /// [`Vector2L`] tagged with coordinate system `T`.
    PVector2L<T>, Vector2L
);
tagged!(
    /// [`Vector3L`] tagged with coordinate system `T`.
    PVector3L<T>, Vector3L
);
tagged!(
    /// [`Vector4L`] tagged with coordinate system `T`.
    PVector4L<T>, Vector4L
);
tagged!(
    /// [`Matrix2x2D`] mapping coordinate system `T0` to `T1`.
    PMatrix2x2D<T0, T1>, Matrix2x2D
);
tagged!(
    /// [`Matrix3x3D`] mapping coordinate system `T0` to `T1`.
    PMatrix3x3D<T0, T1>, Matrix3x3D
);
tagged!(
    /// [`Matrix4x4D`] mapping coordinate system `T0` to `T1`.
    PMatrix4x4D<T0, T1>, Matrix4x4D
);
