//! # vbuf-tensors
//!
//! Vectors and matrices whose components live inside a byte buffer.
//!
//! A buffered tensor is a view: it holds a [`ByteBuffer`], an origin and an
//! encoding. Each accessor reads through to the buffer and each mutator
//! writes straight to it. This makes it possible to work in place on vertex
//! buffers, uniform blocks, memory-mapped files or FFI regions.
//!
//! ```rust
//! use vbuf_core::{BaseOffset, ByteBuffer};
//! use vbuf_tensors::{Matrix4x4BufferedF32, Vector4BufferedF32};
//!
//! // A uniform block: one matrix followed by one color.
//! let ubo = ByteBuffer::direct(Matrix4x4BufferedF32::SIZE_BYTES + Vector4BufferedF32::SIZE_BYTES);
//! let base = BaseOffset::new(0);
//! let mvp = Matrix4x4BufferedF32::create_with_base(ubo.clone(), base.clone(), 0);
//! let color = Vector4BufferedF32::create_with_base(ubo.clone(), base.clone(), 64);
//!
//! mvp.set_matrix_4x4d(&vbuf_math::Matrix4x4D::IDENTITY).unwrap();
//! color.set_w(1.0).unwrap();
//! assert_eq!(ubo.get_f32(64 + 12).unwrap(), 1.0);
//! ```
//!
//! ## Types
//!
//! - [`VectorBuffered`] - generic vector view, aliased as
//!   `Vector{2,3,4}Buffered{I8,I16,I32,I64,F16,F32,F64}`
//! - [`MatrixBuffered`] - generic column-major matrix view, aliased as
//!   `Matrix{2x2,3x3,4x4}Buffered{F16,F32,F64}`
//! - `P`-prefixed aliases take phantom coordinate-system tags
//!
//! ## Construction
//!
//! Every type has the same four constructors:
//!
//! | Constructor | Buffer | Origin |
//! |-------------|--------|--------|
//! | `create_heap()` | new, zeroed, exactly `SIZE_BYTES` | private, 0 |
//! | `create_direct()` | new direct, zeroed, exactly `SIZE_BYTES` | private, 0 |
//! | `create_with(buf)` | caller's | private, 0 |
//! | `create_with_base(buf, base, off)` | caller's | shared `base` + `off` |
//!
//! ## Threading
//!
//! Views are neither `Send` nor `Sync`. A buffer, its base cells and every
//! view over them belong to one thread.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod storage;
mod vector;

pub use matrix::MatrixBuffered;
pub use vector::VectorBuffered;

pub use vbuf_core::{BaseOffset, ByteBuffer, ByteOrder, Error, Narrowing, Result};

use vbuf_core::codec::{F16, F32, F64, I8, I16, I32, I64};

/// Default tag for views that carry no coordinate system.
///
/// Uninhabited: it only ever appears as a type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Untagged {}

macro_rules! vector_aliases {
    ($($plain:ident, $tagged:ident, $codec:ident, $n:literal;)+) => {
        $(
            #[doc = concat!("A ", $n, "-component vector stored as `", stringify!($codec), "`.")]
            pub type $plain = VectorBuffered<$codec, $n>;

            #[doc = concat!("A ", $n, "-component vector stored as `", stringify!($codec), "`, tagged with `T`.")]
            pub type $tagged<T> = VectorBuffered<$codec, $n, T>;
        )+
    };
}

vector_aliases! {
    Vector2BufferedI8, PVector2BufferedI8, I8, 2;
    Vector3BufferedI8, PVector3BufferedI8, I8, 3;
    Vector4BufferedI8, PVector4BufferedI8, I8, 4;
    Vector2BufferedI16, PVector2BufferedI16, I16, 2;
    Vector3BufferedI16, PVector3BufferedI16, I16, 3;
    Vector4BufferedI16, PVector4BufferedI16, I16, 4;
    Vector2BufferedI32, PVector2BufferedI32, I32, 2;
    Vector3BufferedI32, PVector3BufferedI32, I32, 3;
    Vector4BufferedI32, PVector4BufferedI32, I32, 4;
    Vector2BufferedI64, PVector2BufferedI64, I64, 2;
    Vector3BufferedI64, PVector3BufferedI64, I64, 3;
    Vector4BufferedI64, PVector4BufferedI64, I64, 4;
    Vector2BufferedF16, PVector2BufferedF16, F16, 2;
    Vector3BufferedF16, PVector3BufferedF16, F16, 3;
    Vector4BufferedF16, PVector4BufferedF16, F16, 4;
    Vector2BufferedF32, PVector2BufferedF32, F32, 2;
    Vector3BufferedF32, PVector3BufferedF32, F32, 3;
    Vector4BufferedF32, PVector4BufferedF32, F32, 4;
    Vector2BufferedF64, PVector2BufferedF64, F64, 2;
    Vector3BufferedF64, PVector3BufferedF64, F64, 3;
    Vector4BufferedF64, PVector4BufferedF64, F64, 4;
}

macro_rules! matrix_aliases {
    ($($plain:ident, $tagged:ident, $codec:ident, $n:literal;)+) => {
        $(
            #[doc = concat!("A ", $n, "x", $n, " matrix stored column-major as `", stringify!($codec), "`.")]
            pub type $plain = MatrixBuffered<$codec, $n>;

            #[doc = concat!("A ", $n, "x", $n, " matrix stored column-major as `", stringify!($codec), "`, mapping `T0` to `T1`.")]
            pub type $tagged<T0, T1> = MatrixBuffered<$codec, $n, T0, T1>;
        )+
    };
}

matrix_aliases! {
    Matrix2x2BufferedF16, PMatrix2x2BufferedF16, F16, 2;
    Matrix3x3BufferedF16, PMatrix3x3BufferedF16, F16, 3;
    Matrix4x4BufferedF16, PMatrix4x4BufferedF16, F16, 4;
    Matrix2x2BufferedF32, PMatrix2x2BufferedF32, F32, 2;
    Matrix3x3BufferedF32, PMatrix3x3BufferedF32, F32, 3;
    Matrix4x4BufferedF32, PMatrix4x4BufferedF32, F32, 4;
    Matrix2x2BufferedF64, PMatrix2x2BufferedF64, F64, 2;
    Matrix3x3BufferedF64, PMatrix3x3BufferedF64, F64, 3;
    Matrix4x4BufferedF64, PMatrix4x4BufferedF64, F64, 4;
}

/// Prelude module for convenient imports.
///
/// ```
/// use vbuf_tensors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MatrixBuffered, Untagged, VectorBuffered};
    pub use vbuf_core::prelude::*;
}
