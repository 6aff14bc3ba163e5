//! # vbuf-math
//!
//! Plain in-memory vector and matrix values.
//!
//! These are the values that buffered tensors read from and write to:
//!
//! - [`Vector2D`], [`Vector3D`], [`Vector4D`] - `f64` vectors
//! - [`Vector2L`], [`Vector3L`], [`Vector4L`] - `i64` vectors
//! - [`Matrix2x2D`], [`Matrix3x3D`], [`Matrix4x4D`] - `f64` matrices, row-major
//! - `P`-prefixed variants tagged with phantom coordinate systems
//!
//! # Design
//!
//! This crate carries data only. Arithmetic belongs to [`glam`]. Every value
//! converts to and from the matching glam type (`DVec*`, `I64Vec*`, `DMat*`):
//!
//! ```rust
//! use vbuf_math::Matrix4x4D;
//!
//! let rotation = vbuf_math::glam::DMat4::from_rotation_z(std::f64::consts::FRAC_PI_2);
//! let m = Matrix4x4D::from(rotation);
//! assert!((m.row_column(1, 0) - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `vbuf-tensors` - bulk setters and read-back helpers
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/Deserialize for the plain (untagged) values

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod phantom;
mod vector;

pub use matrix::*;
pub use phantom::*;
pub use vector::*;

/// Re-export of glam for callers doing arithmetic on converted values.
pub use glam;
