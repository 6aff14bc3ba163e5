//! # vbuf-core
//!
//! Core primitives for tensors whose storage lives inside a byte buffer.
//!
//! This crate provides the storage layer used by `vbuf-tensors`:
//!
//! - [`ByteBuffer`] - fixed-capacity byte region with a [`ByteOrder`]
//! - [`BaseOffset`] - shared, relocatable base offset cell
//! - [`range`] - validation of byte offsets against [`ADDRESSABLE_LIMIT`]
//! - [`codec`] - get/put per storage [`Encoding`], including binary16 packing
//! - [`index`] - column-major indexing and overflow-checked offset arithmetic
//!
//! ## Access Path
//!
//! Every component access made by a view follows the same chain:
//!
//! ```text
//! base + constant offset        (index::effective_offset)
//!    -> + index * width         (index::component_byte_offset)
//!    -> range check             (range::check_offset)
//!    -> decode / encode         (codec::Codec::get / put)
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! vbuf-core (this crate)
//!    ^
//!    +-- vbuf-tensors (buffered vector/matrix views)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`ByteOrder`], [`Encoding`], [`Narrowing`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod base;
pub mod buffer;
pub mod codec;
pub mod encoding;
pub mod error;
pub mod index;
pub mod range;

pub use base::BaseOffset;
pub use buffer::{BufferKind, ByteBuffer, ByteOrder};
pub use codec::{Codec, Floating, Integral, Narrowing};
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use range::ADDRESSABLE_LIMIT;

/// Prelude module for convenient imports.
///
/// ```
/// use vbuf_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::base::BaseOffset;
    pub use crate::buffer::{ByteBuffer, ByteOrder};
    pub use crate::codec::{Codec, Floating, Integral, Narrowing};
    pub use crate::encoding::Encoding;
    pub use crate::error::{Error, Result};
}
