//! Scalar codecs: one zero-sized tag per storage encoding.
//!
//! A codec reads and writes a single component at an absolute byte offset,
//! converting between the stored width and the logical domain:
//!
//! - integral codecs ([`I8`], [`I16`], [`I32`], [`I64`]) use `i64`
//! - floating codecs ([`F16`], [`F32`], [`F64`]) use `f64`
//!
//! Tensor views are generic over a codec tag, so the width logic exists once
//! per encoding instead of once per tensor type.
//!
//! # Narrowing
//!
//! Integral stores truncate with two's complement by default:
//! storing `300` through [`I8`] writes `0x2C` and reads back as `44`.
//! [`Narrowing::Strict`] rejects such values instead. Floating stores
//! always round (binary16 and binary32 are lossy) and never fail on value.
//!
//! # Usage
//!
//! ```rust
//! use vbuf_core::codec::{Codec, F16, I8};
//! use vbuf_core::{ByteBuffer, Narrowing};
//!
//! let buf = ByteBuffer::heap(4);
//! I8::put(&buf, 0, 300, Narrowing::Truncate).unwrap();
//! assert_eq!(I8::get(&buf, 0).unwrap(), 44);
//!
//! F16::put(&buf, 2, 0.1, Narrowing::Truncate).unwrap();
//! assert_eq!(F16::get(&buf, 2).unwrap(), half::f16::from_f64(0.1).to_f64());
//! ```

use std::fmt;

use half::f16;
use tracing::debug;

use crate::{ByteBuffer, Encoding, Error, Result};

/// Policy for integral values that do not fit the target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Narrowing {
    /// Keep the low bits (two's complement truncation).
    #[default]
    Truncate,
    /// Fail with [`Error::ValueOutOfRange`].
    Strict,
}

/// A storage encoding with get/put primitives.
pub trait Codec: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Logical value domain (`i64` or `f64`).
    type Value: Copy + PartialEq + Default + fmt::Debug;

    /// Runtime description of this encoding.
    const ENCODING: Encoding;

    /// Width of one component in bytes.
    const WIDTH: usize = Self::ENCODING.width();

    /// Decodes the component at `offset`.
    fn get(buffer: &ByteBuffer, offset: i64) -> Result<Self::Value>;

    /// Encodes `value` at `offset`.
    fn put(buffer: &ByteBuffer, offset: i64, value: Self::Value, narrowing: Narrowing) -> Result<()>;
}

/// Codecs whose logical domain is `i64`.
pub trait Integral: Codec<Value = i64> {}

/// Codecs whose logical domain is `f64`.
pub trait Floating: Codec<Value = f64> {}

/// Packs `value` into binary16 bits, rounding to nearest even.
#[inline]
pub fn pack_half(value: f64) -> u16 {
    f16::from_f64(value).to_bits()
}

/// Unpacks binary16 bits. Exact: every half value is representable as `f64`.
#[inline]
pub fn unpack_half(bits: u16) -> f64 {
    f16::from_bits(bits).to_f64()
}

/// Applies the narrowing policy for an integral encoding.
#[inline]
fn narrow(value: i64, encoding: Encoding, narrowing: Narrowing) -> Result<i64> {
    if narrowing == Narrowing::Strict {
        let fits = match (encoding.min_integer(), encoding.max_integer()) {
            (Some(min), Some(max)) => value >= min && value <= max,
            _ => true,
        };
        if !fits {
            debug!(value, %encoding, "strict narrowing rejected value");
            return Err(Error::ValueOutOfRange { value, encoding });
        }
    }
    Ok(value)
}

macro_rules! integral_codec {
    ($(#[$doc:meta])* $name:ident, $enc:ident, $get:ident, $put:ident, $raw:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Codec for $name {
            type Value = i64;
            const ENCODING: Encoding = Encoding::$enc;

            #[inline]
            fn get(buffer: &ByteBuffer, offset: i64) -> Result<i64> {
                buffer.$get(offset).map(i64::from)
            }

            #[inline]
            fn put(buffer: &ByteBuffer, offset: i64, value: i64, narrowing: Narrowing) -> Result<()> {
                let value = narrow(value, Self::ENCODING, narrowing)?;
                buffer.$put(offset, value as $raw)
            }
        }

        impl Integral for $name {}
    };
}

integral_codec!(
    /// 8-bit signed integer storage.
    I8, I8, get_i8, put_i8, i8
);
integral_codec!(
    /// 16-bit signed integer storage.
    I16, I16, get_i16, put_i16, i16
);
integral_codec!(
    /// 32-bit signed integer storage.
    I32, I32, get_i32, put_i32, i32
);
integral_codec!(
    /// 64-bit signed integer storage.
    I64, I64, get_i64, put_i64, i64
);

/// IEEE-754 binary16 storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F16;

impl Codec for F16 {
    type Value = f64;
    const ENCODING: Encoding = Encoding::F16;

    #[inline]
    fn get(buffer: &ByteBuffer, offset: i64) -> Result<f64> {
        buffer.get_u16(offset).map(unpack_half)
    }

    #[inline]
    fn put(buffer: &ByteBuffer, offset: i64, value: f64, _: Narrowing) -> Result<()> {
        buffer.put_u16(offset, pack_half(value))
    }
}

impl Floating for F16 {}

/// IEEE-754 binary32 storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F32;

impl Codec for F32 {
    type Value = f64;
    const ENCODING: Encoding = Encoding::F32;

    #[inline]
    fn get(buffer: &ByteBuffer, offset: i64) -> Result<f64> {
        buffer.get_f32(offset).map(f64::from)
    }

    #[inline]
    fn put(buffer: &ByteBuffer, offset: i64, value: f64, _: Narrowing) -> Result<()> {
        buffer.put_f32(offset, value as f32)
    }
}

impl Floating for F32 {}

/// IEEE-754 binary64 storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct F64;

impl Codec for F64 {
    type Value = f64;
    const ENCODING: Encoding = Encoding::F64;

    #[inline]
    fn get(buffer: &ByteBuffer, offset: i64) -> Result<f64> {
        buffer.get_f64(offset)
    }

    #[inline]
    fn put(buffer: &ByteBuffer, offset: i64, value: f64, _: Narrowing) -> Result<()> {
        buffer.put_f64(offset, value)
    }
}

impl Floating for F64 {}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Narrowing = Narrowing::Truncate;

    #[test]
    fn test_widths() {
        assert_eq!(I8::WIDTH, 1);
        assert_eq!(I16::WIDTH, 2);
        assert_eq!(F16::WIDTH, 2);
        assert_eq!(I32::WIDTH, 4);
        assert_eq!(F32::WIDTH, 4);
        assert_eq!(I64::WIDTH, 8);
        assert_eq!(F64::WIDTH, 8);
    }

    #[test]
    fn test_integral_truncation() {
        let buf = ByteBuffer::heap(16);
        I8::put(&buf, 0, 0x1FF, T).unwrap();
        assert_eq!(I8::get(&buf, 0).unwrap(), -1);

        I16::put(&buf, 2, 0x12345, T).unwrap();
        assert_eq!(I16::get(&buf, 2).unwrap(), 0x2345);

        I32::put(&buf, 4, i64::from(i32::MAX) + 1, T).unwrap();
        assert_eq!(I32::get(&buf, 4).unwrap(), i64::from(i32::MIN));

        I64::put(&buf, 8, i64::MIN, T).unwrap();
        assert_eq!(I64::get(&buf, 8).unwrap(), i64::MIN);
    }

    #[test]
    fn test_strict_narrowing() {
        let buf = ByteBuffer::heap(8);
        let s = Narrowing::Strict;
        assert!(I8::put(&buf, 0, 127, s).is_ok());
        assert!(I8::put(&buf, 0, -128, s).is_ok());
        assert_eq!(
            I8::put(&buf, 0, 128, s),
            Err(Error::ValueOutOfRange {
                value: 128,
                encoding: Encoding::I8
            })
        );
        // Rejected value leaves the previous contents in place.
        assert_eq!(I8::get(&buf, 0).unwrap(), -128);
        assert!(I64::put(&buf, 0, i64::MAX, s).is_ok());
    }

    #[test]
    fn test_half_known_values() {
        assert_eq!(pack_half(1.0), 0x3C00);
        assert_eq!(pack_half(-2.0), 0xC000);
        assert_eq!(pack_half(65504.0), 0x7BFF);
        assert_eq!(pack_half(1.0e6), 0x7C00);
        assert_eq!(unpack_half(0x3555), 0.333251953125);
        assert!(unpack_half(0x7E00).is_nan());
        // Smallest subnormal.
        assert_eq!(unpack_half(0x0001), 2f64.powi(-24));
    }

    #[test]
    fn test_half_round_to_nearest_even() {
        // 1 + 2^-11 is halfway between 1.0 and the next half; ties to even.
        assert_eq!(pack_half(1.0 + 2f64.powi(-11)), 0x3C00);
        // 1 + 3 * 2^-11 rounds up to the even neighbour 1 + 2^-9.
        assert_eq!(pack_half(1.0 + 3.0 * 2f64.powi(-11)), 0x3C02);
    }

    #[test]
    fn test_float32_narrowing() {
        let buf = ByteBuffer::heap(4);
        F32::put(&buf, 0, 0.1, T).unwrap();
        assert_eq!(F32::get(&buf, 0).unwrap(), f64::from(0.1f32));
        assert_ne!(F32::get(&buf, 0).unwrap(), 0.1);
    }

    #[test]
    fn test_float64_exact() {
        let buf = ByteBuffer::heap(8);
        F64::put(&buf, 0, std::f64::consts::PI, T).unwrap();
        assert_eq!(F64::get(&buf, 0).unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn test_capacity_error_propagates() {
        let buf = ByteBuffer::heap(2);
        assert!(F32::get(&buf, 0).unwrap_err().is_range_error());
        assert!(F16::put(&buf, 1, 1.0, T).is_err());
    }
}
