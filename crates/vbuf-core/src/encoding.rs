//! Component storage encodings.
//!
//! [`Encoding`] is the runtime description of how one tensor component is laid
//! out in a byte buffer. Each compile-time codec in [`crate::codec`] carries
//! its `Encoding` as an associated constant.
//!
//! | Encoding | Width | Logical domain |
//! |----------|-------|----------------|
//! | `I8`     | 1     | `i64`          |
//! | `I16`    | 2     | `i64`          |
//! | `I32`    | 4     | `i64`          |
//! | `I64`    | 8     | `i64`          |
//! | `F16`    | 2     | `f64`          |
//! | `F32`    | 4     | `f64`          |
//! | `F64`    | 8     | `f64`          |
//!
//! # Usage
//!
//! ```rust
//! use vbuf_core::Encoding;
//!
//! let enc: Encoding = "f16".parse().unwrap();
//! assert_eq!(enc.width(), 2);
//! assert!(enc.is_float());
//! ```

use std::str::FromStr;

use crate::Error;

/// Storage encoding of a single tensor component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// IEEE-754 binary16 half float.
    F16,
    /// IEEE-754 binary32 float.
    F32,
    /// IEEE-754 binary64 double.
    F64,
}

impl Encoding {
    /// All encodings, narrowest integral first.
    pub const ALL: [Encoding; 7] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F16,
        Self::F32,
        Self::F64,
    ];

    /// Width of one component in bytes.
    #[inline]
    pub const fn width(&self) -> usize {
        match self {
            Self::I8 => 1,
            Self::I16 | Self::F16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }

    /// Number of bits per component.
    #[inline]
    pub const fn bits(&self) -> u32 {
        (self.width() * 8) as u32
    }

    /// Whether the logical domain is `f64`.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    /// Whether the logical domain is `i64`.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Smallest logical value storable without truncation.
    ///
    /// Returns `None` for floating encodings.
    pub const fn min_integer(&self) -> Option<i64> {
        match self {
            Self::I8 => Some(i8::MIN as i64),
            Self::I16 => Some(i16::MIN as i64),
            Self::I32 => Some(i32::MIN as i64),
            Self::I64 => Some(i64::MIN),
            _ => None,
        }
    }

    /// Largest logical value storable without truncation.
    ///
    /// Returns `None` for floating encodings.
    pub const fn max_integer(&self) -> Option<i64> {
        match self {
            Self::I8 => Some(i8::MAX as i64),
            Self::I16 => Some(i16::MAX as i64),
            Self::I32 => Some(i32::MAX as i64),
            Self::I64 => Some(i64::MAX),
            _ => None,
        }
    }

    /// Short name, also accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "i8" | "s8" => Ok(Self::I8),
            "i16" | "s16" => Ok(Self::I16),
            "i32" | "s32" => Ok(Self::I32),
            "i64" | "s64" => Ok(Self::I64),
            "f16" | "half" => Ok(Self::F16),
            "f32" | "float" => Ok(Self::F32),
            "f64" | "double" => Ok(Self::F64),
            other => Err(Error::invalid_argument(format!("unknown encoding '{other}'"))),
        }
    }
}
