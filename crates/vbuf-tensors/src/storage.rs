//! Component storage shared by every buffered view.
//!
//! A [`Storage`] ties a [`ByteBuffer`] to an origin and runs the access
//! chain for each component:
//!
//! ```text
//! origin + constant  ->  check  ->  + index * width  ->  check  ->  codec
//! ```
//!
//! The origin is either a private fixed offset (heap, direct and `with`
//! constructors) or a [`BaseOffset`] shared with other views.

use tracing::{debug, trace};
use vbuf_core::index::{component_byte_offset, effective_offset};
use vbuf_core::range::{check_offset, check_range};
use vbuf_core::{BaseOffset, ByteBuffer, Codec, Error, Narrowing, Result};

#[derive(Debug, Clone)]
enum Origin {
    Fixed(i64),
    Shared(BaseOffset),
}

#[derive(Debug, Clone)]
pub(crate) struct Storage {
    buffer: ByteBuffer,
    origin: Origin,
    constant: i64,
    narrowing: Narrowing,
}

impl Storage {
    pub(crate) fn fixed(buffer: ByteBuffer, offset: i64) -> Self {
        Self {
            buffer,
            origin: Origin::Fixed(offset),
            constant: 0,
            narrowing: Narrowing::default(),
        }
    }

    pub(crate) fn shared(buffer: ByteBuffer, base: BaseOffset, constant: i64) -> Self {
        trace!(base = base.get(), constant, "view attached to shared base");
        Self {
            buffer,
            origin: Origin::Shared(base),
            constant,
            narrowing: Narrowing::default(),
        }
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    #[inline]
    pub(crate) fn base(&self) -> Option<&BaseOffset> {
        match &self.origin {
            Origin::Fixed(_) => None,
            Origin::Shared(base) => Some(base),
        }
    }

    #[inline]
    pub(crate) fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    #[inline]
    pub(crate) fn set_narrowing(&mut self, narrowing: Narrowing) {
        self.narrowing = narrowing;
    }

    /// `base + constant`, validated.
    #[inline]
    pub(crate) fn byte_offset(&self) -> Result<i64> {
        let base = match &self.origin {
            Origin::Fixed(offset) => *offset,
            Origin::Shared(base) => base.get(),
        };
        check_offset(effective_offset(base, self.constant)?)
    }

    /// Moves the view so that [`Self::byte_offset`] returns `offset`.
    ///
    /// A shared base is rewritten, which moves every view attached to it.
    pub(crate) fn set_byte_offset(&mut self, offset: i64) -> Result<()> {
        if let Err(err) = check_offset(offset) {
            debug!(offset, "rejected byte offset");
            return Err(err);
        }
        match &mut self.origin {
            Origin::Fixed(fixed) => *fixed = offset,
            Origin::Shared(base) => {
                let Some(value) = offset.checked_sub(self.constant) else {
                    debug!(offset, constant = self.constant, "rejected byte offset");
                    return Err(Error::overflow("offset - constant offset"));
                };
                base.set(value);
            }
        }
        Ok(())
    }

    #[inline]
    fn component_offset<E: Codec>(&self, index: usize) -> Result<i64> {
        component_byte_offset(self.byte_offset()?, index, E::WIDTH)
    }

    #[inline]
    pub(crate) fn get<E: Codec>(&self, index: usize) -> Result<E::Value> {
        E::get(&self.buffer, self.component_offset::<E>(index)?)
    }

    #[inline]
    pub(crate) fn put<E: Codec>(&self, index: usize, value: E::Value) -> Result<()> {
        E::put(&self.buffer, self.component_offset::<E>(index)?, value, self.narrowing)
    }
}

/// Validates a component index against a tensor's component count.
#[inline]
pub(crate) fn check_component(index: usize, count: usize) -> Result<usize> {
    check_range("component", index as i64, 0, count as i64).map(|_| index)
}
