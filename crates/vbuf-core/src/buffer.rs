//! Byte buffers that back tensor views.
//!
//! A [`ByteBuffer`] is a fixed-capacity, randomly addressable region of bytes
//! with a configurable [`ByteOrder`]. It is a cheap handle: cloning it shares
//! the same storage, and [`ByteBuffer::ptr_eq`] tells two handles to the same
//! region apart from two regions with equal contents.
//!
//! The tensor layer never grows or reallocates a buffer. It only performs
//! typed reads and writes at absolute byte offsets, each checked against the
//! capacity.
//!
//! # Usage
//!
//! ```rust
//! use vbuf_core::{ByteBuffer, ByteOrder};
//!
//! let buf = ByteBuffer::from_vec(vec![0; 16], ByteOrder::BigEndian);
//! buf.put_i32(4, 0x01020304).unwrap();
//! assert_eq!(buf.get_u8(4).unwrap(), 0x01);
//! assert_eq!(buf.get_i32(4).unwrap(), 0x01020304);
//! ```
//!
//! # Thread Safety
//!
//! Buffers use `Rc` and `RefCell` internally and are neither `Send` nor `Sync`.
//! A buffer and every view over it belong to one thread.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use byteorder::{BigEndian, ByteOrder as RawOrder, LittleEndian};
use tracing::trace;

use crate::{Error, Result};

/// Byte order used for multi-byte component access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the target platform.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Where a buffer's storage was allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Ordinary process memory.
    Heap,
    /// Storage meant to be handed to foreign code (GPU upload, FFI).
    ///
    /// Direct storage is never moved for the life of the buffer.
    Direct,
    /// Caller-supplied bytes.
    Wrapped,
}

struct Inner {
    bytes: RefCell<Box<[u8]>>,
    capacity: usize,
    order: Cell<ByteOrder>,
    kind: BufferKind,
}

/// Shared handle to a fixed-capacity byte region.
#[derive(Clone)]
pub struct ByteBuffer {
    inner: Rc<Inner>,
}

macro_rules! typed_access {
    ($get:ident, $put:ident, $ty:ty, $read:ident, $write:ident) => {
        #[doc = concat!("Reads a `", stringify!($ty), "` at `offset` in the buffer's byte order.")]
        #[inline]
        pub fn $get(&self, offset: i64) -> Result<$ty> {
            let range = self.range(offset, std::mem::size_of::<$ty>())?;
            let bytes = self.bytes()?;
            let src = &bytes[range];
            Ok(match self.order() {
                ByteOrder::BigEndian => BigEndian::$read(src),
                ByteOrder::LittleEndian => LittleEndian::$read(src),
            })
        }

        #[doc = concat!("Writes a `", stringify!($ty), "` at `offset` in the buffer's byte order.")]
        #[inline]
        pub fn $put(&self, offset: i64, value: $ty) -> Result<()> {
            let range = self.range(offset, std::mem::size_of::<$ty>())?;
            let mut bytes = self.bytes_mut()?;
            let dst = &mut bytes[range];
            match self.order() {
                ByteOrder::BigEndian => BigEndian::$write(dst, value),
                ByteOrder::LittleEndian => LittleEndian::$write(dst, value),
            }
            Ok(())
        }
    };
}

impl ByteBuffer {
    fn new(bytes: Box<[u8]>, order: ByteOrder, kind: BufferKind) -> Self {
        trace!(capacity = bytes.len(), ?order, ?kind, "byte buffer created");
        Self {
            inner: Rc::new(Inner {
                capacity: bytes.len(),
                bytes: RefCell::new(bytes),
                order: Cell::new(order),
                kind,
            }),
        }
    }

    /// Allocates a zeroed heap buffer in native byte order.
    pub fn heap(capacity: usize) -> Self {
        Self::new(vec![0u8; capacity].into_boxed_slice(), ByteOrder::native(), BufferKind::Heap)
    }

    /// Allocates a zeroed direct buffer in native byte order.
    pub fn direct(capacity: usize) -> Self {
        Self::new(vec![0u8; capacity].into_boxed_slice(), ByteOrder::native(), BufferKind::Direct)
    }

    /// Wraps existing bytes. The capacity is `bytes.len()`.
    pub fn from_vec(bytes: Vec<u8>, order: ByteOrder) -> Self {
        Self::new(bytes.into_boxed_slice(), order, BufferKind::Wrapped)
    }

    /// Capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Current byte order.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.inner.order.get()
    }

    /// Changes the byte order for subsequent accesses through any handle.
    pub fn set_order(&self, order: ByteOrder) {
        self.inner.order.set(order);
    }

    /// Allocation kind.
    #[inline]
    pub fn kind(&self) -> BufferKind {
        self.inner.kind
    }

    /// Whether this buffer was allocated with [`ByteBuffer::direct`].
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.inner.kind == BufferKind::Direct
    }

    /// Returns `true` if both handles refer to the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copies the current contents out.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`ByteBuffer::with_bytes_mut`].
    pub fn to_vec(&self) -> Vec<u8> {
        self.inner.bytes.borrow().to_vec()
    }

    /// Runs `f` with the raw bytes, e.g. to upload them to a GPU.
    ///
    /// The buffer must not be written through any handle while `f` runs.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> Result<R> {
        let bytes = self.bytes()?;
        Ok(f(&bytes))
    }

    /// Runs `f` with the raw bytes mutably.
    ///
    /// The buffer must not be accessed through any handle while `f` runs.
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> Result<R> {
        let mut bytes = self.bytes_mut()?;
        Ok(f(&mut bytes))
    }

    fn bytes(&self) -> Result<Ref<'_, Box<[u8]>>> {
        self.inner
            .bytes
            .try_borrow()
            .map_err(|_| Error::invalid_argument("byte buffer is mutably borrowed"))
    }

    fn bytes_mut(&self) -> Result<RefMut<'_, Box<[u8]>>> {
        self.inner
            .bytes
            .try_borrow_mut()
            .map_err(|_| Error::invalid_argument("byte buffer is already borrowed"))
    }

    /// Validates an access of `width` bytes at `offset` against the capacity.
    fn range(&self, offset: i64, width: usize) -> Result<Range<usize>> {
        let capacity = self.capacity();
        let start = usize::try_from(offset).map_err(|_| Error::out_of_bounds(offset, width, capacity))?;
        match start.checked_add(width) {
            Some(end) if end <= capacity => Ok(start..end),
            _ => Err(Error::out_of_bounds(offset, width, capacity)),
        }
    }

    /// Reads a byte at `offset`.
    #[inline]
    pub fn get_u8(&self, offset: i64) -> Result<u8> {
        let range = self.range(offset, 1)?;
        Ok(self.bytes()?[range.start])
    }

    /// Writes a byte at `offset`.
    #[inline]
    pub fn put_u8(&self, offset: i64, value: u8) -> Result<()> {
        let range = self.range(offset, 1)?;
        self.bytes_mut()?[range.start] = value;
        Ok(())
    }

    /// Reads a signed byte at `offset`.
    #[inline]
    pub fn get_i8(&self, offset: i64) -> Result<i8> {
        self.get_u8(offset).map(|b| b as i8)
    }

    /// Writes a signed byte at `offset`.
    #[inline]
    pub fn put_i8(&self, offset: i64, value: i8) -> Result<()> {
        self.put_u8(offset, value as u8)
    }

    typed_access!(get_i16, put_i16, i16, read_i16, write_i16);
    typed_access!(get_u16, put_u16, u16, read_u16, write_u16);
    typed_access!(get_i32, put_i32, i32, read_i32, write_i32);
    typed_access!(get_i64, put_i64, i64, read_i64, write_i64);
    typed_access!(get_f32, put_f32, f32, read_f32, write_f32);
    typed_access!(get_f64, put_f64, f64, read_f64, write_f64);
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("capacity", &self.capacity())
            .field("order", &self.order())
            .field("kind", &self.kind())
            .finish()
    }
}
