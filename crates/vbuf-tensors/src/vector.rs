//! Buffered 2/3/4-component vectors.
//!
//! [`VectorBuffered<E, N, T>`] is an `N`-component vector whose components are
//! encoded with codec `E` at consecutive offsets of a [`ByteBuffer`]:
//!
//! ```text
//! offset:  base+0*w  base+1*w  base+2*w  base+3*w
//!          [   x   ] [   y   ] [   z   ] [   w   ]
//! ```
//!
//! Every read goes to the buffer and every write goes straight to it. The view
//! caches nothing.
//!
//! # Usage
//!
//! ```rust
//! use vbuf_core::{BaseOffset, ByteBuffer};
//! use vbuf_math::Vector3D;
//! use vbuf_tensors::Vector3BufferedF32;
//!
//! // Three positions packed back to back.
//! let buf = ByteBuffer::heap(3 * Vector3BufferedF32::SIZE_BYTES);
//! let base = BaseOffset::new(0);
//! let pos = Vector3BufferedF32::create_with_base(buf.clone(), base.clone(), 0);
//!
//! for i in 0..3 {
//!     base.set((i * Vector3BufferedF32::SIZE_BYTES) as i64);
//!     pos.set_vector_3d(&Vector3D::new(i as f64, 0.0, 1.0)).unwrap();
//! }
//!
//! base.set(12);
//! assert_eq!(pos.x().unwrap(), 1.0);
//! ```

use std::fmt;
use std::marker::PhantomData;

use vbuf_core::{BaseOffset, ByteBuffer, Codec, Floating, Integral, Narrowing, Result};
use vbuf_math::{PVector2D, PVector2L, PVector3D, PVector3L, PVector4D, PVector4L};
use vbuf_math::{Vector2D, Vector2L, Vector3D, Vector3L, Vector4D, Vector4L};

use crate::storage::{Storage, check_component};
use crate::Untagged;

/// An `N`-component vector stored in a byte buffer with encoding `E`,
/// tagged with coordinate system `T`.
///
/// Use the aliases in the crate root (`Vector4BufferedF32`,
/// `PVector3BufferedI16<T>`, ...) rather than naming this type directly.
pub struct VectorBuffered<E: Codec, const N: usize, T: ?Sized = Untagged> {
    storage: Storage,
    _marker: PhantomData<(E, fn() -> *const T)>,
}

impl<E: Codec, const N: usize, T: ?Sized> VectorBuffered<E, N, T> {
    /// Number of components.
    pub const COMPONENTS: usize = N;

    /// Size of the vector in bytes.
    pub const SIZE_BYTES: usize = N * E::WIDTH;

    fn from_storage(storage: Storage) -> Self {
        Self {
            storage,
            _marker: PhantomData,
        }
    }

    /// Allocates a zeroed heap buffer of exactly [`Self::SIZE_BYTES`] and views
    /// it at offset 0.
    pub fn create_heap() -> Self {
        Self::create_with(ByteBuffer::heap(Self::SIZE_BYTES))
    }

    /// Allocates a zeroed direct buffer of exactly [`Self::SIZE_BYTES`] and views
    /// it at offset 0.
    pub fn create_direct() -> Self {
        Self::create_with(ByteBuffer::direct(Self::SIZE_BYTES))
    }

    /// Views `buffer` at a private byte offset of 0.
    pub fn create_with(buffer: ByteBuffer) -> Self {
        Self::from_storage(Storage::fixed(buffer, 0))
    }

    /// Views `buffer` at `base + offset`, where `base` may be shared with other
    /// views.
    pub fn create_with_base(buffer: ByteBuffer, base: BaseOffset, offset: i64) -> Self {
        Self::from_storage(Storage::shared(buffer, base, offset))
    }

    /// Sets how integral components that do not fit the encoding are stored.
    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.storage.set_narrowing(narrowing);
        self
    }

    /// Current narrowing policy.
    pub fn narrowing(&self) -> Narrowing {
        self.storage.narrowing()
    }

    /// Size of the vector in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        Self::SIZE_BYTES
    }

    /// The backing buffer (the same handle, not a copy).
    #[inline]
    pub fn byte_buffer(&self) -> &ByteBuffer {
        self.storage.buffer()
    }

    /// The shared base, for views made with [`Self::create_with_base`].
    #[inline]
    pub fn base(&self) -> Option<&BaseOffset> {
        self.storage.base()
    }

    /// Effective byte offset of the first component.
    #[inline]
    pub fn byte_offset(&self) -> Result<i64> {
        self.storage.byte_offset()
    }

    /// Moves the vector to `offset`.
    ///
    /// For views over a shared base this rewrites the base and so moves every
    /// view attached to it.
    pub fn set_byte_offset(&mut self, offset: i64) -> Result<()> {
        self.storage.set_byte_offset(offset)
    }

    /// Component `index` (0 = x).
    #[inline]
    pub fn component(&self, index: usize) -> Result<E::Value> {
        self.storage.get::<E>(check_component(index, N)?)
    }

    /// Sets component `index` (0 = x).
    #[inline]
    pub fn set_component(&self, index: usize, value: E::Value) -> Result<()> {
        self.storage.put::<E>(check_component(index, N)?, value)
    }

    /// Reads all components in x, y, z, w order.
    pub fn to_array(&self) -> Result<[E::Value; N]> {
        let mut out = [E::Value::default(); N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.storage.get::<E>(i)?;
        }
        Ok(out)
    }

    /// Writes all components in x, y, z, w order.
    ///
    /// Components written before a failing one stay written.
    pub fn set_array(&self, values: &[E::Value; N]) -> Result<()> {
        for (i, value) in values.iter().enumerate() {
            self.storage.put::<E>(i, *value)?;
        }
        Ok(())
    }
}

impl<E: Codec, const N: usize, T: ?Sized> Clone for VectorBuffered<E, N, T> {
    /// Clones the view. The buffer and any shared base stay shared.
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone())
    }
}

impl<E: Codec, const N: usize, T: ?Sized> fmt::Debug for VectorBuffered<E, N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorBuffered")
            .field("encoding", &E::ENCODING)
            .field("components", &N)
            .field("byte_offset", &self.byte_offset().ok())
            .field("buffer", self.byte_buffer())
            .finish()
    }
}

macro_rules! accessors {
    ($n:literal, $(($get:ident, $set:ident, $i:literal)),+) => {
        impl<E: Codec, T: ?Sized> VectorBuffered<E, $n, T> {
            $(
                #[doc = concat!("The `", stringify!($get), "` component.")]
                #[inline]
                pub fn $get(&self) -> Result<E::Value> {
                    self.storage.get::<E>($i)
                }

                #[doc = concat!("Sets the `", stringify!($get), "` component.")]
                #[inline]
                pub fn $set(&self, value: E::Value) -> Result<()> {
                    self.storage.put::<E>($i, value)
                }
            )+
        }
    };
}

accessors!(2, (x, set_x, 0), (y, set_y, 1));
accessors!(3, (x, set_x, 0), (y, set_y, 1), (z, set_z, 2));
accessors!(4, (x, set_x, 0), (y, set_y, 1), (z, set_z, 2), (w, set_w, 3));

macro_rules! bulk {
    (
        $bound:ident, $n:literal, $plain:ident, $tagged:ident,
        $set:ident, $get:ident, $pset:ident, $pget:ident
    ) => {
        impl<E: $bound, T: ?Sized> VectorBuffered<E, $n, T> {
            #[doc = concat!("Writes every component of a [`", stringify!($plain), "`] in x, y, z, w order.")]
            pub fn $set(&self, v: &$plain) -> Result<()> {
                self.set_array(&v.to_array())
            }

            #[doc = concat!("Reads the vector into a [`", stringify!($plain), "`].")]
            pub fn $get(&self) -> Result<$plain> {
                self.to_array().map($plain::from_array)
            }

            #[doc = concat!("Writes every component of a [`", stringify!($tagged), "`] with this view's tag.")]
            pub fn $pset(&self, v: &$tagged<T>) -> Result<()> {
                self.$set(&v.value())
            }

            #[doc = concat!("Reads the vector into a [`", stringify!($tagged), "`] with this view's tag.")]
            pub fn $pget(&self) -> Result<$tagged<T>> {
                self.$get().map($tagged::new)
            }
        }
    };
}

bulk!(Floating, 2, Vector2D, PVector2D, set_vector_2d, vector_2d, set_pvector_2d, pvector_2d);
bulk!(Floating, 3, Vector3D, PVector3D, set_vector_3d, vector_3d, set_pvector_3d, pvector_3d);
bulk!(Floating, 4, Vector4D, PVector4D, set_vector_4d, vector_4d, set_pvector_4d, pvector_4d);
bulk!(Integral, 2, Vector2L, PVector2L, set_vector_2l, vector_2l, set_pvector_2l, pvector_2l);
bulk!(Integral, 3, Vector3L, PVector3L, set_vector_3l, vector_3l, set_pvector_3l, pvector_3l);
bulk!(Integral, 4, Vector4L, PVector4L, set_vector_4l, vector_4l, set_pvector_4l, pvector_4l);
