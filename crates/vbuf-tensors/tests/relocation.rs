//! Relocation through shared bases and explicit byte offsets.

use vbuf_core::ADDRESSABLE_LIMIT;
use vbuf_math::{Matrix2x2D, Vector4D, Vector4L};
use vbuf_tensors::prelude::*;
use vbuf_tensors::{
    Matrix2x2BufferedF64, Vector2BufferedF32, Vector3BufferedI16, Vector4BufferedF32, Vector4BufferedF64,
    Vector4BufferedI32,
};

// ============================================================================
// Shared base
// ============================================================================

#[test]
fn relocation_reveals_other_region_and_keeps_first_write() {
    let buf = ByteBuffer::heap(2 * Vector4BufferedF64::SIZE_BYTES);
    let base = BaseOffset::new(0);
    let v = Vector4BufferedF64::create_with_base(buf, base.clone(), 0);

    v.set_vector_4d(&Vector4D::new(0.0, 1.0, 2.0, 3.0)).unwrap();

    base.set(v.size_bytes() as i64);
    assert_eq!(v.vector_4d().unwrap(), Vector4D::ZERO);

    v.set_vector_4d(&Vector4D::new(0.0, 1.0, 2.0, 3.0)).unwrap();

    base.set(0);
    assert_eq!(v.x().unwrap(), 0.0);
    assert_eq!(v.y().unwrap(), 1.0);
    assert_eq!(v.z().unwrap(), 2.0);
    assert_eq!(v.w().unwrap(), 3.0);
}

#[test]
fn relocation_integral_vector() {
    let buf = ByteBuffer::direct(2 * Vector4BufferedI32::SIZE_BYTES);
    let base = BaseOffset::new(0);
    let v = Vector4BufferedI32::create_with_base(buf, base.clone(), 0);

    v.set_vector_4l(&Vector4L::new(0, 1, 2, 3)).unwrap();
    base.set(Vector4BufferedI32::SIZE_BYTES as i64);
    assert_eq!(v.vector_4l().unwrap(), Vector4L::ZERO);
    v.set_vector_4l(&Vector4L::new(4, 5, 6, 7)).unwrap();
    base.set(0);
    assert_eq!(v.vector_4l().unwrap(), Vector4L::new(0, 1, 2, 3));
}

#[test]
fn one_base_moves_every_attached_view() {
    // Interleaved vertices: position (vec3 i16) at +0, uv (vec2 f32) at +8.
    const STRIDE: i64 = 16;
    let buf = ByteBuffer::heap(3 * STRIDE as usize);
    let base = BaseOffset::new(0);
    let pos = Vector3BufferedI16::create_with_base(buf.clone(), base.clone(), 0);
    let uv = Vector2BufferedF32::create_with_base(buf.clone(), base.clone(), 8);

    for i in 0..3 {
        base.set(i * STRIDE);
        pos.set_x(i).unwrap();
        pos.set_y(-i).unwrap();
        uv.set_x(i as f64 * 0.5).unwrap();
        uv.set_y(1.0).unwrap();
    }

    base.set(STRIDE);
    assert_eq!(pos.x().unwrap(), 1);
    assert_eq!(pos.y().unwrap(), -1);
    assert_eq!(uv.x().unwrap(), 0.5);
    assert_eq!(uv.byte_offset().unwrap(), STRIDE + 8);

    base.advance(STRIDE).unwrap();
    assert_eq!(uv.x().unwrap(), 1.0);
    assert!(pos.base().unwrap().ptr_eq(uv.base().unwrap()));
}

#[test]
fn set_byte_offset_on_shared_view_rewrites_base() {
    let buf = ByteBuffer::heap(64);
    let base = BaseOffset::new(0);
    let mut a = Vector2BufferedF32::create_with_base(buf.clone(), base.clone(), 8);
    let b = Vector2BufferedF32::create_with_base(buf, base.clone(), 16);

    a.set_byte_offset(24).unwrap();
    assert_eq!(base.get(), 16);
    assert_eq!(a.byte_offset().unwrap(), 24);
    assert_eq!(b.byte_offset().unwrap(), 32);
}

#[test]
fn base_past_capacity_fails_without_panicking() {
    let buf = ByteBuffer::heap(Vector4BufferedF32::SIZE_BYTES);
    let base = BaseOffset::new(0);
    let v = Vector4BufferedF32::create_with_base(buf, base.clone(), 0);
    base.set(4);
    // x..z fit, w runs one component past the end
    assert!(v.x().is_ok());
    assert!(matches!(v.w(), Err(Error::OutOfBounds { offset: 16, width: 4, capacity: 16 })));
}

#[test]
fn negative_base_is_out_of_range() {
    let buf = ByteBuffer::heap(32);
    let v = Vector4BufferedF32::create_with_base(buf, BaseOffset::new(-4), 0);
    assert!(matches!(v.x(), Err(Error::OutOfRange { value: -4, .. })));
    assert!(matches!(v.y(), Err(Error::OutOfRange { value: -4, .. })));
}

#[test]
fn overflowing_base_is_arithmetic_error() {
    let buf = ByteBuffer::heap(32);
    let v = Matrix2x2BufferedF64::create_with_base(buf, BaseOffset::new(i64::MAX), 8);
    assert!(v.r0c0().unwrap_err().is_overflow());
    assert!(v.set_matrix_2x2d(&Matrix2x2D::IDENTITY).unwrap_err().is_overflow());
}

// ============================================================================
// Explicit byte offsets
// ============================================================================

#[test]
fn explicit_offset_limits() {
    let mut v = Vector4BufferedF32::create_heap();
    assert_eq!(v.byte_offset().unwrap(), 0);

    v.set_byte_offset(0).unwrap();
    assert_eq!(v.byte_offset().unwrap(), 0);

    v.set_byte_offset(1024).unwrap();
    assert_eq!(v.byte_offset().unwrap(), 1024);

    v.set_byte_offset(ADDRESSABLE_LIMIT - 1).unwrap();
    assert_eq!(v.byte_offset().unwrap(), ADDRESSABLE_LIMIT - 1);

    assert!(matches!(
        v.set_byte_offset(ADDRESSABLE_LIMIT),
        Err(Error::OutOfRange { value, upper, .. }) if value == ADDRESSABLE_LIMIT && upper == ADDRESSABLE_LIMIT
    ));
    assert!(v.set_byte_offset(i64::MAX).is_err());
    assert!(v.set_byte_offset(-1).is_err());

    // Failed updates leave the previous offset in place.
    assert_eq!(v.byte_offset().unwrap(), ADDRESSABLE_LIMIT - 1);
}

#[test]
fn explicit_offset_moves_within_caller_buffer() {
    let buf = ByteBuffer::heap(3 * Vector4BufferedF32::SIZE_BYTES);
    let mut v = Vector4BufferedF32::create_with(buf.clone());
    assert!(v.base().is_none());

    for i in 0..3 {
        v.set_byte_offset(i * 16).unwrap();
        v.set_vector_4d(&Vector4D::new(i as f64, 0.0, 0.0, 1.0)).unwrap();
    }
    assert_eq!(buf.get_f32(32).unwrap(), 2.0);
    assert_eq!(buf.get_f32(44).unwrap(), 1.0);

    // Past the end of the caller's buffer.
    v.set_byte_offset(48).unwrap();
    assert!(v.x().unwrap_err().is_range_error());
}

#[test]
fn cloned_fixed_view_has_independent_offset() {
    let mut a = Vector4BufferedF32::create_with(ByteBuffer::heap(32));
    let b = a.clone();
    a.set_byte_offset(16).unwrap();
    assert_eq!(b.byte_offset().unwrap(), 0);
    a.set_x(5.0).unwrap();
    assert_eq!(b.x().unwrap(), 0.0);
}
