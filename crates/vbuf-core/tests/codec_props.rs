//! Property tests for scalar codecs and offset arithmetic.
//!
//! Lossless encodings must round-trip exactly. Lossy encodings must read back
//! the canonical narrowing of the stored value, compared bit for bit.

use half::f16;
use proptest::prelude::*;
use vbuf_core::codec::{Codec, F16, F32, F64, I8, I16, I32, I64};
use vbuf_core::index::{component_byte_offset, matrix_index};
use vbuf_core::{ADDRESSABLE_LIMIT, ByteBuffer, ByteOrder, Narrowing};

const T: Narrowing = Narrowing::Truncate;

fn both_orders() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::BigEndian), Just(ByteOrder::LittleEndian)]
}

proptest! {
    // Lossless integral round trips.
    #[test]
    fn i8_roundtrip(v in any::<i8>(), order in both_orders()) {
        let buf = ByteBuffer::from_vec(vec![0; 1], order);
        I8::put(&buf, 0, i64::from(v), T).unwrap();
        prop_assert_eq!(I8::get(&buf, 0).unwrap(), i64::from(v));
    }

    #[test]
    fn i16_roundtrip(v in any::<i16>(), order in both_orders()) {
        let buf = ByteBuffer::from_vec(vec![0; 2], order);
        I16::put(&buf, 0, i64::from(v), T).unwrap();
        prop_assert_eq!(I16::get(&buf, 0).unwrap(), i64::from(v));
    }

    #[test]
    fn i32_roundtrip(v in any::<i32>(), order in both_orders()) {
        let buf = ByteBuffer::from_vec(vec![0; 4], order);
        I32::put(&buf, 0, i64::from(v), T).unwrap();
        prop_assert_eq!(I32::get(&buf, 0).unwrap(), i64::from(v));
    }

    #[test]
    fn i64_roundtrip(v in any::<i64>(), order in both_orders()) {
        let buf = ByteBuffer::from_vec(vec![0; 8], order);
        I64::put(&buf, 0, v, T).unwrap();
        prop_assert_eq!(I64::get(&buf, 0).unwrap(), v);
    }

    // Truncation matches two's-complement narrowing, reproducibly.
    #[test]
    fn narrow_integral_truncates(v in any::<i64>()) {
        let buf = ByteBuffer::heap(8);
        I8::put(&buf, 0, v, T).unwrap();
        prop_assert_eq!(I8::get(&buf, 0).unwrap(), i64::from(v as i8));
        I16::put(&buf, 0, v, T).unwrap();
        prop_assert_eq!(I16::get(&buf, 0).unwrap(), i64::from(v as i16));
        I32::put(&buf, 0, v, T).unwrap();
        prop_assert_eq!(I32::get(&buf, 0).unwrap(), i64::from(v as i32));
    }

    #[test]
    fn strict_accepts_exactly_the_representable_range(v in any::<i64>()) {
        let buf = ByteBuffer::heap(2);
        let fits = i16::try_from(v).is_ok();
        prop_assert_eq!(I16::put(&buf, 0, v, Narrowing::Strict).is_ok(), fits);
    }

    #[test]
    fn f64_roundtrip(v in any::<f64>().prop_filter("nan", |v| !v.is_nan())) {
        let buf = ByteBuffer::heap(8);
        F64::put(&buf, 0, v, T).unwrap();
        prop_assert_eq!(F64::get(&buf, 0).unwrap().to_bits(), v.to_bits());
    }

    #[test]
    fn f32_reads_back_canonical_narrowing(v in any::<f64>().prop_filter("nan", |v| !v.is_nan())) {
        let buf = ByteBuffer::heap(4);
        F32::put(&buf, 0, v, T).unwrap();
        let expected = f64::from(v as f32);
        prop_assert_eq!(F32::get(&buf, 0).unwrap().to_bits(), expected.to_bits());
    }

    #[test]
    fn f16_reads_back_canonical_narrowing(v in -70000.0f64..70000.0, order in both_orders()) {
        let buf = ByteBuffer::from_vec(vec![0; 2], order);
        F16::put(&buf, 0, v, T).unwrap();
        let expected = f16::from_f64(v).to_f64();
        prop_assert_eq!(F16::get(&buf, 0).unwrap().to_bits(), expected.to_bits());
    }

    #[test]
    fn f16_every_bit_pattern_survives(bits in any::<u16>()) {
        let value = f16::from_bits(bits);
        prop_assume!(!value.is_nan());
        let buf = ByteBuffer::heap(2);
        F16::put(&buf, 0, value.to_f64(), T).unwrap();
        prop_assert_eq!(buf.get_u16(0).unwrap(), bits);
    }

    #[test]
    fn column_major_index_is_a_bijection(dim in 2usize..=4) {
        let mut seen = vec![false; dim * dim];
        for row in 0..dim {
            for column in 0..dim {
                let i = matrix_index(row, column, dim).unwrap();
                prop_assert_eq!(i, column * dim + row);
                prop_assert!(!seen[i]);
                seen[i] = true;
            }
        }
    }

    #[test]
    fn component_offsets_are_checked(base in any::<i64>(), index in 0usize..16, width in prop::sample::select(vec![1usize, 2, 4, 8])) {
        let exact = i128::from(base) + (index * width) as i128;
        let result = component_byte_offset(base, index, width);
        if exact >= 0 && exact < i128::from(ADDRESSABLE_LIMIT) {
            prop_assert_eq!(result.unwrap(), exact as i64);
        } else {
            prop_assert!(result.is_err());
        }
    }
}
