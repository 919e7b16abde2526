//! Raw `.img` pixel payload decoding
//!
//! The payload is a headerless byte stream of exactly
//! `width * height * element_width` bytes, row-major, no padding. The header
//! is the sole source of truth for its interpretation: the decoder either
//! returns a complete `(height, width)` matrix or a typed error, never a
//! partially filled one.
//!
//! All elements are widened to `f64`. For complex element types only the
//! real component (the leading float of the stored pair) is kept; the
//! imaginary component is dropped. That is a lossy conversion inherited
//! from the product toolchain this format comes out of, and downstream
//! consumers rely on receiving a purely real matrix, so it stays.

use ndarray::Array2;
use tracing::debug;

use crate::band_pipeline::common::error::{BandError, Result};
use crate::band_pipeline::envi::types::{BandHeader, ByteOrder, ElementType};

/// Decode a raw pixel payload against its header contract.
///
/// A payload shorter than `width * height * byte_width` fails with
/// [`BandError::TruncatedPayload`]; trailing excess beyond that length is
/// ignored.
pub fn decode_pixels(header: &BandHeader, payload: &[u8]) -> Result<Array2<f64>> {
    let elem = header.element_type;
    let expected = header.width * header.height * elem.byte_width();
    if payload.len() < expected {
        return Err(BandError::TruncatedPayload {
            expected,
            actual: payload.len(),
        });
    }

    debug!(
        width = header.width,
        height = header.height,
        element = ?elem,
        bytes = expected,
        "decoding pixel payload"
    );

    let values: Vec<f64> = payload[..expected]
        .chunks_exact(elem.byte_width())
        .map(|raw| element_to_f64(raw, elem, header.byte_order))
        .collect();

    Array2::from_shape_vec((header.height, header.width), values)
        .map_err(|e| BandError::DecodeError(e.to_string()))
}

/// Widen one stored element to `f64`.
///
/// Complex elements store the real component first; only its leading float
/// is read, so the imaginary half never enters the matrix.
fn element_to_f64(raw: &[u8], elem: ElementType, order: ByteOrder) -> f64 {
    match elem {
        ElementType::Int8 => i8::from_be_bytes(ordered::<1>(raw, order)) as f64,
        ElementType::Int16 => i16::from_be_bytes(ordered::<2>(raw, order)) as f64,
        ElementType::Int32 => i32::from_be_bytes(ordered::<4>(raw, order)) as f64,
        ElementType::Float32 | ElementType::Complex64 => {
            f32::from_be_bytes(ordered::<4>(raw, order)) as f64
        }
        ElementType::Float64 | ElementType::Complex128 => {
            f64::from_be_bytes(ordered::<8>(raw, order))
        }
        ElementType::UInt16 => u16::from_be_bytes(ordered::<2>(raw, order)) as f64,
        ElementType::UInt32 => u32::from_be_bytes(ordered::<4>(raw, order)) as f64,
        ElementType::UInt64 => u64::from_be_bytes(ordered::<8>(raw, order)) as f64,
    }
}

/// Copy the leading `N` bytes of an element, normalized to big-endian order.
///
/// One swap routine for every element width keeps the 8- and 16-byte cases
/// on the same code path as the common 2-byte one.
fn ordered<const N: usize>(raw: &[u8], order: ByteOrder) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&raw[..N]);
    if order == ByteOrder::Little {
        buf.reverse();
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: usize, height: usize, elem: ElementType, order: ByteOrder) -> BandHeader {
        BandHeader {
            width,
            height,
            byte_order: order,
            element_type: elem,
            map_info: None,
        }
    }

    fn put<const N: usize>(payload: &mut Vec<u8>, be_bytes: [u8; N], order: ByteOrder) {
        match order {
            ByteOrder::Big => payload.extend_from_slice(&be_bytes),
            ByteOrder::Little => payload.extend(be_bytes.iter().rev()),
        }
    }

    #[test]
    fn test_2x2_float32_big_endian() {
        let mut payload = Vec::new();
        for v in [1.0f32, 2.0, 3.0, 4.0] {
            put(&mut payload, v.to_be_bytes(), ByteOrder::Big);
        }
        let matrix = decode_pixels(
            &header(2, 2, ElementType::Float32, ByteOrder::Big),
            &payload,
        )
        .unwrap();
        assert_eq!(matrix.shape(), [2, 2]);
        assert_eq!(matrix[[0, 0]], 1.0);
        assert_eq!(matrix[[0, 1]], 2.0);
        assert_eq!(matrix[[1, 0]], 3.0);
        assert_eq!(matrix[[1, 1]], 4.0);
    }

    #[test]
    fn test_row_major_layout() {
        let payload: Vec<u8> = (0u8..6).collect();
        let matrix =
            decode_pixels(&header(3, 2, ElementType::Int8, ByteOrder::Big), &payload).unwrap();
        // flat index r*width + c
        assert_eq!(matrix[[1, 0]], 3.0);
        assert_eq!(matrix[[1, 2]], 5.0);
    }

    #[test]
    fn test_u16_little_endian() {
        let mut payload = Vec::new();
        for v in [258u16, 772] {
            put(&mut payload, v.to_be_bytes(), ByteOrder::Little);
        }
        let matrix = decode_pixels(
            &header(2, 1, ElementType::UInt16, ByteOrder::Little),
            &payload,
        )
        .unwrap();
        assert_eq!(matrix[[0, 0]], 258.0);
        assert_eq!(matrix[[0, 1]], 772.0);
    }

    #[test]
    fn test_int8_negative_values() {
        let payload = vec![0x80, 0xFF, 0x7F];
        let matrix =
            decode_pixels(&header(3, 1, ElementType::Int8, ByteOrder::Big), &payload).unwrap();
        assert_eq!(matrix[[0, 0]], -128.0);
        assert_eq!(matrix[[0, 1]], -1.0);
        assert_eq!(matrix[[0, 2]], 127.0);
    }

    #[test]
    fn test_float64_big_endian_bit_exact() {
        let mut payload = Vec::new();
        for v in [std::f64::consts::PI, -0.5] {
            put(&mut payload, v.to_be_bytes(), ByteOrder::Big);
        }
        let matrix = decode_pixels(
            &header(2, 1, ElementType::Float64, ByteOrder::Big),
            &payload,
        )
        .unwrap();
        assert_eq!(matrix[[0, 0]], std::f64::consts::PI);
        assert_eq!(matrix[[0, 1]], -0.5);
    }

    #[test]
    fn test_u64_little_endian_full_width_swap() {
        let v = 0x0102_0304_0506_0708u64;
        let mut payload = Vec::new();
        put(&mut payload, v.to_be_bytes(), ByteOrder::Little);
        let matrix = decode_pixels(
            &header(1, 1, ElementType::UInt64, ByteOrder::Little),
            &payload,
        )
        .unwrap();
        assert_eq!(matrix[[0, 0]], v as f64);
    }

    #[test]
    fn test_complex64_keeps_real_component_only() {
        let mut payload = Vec::new();
        // (1.5 + 9.75i), (-2.0 + 4.0i)
        for (re, im) in [(1.5f32, 9.75f32), (-2.0, 4.0)] {
            put(&mut payload, re.to_be_bytes(), ByteOrder::Big);
            put(&mut payload, im.to_be_bytes(), ByteOrder::Big);
        }
        let matrix = decode_pixels(
            &header(2, 1, ElementType::Complex64, ByteOrder::Big),
            &payload,
        )
        .unwrap();
        // Lossy by contract: the imaginary components never show up.
        assert_eq!(matrix[[0, 0]], 1.5);
        assert_eq!(matrix[[0, 1]], -2.0);
    }

    #[test]
    fn test_complex128_little_endian() {
        let mut payload = Vec::new();
        put(&mut payload, 42.25f64.to_be_bytes(), ByteOrder::Little);
        put(&mut payload, (-1.0f64).to_be_bytes(), ByteOrder::Little);
        let matrix = decode_pixels(
            &header(1, 1, ElementType::Complex128, ByteOrder::Little),
            &payload,
        )
        .unwrap();
        assert_eq!(matrix[[0, 0]], 42.25);
    }

    #[test]
    fn test_one_byte_short_is_truncated() {
        let payload = vec![0u8; 2 * 2 * 4 - 1];
        let err = decode_pixels(
            &header(2, 2, ElementType::Float32, ByteOrder::Big),
            &payload,
        )
        .unwrap_err();
        match err {
            BandError::TruncatedPayload { expected, actual } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_excess_ignored() {
        let mut payload = Vec::new();
        for v in [7i16, -7] {
            put(&mut payload, v.to_be_bytes(), ByteOrder::Big);
        }
        payload.extend_from_slice(&[0xDE, 0xAD, 0xBE]);
        let matrix =
            decode_pixels(&header(2, 1, ElementType::Int16, ByteOrder::Big), &payload).unwrap();
        assert_eq!(matrix[[0, 0]], 7.0);
        assert_eq!(matrix[[0, 1]], -7.0);
    }

    #[test]
    fn test_round_trip_int16_both_orders() {
        let values = [-32768i16, -1, 0, 1, 32767, 12345];
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let mut payload = Vec::new();
            for v in values {
                put(&mut payload, v.to_be_bytes(), order);
            }
            let matrix =
                decode_pixels(&header(3, 2, ElementType::Int16, order), &payload).unwrap();
            let decoded: Vec<f64> = matrix.iter().copied().collect();
            let expected: Vec<f64> = values.iter().map(|&v| v as f64).collect();
            assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn test_round_trip_float32_both_orders() {
        let values = [0.0f32, -0.0, 1.5e-8, f32::MAX, -std::f32::consts::E, 3.25];
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let mut payload = Vec::new();
            for v in values {
                put(&mut payload, v.to_be_bytes(), order);
            }
            let matrix =
                decode_pixels(&header(2, 3, ElementType::Float32, order), &payload).unwrap();
            for (got, want) in matrix.iter().zip(values) {
                assert_eq!(*got, want as f64);
            }
        }
    }
}
