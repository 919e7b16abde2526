//! ENVI band header types and the data type code table

use ndarray::Array2;

/// Byte ordering of multi-byte pixel elements in the `.img` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Numeric encoding of a single pixel element.
///
/// Complex variants store the real component first, then the imaginary
/// component, each with the band's byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Int8,
    Int16,
    Int32,
    Float32,
    Float64,
    Complex64,
    Complex128,
    UInt16,
    UInt32,
    UInt64,
}

/// ENVI `data type` codes and the element encodings they map to.
///
/// Codes 14 and 15 both decode as unsigned 64-bit. Any code outside this
/// table is rejected; there is no fallback encoding.
pub const DATA_TYPE_CODES: &[(u8, ElementType)] = &[
    (1, ElementType::Int8),
    (2, ElementType::Int16),
    (3, ElementType::Int32),
    (4, ElementType::Float32),
    (5, ElementType::Float64),
    (6, ElementType::Complex64),
    (9, ElementType::Complex128),
    (12, ElementType::UInt16),
    (13, ElementType::UInt32),
    (14, ElementType::UInt64),
    (15, ElementType::UInt64),
];

impl ElementType {
    /// Look up an ENVI data type code in the fixed table.
    pub fn from_code(code: u8) -> Option<Self> {
        DATA_TYPE_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, t)| *t)
    }

    /// Size of one stored element in bytes.
    pub const fn byte_width(self) -> usize {
        match self {
            ElementType::Int8 => 1,
            ElementType::Int16 | ElementType::UInt16 => 2,
            ElementType::Int32 | ElementType::Float32 | ElementType::UInt32 => 4,
            ElementType::Float64 | ElementType::Complex64 | ElementType::UInt64 => 8,
            ElementType::Complex128 => 16,
        }
    }

    pub const fn is_complex(self) -> bool {
        matches!(self, ElementType::Complex64 | ElementType::Complex128)
    }
}

/// Parsed `.hdr` contract for one band.
///
/// Constructed once by [`super::header::parse_header`] and immutable
/// afterwards; it fully governs the decode of exactly one `.img` payload.
#[derive(Debug, Clone)]
pub struct BandHeader {
    /// Pixel grid width (`samples`).
    pub width: usize,
    /// Pixel grid height (`lines`).
    pub height: usize,
    /// Element byte order; big-endian when the header omits the key.
    pub byte_order: ByteOrder,
    /// Element encoding from the `data type` code table.
    pub element_type: ElementType,
    /// Verbatim `map info = { ... }` contents, uninterpreted.
    pub map_info: Option<String>,
}

/// One decoded band: its header contract plus the pixel matrix.
///
/// Pixels are row-major `(height, width)`, widened to `f64`. For complex
/// element types only the real component survives decoding; the imaginary
/// half is discarded (see [`super::decoder`]).
#[derive(Debug, Clone)]
pub struct DecodedBand {
    pub header: BandHeader,
    pub pixels: Array2<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table_widths() {
        let widths: Vec<(u8, usize)> = DATA_TYPE_CODES
            .iter()
            .map(|(c, t)| (*c, t.byte_width()))
            .collect();
        assert_eq!(
            widths,
            vec![
                (1, 1),
                (2, 2),
                (3, 4),
                (4, 4),
                (5, 8),
                (6, 8),
                (9, 16),
                (12, 2),
                (13, 4),
                (14, 8),
                (15, 8),
            ]
        );
    }

    #[test]
    fn test_codes_14_and_15_are_both_u64() {
        assert_eq!(ElementType::from_code(14), Some(ElementType::UInt64));
        assert_eq!(ElementType::from_code(15), Some(ElementType::UInt64));
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in [0, 7, 8, 10, 11, 16, 99] {
            assert_eq!(ElementType::from_code(code), None);
        }
    }

    #[test]
    fn test_complex_flag() {
        assert!(ElementType::Complex64.is_complex());
        assert!(ElementType::Complex128.is_complex());
        assert!(!ElementType::Float64.is_complex());
    }
}
