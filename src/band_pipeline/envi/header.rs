//! ENVI `.hdr` text parsing
//!
//! Headers are `key = value` lines in no guaranteed order, with unrelated
//! keys freely interleaved. Each field of interest is captured at most once:
//! the first matching line wins and later duplicates are ignored, which
//! tolerates headers whose provenance comments repeat keys.

use tracing::debug;

use crate::band_pipeline::common::error::{BandError, Result};
use crate::band_pipeline::envi::types::{BandHeader, ByteOrder, ElementType};

/// Parse the text of an ENVI `.hdr` file into a [`BandHeader`].
///
/// The whole header is always scanned. A missing `samples`, `lines` or
/// `data type` key yields [`BandError::HeaderIncomplete`]; a `data type`
/// key whose code is outside the fixed table (and never followed by a
/// recognized one) yields [`BandError::UnsupportedTypeCode`].
///
/// Byte order handling is deliberately asymmetric: a present key decodes
/// `1` as big-endian and any other digit as little-endian, while an absent
/// key defaults to big-endian.
pub fn parse_header(text: &str) -> Result<BandHeader> {
    let mut width: Option<usize> = None;
    let mut height: Option<usize> = None;
    let mut byte_order: Option<ByteOrder> = None;
    let mut element_type: Option<ElementType> = None;
    let mut map_info: Option<String> = None;
    // First out-of-table code seen, reported only if no valid code follows.
    let mut bad_code: Option<String> = None;

    for line in text.lines() {
        if width.is_none() {
            width = match_uint(line, "samples = ");
        }
        if height.is_none() {
            // Only a value flush against the line terminator counts.
            height = match_uint_exact(line, "lines = ");
        }
        if byte_order.is_none() {
            byte_order = match_digit(line, "byte order = ").map(|d| {
                if d == '1' {
                    ByteOrder::Big
                } else {
                    ByteOrder::Little
                }
            });
        }
        if element_type.is_none() {
            if let Some(code) = match_code(line, "data type = ") {
                match code.parse::<u8>().ok().and_then(ElementType::from_code) {
                    Some(t) => element_type = Some(t),
                    None => {
                        bad_code.get_or_insert(code);
                    }
                }
            }
        }
        if map_info.is_none() {
            map_info = match_braced(line, "map info = {");
        }
    }

    match (width, height, element_type) {
        (Some(width), Some(height), Some(element_type)) => {
            let header = BandHeader {
                width,
                height,
                byte_order: byte_order.unwrap_or(ByteOrder::Big),
                element_type,
                map_info,
            };
            debug!(
                width = header.width,
                height = header.height,
                ?header.byte_order,
                ?header.element_type,
                "parsed band header"
            );
            Ok(header)
        }
        _ => {
            if element_type.is_none() {
                if let Some(code) = bad_code {
                    return Err(BandError::UnsupportedTypeCode(code));
                }
            }
            let mut missing = Vec::new();
            if width.is_none() {
                missing.push("samples");
            }
            if height.is_none() {
                missing.push("lines");
            }
            if element_type.is_none() {
                missing.push("data type");
            }
            Err(BandError::HeaderIncomplete(missing.join(", ")))
        }
    }
}

fn leading_digits(rest: &str) -> &str {
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// `key = <int>`, trailing content on the line permitted.
fn match_uint(line: &str, key: &str) -> Option<usize> {
    let rest = line.strip_prefix(key)?;
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `key = <int>` with nothing between the value and the line terminator.
fn match_uint_exact(line: &str, key: &str) -> Option<usize> {
    let rest = line.strip_prefix(key)?;
    let digits = leading_digits(rest);
    if digits.is_empty() || digits.len() != rest.len() {
        return None;
    }
    digits.parse().ok()
}

/// `key = <digit>`, a single digit; anything after it is ignored.
fn match_digit(line: &str, key: &str) -> Option<char> {
    line.strip_prefix(key)?
        .chars()
        .next()
        .filter(char::is_ascii_digit)
}

/// `key = <1-2 digits>`; a longer run of digits contributes only its first
/// two, matching the original format's reader.
fn match_code(line: &str, key: &str) -> Option<String> {
    let rest = line.strip_prefix(key)?;
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let take = digits.len().min(2);
    Some(digits[..take].to_string())
}

/// `key { <text> }`, captured trimmed up to the first closing brace.
fn match_braced(line: &str, key: &str) -> Option<String> {
    let rest = line.strip_prefix(key)?;
    let end = rest.find('}')?;
    Some(rest[..end].trim().to_string())
}
