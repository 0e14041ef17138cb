//! Minimal width selection.
//!
//! These functions are the single source of the width thresholds: the
//! encoders call them to pick a wire form, and callers use them to size a
//! buffer before encoding.

use crate::error::{Error, Result};

/// Exclusive upper bound of a 32-bit length field.
pub const MAX_LENGTH: u64 = 1 << 32;

fn check_length(length: usize, what: &'static str) -> Result<()> {
    if length as u64 >= MAX_LENGTH {
        return Err(Error::LengthTooLong { what, length });
    }
    Ok(())
}

fn container_header_len(length: usize, what: &'static str) -> Result<usize> {
    check_length(length, what)?;
    Ok(match length {
        0..=15 => 1,
        16..=0xffff => 3,
        _ => 5,
    })
}

/// Header size of an array with `length` elements: 1, 3 or 5 bytes.
pub fn array_header_len(length: usize) -> Result<usize> {
    container_header_len(length, "array")
}

/// Header size of a map with `length` entries: 1, 3 or 5 bytes.
pub fn map_header_len(length: usize) -> Result<usize> {
    container_header_len(length, "map")
}

/// Header size of a string whose UTF-8 encoding is `length` bytes long:
/// 1, 2, 3 or 5 bytes.
pub fn string_header_len(length: usize) -> Result<usize> {
    check_length(length, "string")?;
    Ok(match length {
        0..=31 => 1,
        32..=0xff => 2,
        0x100..=0xffff => 3,
        _ => 5,
    })
}

/// Header size of a byte array of `length` bytes: 2, 3 or 5 bytes.
pub fn bytes_header_len(length: usize) -> Result<usize> {
    check_length(length, "byte array")?;
    Ok(match length {
        0..=0xff => 2,
        0x100..=0xffff => 3,
        _ => 5,
    })
}

/// Encoded size of an unsigned integer up to 32 bits.
pub fn uint_len(value: u32) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0xff => 2,
        0x100..=0xffff => 3,
        _ => 5,
    }
}

/// Encoded size of an unsigned 64-bit integer.
pub fn uint64_len(value: u64) -> usize {
    match u32::try_from(value) {
        Ok(narrow) => uint_len(narrow),
        Err(_) => 9,
    }
}

/// Encoded size of a signed integer up to 32 bits.
pub fn int_len(value: i32) -> usize {
    match value {
        0..=i32::MAX => uint_len(value as u32),
        -32..=-1 => 1,
        -128..=-33 => 2,
        -32768..=-129 => 3,
        _ => 5,
    }
}

/// Encoded size of a signed 64-bit integer.
///
/// Values in `[-2^31, 2^32)` take the 32-bit forms; everything else is
/// written as a 9-byte int64.
pub fn int64_len(value: i64) -> usize {
    if let Ok(narrow) = i32::try_from(value) {
        int_len(narrow)
    } else if let Ok(narrow) = u32::try_from(value) {
        uint_len(narrow)
    } else {
        9
    }
}

/// Total encoded size (header and payload) of a string.
pub fn string_len(value: &str) -> Result<usize> {
    let length = value.len();
    Ok(string_header_len(length)? + length)
}

/// Total encoded size (header and payload) of a byte array.
pub fn bytes_len(value: &[u8]) -> Result<usize> {
    let length = value.len();
    Ok(bytes_header_len(length)? + length)
}
