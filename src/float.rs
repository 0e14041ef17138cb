//! IEEE-754 floats.
//!
//! Bit patterns are copied verbatim in both directions, so NaN payloads and
//! signed zeros survive a round trip. There is no widening between the two
//! widths.

use byteorder::{BigEndian, ByteOrder};

use crate::buf;
use crate::error::{Error, Result};
use crate::types::tag;

/// Encodes a 32-bit float as `0xca` followed by four big-endian bytes.
pub fn encode_f32(value: f32, buffer: &mut [u8], offset: usize) -> Result<usize> {
    let out = buf::span_mut(buffer, offset, 5)?;
    out[0] = tag::FLOAT32;
    BigEndian::write_u32(&mut out[1..], value.to_bits());
    Ok(5)
}

/// Encodes a 64-bit float as `0xcb` followed by eight big-endian bytes.
pub fn encode_f64(value: f64, buffer: &mut [u8], offset: usize) -> Result<usize> {
    let out = buf::span_mut(buffer, offset, 9)?;
    out[0] = tag::FLOAT64;
    BigEndian::write_u64(&mut out[1..], value.to_bits());
    Ok(9)
}

/// Decodes a 32-bit float. Only the `0xca` form is accepted.
pub fn decode_f32(buffer: &[u8], offset: usize) -> Result<(f32, usize)> {
    let byte = buf::read_u8(buffer, offset)?;
    if byte != tag::FLOAT32 {
        return Err(Error::unexpected_tag("a 32-bit float", byte));
    }
    let bits = buf::read_u32(buffer, offset + 1)?;
    Ok((f32::from_bits(bits), offset + 5))
}

/// Decodes a 64-bit float. Only the `0xcb` form is accepted.
pub fn decode_f64(buffer: &[u8], offset: usize) -> Result<(f64, usize)> {
    let byte = buf::read_u8(buffer, offset)?;
    if byte != tag::FLOAT64 {
        return Err(Error::unexpected_tag("a 64-bit float", byte));
    }
    let bits = buf::read_u64(buffer, offset + 1)?;
    Ok((f64::from_bits(bits), offset + 9))
}
