//! Booleans and nil.

use crate::buf;
use crate::error::{Error, Result};
use crate::types::tag;

/// Encodes a boolean as `0xc3` (true) or `0xc2` (false).
pub fn encode_bool(value: bool, buffer: &mut [u8], offset: usize) -> Result<usize> {
    buf::span_mut(buffer, offset, 1)?[0] = if value { tag::TRUE } else { tag::FALSE };
    Ok(1)
}

/// Decodes a boolean.
pub fn decode_bool(buffer: &[u8], offset: usize) -> Result<(bool, usize)> {
    match buf::read_u8(buffer, offset)? {
        tag::FALSE => Ok((false, offset + 1)),
        tag::TRUE => Ok((true, offset + 1)),
        byte => Err(Error::unexpected_tag("a boolean", byte)),
    }
}

/// Encodes nil.
pub fn encode_nil(buffer: &mut [u8], offset: usize) -> Result<usize> {
    buf::span_mut(buffer, offset, 1)?[0] = tag::NIL;
    Ok(1)
}

/// Returns true if the value at `offset` is nil, without consuming it.
pub fn is_nil(buffer: &[u8], offset: usize) -> Result<bool> {
    Ok(buf::read_u8(buffer, offset)? == tag::NIL)
}
