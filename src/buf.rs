//! Bounds-checked access to caller buffers.
//!
//! Every read and write must lie entirely within `[0, buf.len())`; anything
//! else is reported as an error instead of being truncated.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};

/// Returns the writable span `[offset, offset + len)`.
#[inline]
pub(crate) fn span_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(&mut buf[offset..end]),
        _ => Err(Error::buffer_overflow(offset, len, buf.len())),
    }
}

/// Returns the readable span `[offset, offset + len)`.
#[inline]
pub(crate) fn span(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(&buf[offset..end]),
        _ => Err(Error::buffer_underflow(offset, len, buf.len())),
    }
}

#[inline]
pub(crate) fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    Ok(span(buf, offset, 1)?[0])
}

#[inline]
pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16> {
    Ok(BigEndian::read_u16(span(buf, offset, 2)?))
}

#[inline]
pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32> {
    Ok(BigEndian::read_u32(span(buf, offset, 4)?))
}

#[inline]
pub(crate) fn read_u64(buf: &[u8], offset: usize) -> Result<u64> {
    Ok(BigEndian::read_u64(span(buf, offset, 8)?))
}
