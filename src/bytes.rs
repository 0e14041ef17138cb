//! Raw byte arrays (the `bin` family).

use byteorder::{BigEndian, ByteOrder};

use crate::buf;
use crate::error::{Error, Result};
use crate::types::tag;
use crate::width;

fn check_expected(expected: Option<usize>, actual: usize) -> Result<()> {
    match expected {
        Some(expected) if expected != actual => Err(Error::LengthMismatch { expected, actual }),
        _ => Ok(()),
    }
}

/// Encodes a byte array and returns the number of bytes written.
///
/// When `expected_len` is set, `value` must have exactly that many bytes;
/// otherwise the call fails before anything is written.
pub fn encode_bytes(
    value: &[u8],
    buffer: &mut [u8],
    offset: usize,
    expected_len: Option<usize>,
) -> Result<usize> {
    let length = value.len();
    check_expected(expected_len, length)?;
    let header_len = width::bytes_header_len(length)?;
    let out = buf::span_mut(buffer, offset, header_len + length)?;
    match header_len {
        2 => {
            out[0] = tag::BIN8;
            out[1] = length as u8;
        }
        3 => {
            out[0] = tag::BIN16;
            BigEndian::write_u16(&mut out[1..3], length as u16);
        }
        _ => {
            out[0] = tag::BIN32;
            BigEndian::write_u32(&mut out[1..5], length as u32);
        }
    }
    out[header_len..].copy_from_slice(value);
    Ok(header_len + length)
}

/// Decodes a byte array, returning a copy of the payload.
///
/// When `expected_len` is set, the length in the header must match it; the
/// check happens before the payload is touched.
pub fn decode_bytes(
    buffer: &[u8],
    offset: usize,
    expected_len: Option<usize>,
) -> Result<(Vec<u8>, usize)> {
    let (length, header_len) = match buf::read_u8(buffer, offset)? {
        tag::BIN8 => (buf::read_u8(buffer, offset + 1)? as usize, 2),
        tag::BIN16 => (buf::read_u16(buffer, offset + 1)? as usize, 3),
        tag::BIN32 => (buf::read_u32(buffer, offset + 1)? as usize, 5),
        byte => return Err(Error::unexpected_tag("a byte array", byte)),
    };
    check_expected(expected_len, length)?;
    let start = offset + header_len;
    let payload = buf::span(buffer, start, length)?;
    Ok((payload.to_vec(), start + length))
}
