//! UTF-8 strings.
//!
//! The width class is chosen from the UTF-8 byte length, which `&str`
//! already knows, so the header is written in a single pass in front of
//! the payload.

use byteorder::{BigEndian, ByteOrder};

use crate::buf;
use crate::error::{Error, Result};
use crate::types::tag;
use crate::width;

/// Encodes a string and returns the number of bytes written (header and
/// payload).
pub fn encode_str(value: &str, buffer: &mut [u8], offset: usize) -> Result<usize> {
    let payload = value.as_bytes();
    let length = payload.len();
    let header_len = width::string_header_len(length)?;
    let out = buf::span_mut(buffer, offset, header_len + length)?;
    match header_len {
        1 => out[0] = tag::FIXSTR | length as u8,
        2 => {
            out[0] = tag::STR8;
            out[1] = length as u8;
        }
        3 => {
            out[0] = tag::STR16;
            BigEndian::write_u16(&mut out[1..3], length as u16);
        }
        _ => {
            out[0] = tag::STR32;
            BigEndian::write_u32(&mut out[1..5], length as u32);
        }
    }
    out[header_len..].copy_from_slice(payload);
    Ok(header_len + length)
}

/// Decodes a string, copying it out of `buffer`.
///
/// The payload must be valid UTF-8; invalid sequences are an error, never
/// replaced.
pub fn decode_str(buffer: &[u8], offset: usize) -> Result<(String, usize)> {
    let byte = buf::read_u8(buffer, offset)?;
    let (length, header_len) = match byte {
        0xa0..=0xbf => ((byte & 0x1f) as usize, 1),
        tag::STR8 => (buf::read_u8(buffer, offset + 1)? as usize, 2),
        tag::STR16 => (buf::read_u16(buffer, offset + 1)? as usize, 3),
        tag::STR32 => (buf::read_u32(buffer, offset + 1)? as usize, 5),
        _ => return Err(Error::unexpected_tag("a string", byte)),
    };
    let start = offset + header_len;
    let payload = buf::span(buffer, start, length)?;
    let text = std::str::from_utf8(payload)?;
    Ok((text.to_owned(), start + length))
}
