//! Array and map headers, and map keys.

use byteorder::{BigEndian, ByteOrder};

use crate::buf;
use crate::error::{Error, Result};
use crate::types::tag;
use crate::width;

/// Tag family of a container header.
struct Container {
    fixed: u8,
    tag16: u8,
    tag32: u8,
    expected: &'static str,
}

const ARRAY: Container = Container {
    fixed: tag::FIXARRAY,
    tag16: tag::ARRAY16,
    tag32: tag::ARRAY32,
    expected: "an array",
};

const MAP: Container = Container {
    fixed: tag::FIXMAP,
    tag16: tag::MAP16,
    tag32: tag::MAP32,
    expected: "a map",
};

fn encode_header(
    container: &Container,
    length: usize,
    header_len: usize,
    buffer: &mut [u8],
    offset: usize,
) -> Result<usize> {
    let out = buf::span_mut(buffer, offset, header_len)?;
    match header_len {
        1 => out[0] = container.fixed | length as u8,
        3 => {
            out[0] = container.tag16;
            BigEndian::write_u16(&mut out[1..], length as u16);
        }
        _ => {
            out[0] = container.tag32;
            BigEndian::write_u32(&mut out[1..], length as u32);
        }
    }
    Ok(header_len)
}

fn decode_header(container: &Container, buffer: &[u8], offset: usize) -> Result<(usize, usize)> {
    let byte = buf::read_u8(buffer, offset)?;
    if byte & 0xf0 == container.fixed {
        return Ok(((byte & 0x0f) as usize, offset + 1));
    }
    if byte == container.tag16 {
        return Ok((buf::read_u16(buffer, offset + 1)? as usize, offset + 3));
    }
    if byte == container.tag32 {
        return Ok((buf::read_u32(buffer, offset + 1)? as usize, offset + 5));
    }
    Err(Error::unexpected_tag(container.expected, byte))
}

/// Encodes an array header and returns the number of bytes written.
///
/// Fails if `length` does not fit in 32 bits or the header does not fit
/// in `buffer` at `offset`.
pub fn encode_array_header(length: usize, buffer: &mut [u8], offset: usize) -> Result<usize> {
    let header_len = width::array_header_len(length)?;
    encode_header(&ARRAY, length, header_len, buffer, offset)
}

/// Decodes an array header, returning the element count and the offset of
/// the first element.
pub fn decode_array_len(buffer: &[u8], offset: usize) -> Result<(usize, usize)> {
    decode_header(&ARRAY, buffer, offset)
}

/// Encodes a map header and returns the number of bytes written.
pub fn encode_map_header(length: usize, buffer: &mut [u8], offset: usize) -> Result<usize> {
    let header_len = width::map_header_len(length)?;
    encode_header(&MAP, length, header_len, buffer, offset)
}

/// Decodes a map header, returning the entry count and the offset of the
/// first key.
pub fn decode_map_len(buffer: &[u8], offset: usize) -> Result<(usize, usize)> {
    decode_header(&MAP, buffer, offset)
}

/// Encodes a struct field tag as a positive fixint.
pub fn encode_map_key(key: u8, buffer: &mut [u8], offset: usize) -> Result<usize> {
    if key > tag::MAX_POSITIVE_FIXINT {
        return Err(Error::OutOfRange {
            what: "map key",
            value: key.into(),
        });
    }
    buf::span_mut(buffer, offset, 1)?[0] = key;
    Ok(1)
}

/// Decodes a struct field tag. Only positive fixints (`0..=127`) are
/// accepted as keys.
pub fn decode_map_key(buffer: &[u8], offset: usize) -> Result<(u8, usize)> {
    let byte = buf::read_u8(buffer, offset)?;
    if byte > tag::MAX_POSITIVE_FIXINT {
        return Err(Error::unexpected_tag("a map key", byte));
    }
    Ok((byte, offset + 1))
}
