//! Integer encoding and decoding.
//!
//! Encoders always pick the narrowest wire form for the value. Decoders
//! are agnostic to the wire width and signedness: any integer form that
//! holds a value representable in the requested type is accepted.

use byteorder::{BigEndian, ByteOrder};

use crate::buf;
use crate::error::{Error, Result};
use crate::types::{tag, IntWidth};
use crate::width;

const NARROW_INT: &str = "an 8-, 16- or 32-bit integer";
const WIDE_INT: &str = "a 64-bit integer";

/// Encodes an unsigned integer of up to 32 bits.
pub fn encode_uint(value: u32, buffer: &mut [u8], offset: usize) -> Result<usize> {
    let len = width::uint_len(value);
    let out = buf::span_mut(buffer, offset, len)?;
    match len {
        1 => out[0] = value as u8,
        2 => {
            out[0] = tag::UINT8;
            out[1] = value as u8;
        }
        3 => {
            out[0] = tag::UINT16;
            BigEndian::write_u16(&mut out[1..], value as u16);
        }
        _ => {
            out[0] = tag::UINT32;
            BigEndian::write_u32(&mut out[1..], value);
        }
    }
    Ok(len)
}

/// Encodes an unsigned 64-bit integer. Values below 2^32 use the 32-bit
/// forms.
pub fn encode_uint64(value: u64, buffer: &mut [u8], offset: usize) -> Result<usize> {
    if width::uint64_len(value) < 9 {
        return encode_uint(value as u32, buffer, offset);
    }
    let out = buf::span_mut(buffer, offset, 9)?;
    out[0] = tag::UINT64;
    BigEndian::write_u64(&mut out[1..], value);
    Ok(9)
}

/// Encodes a signed integer of up to 32 bits. Non-negative values use the
/// unsigned forms.
pub fn encode_int(value: i32, buffer: &mut [u8], offset: usize) -> Result<usize> {
    if value >= 0 {
        return encode_uint(value as u32, buffer, offset);
    }
    let len = width::int_len(value);
    let out = buf::span_mut(buffer, offset, len)?;
    match len {
        // negative fixint is the two's-complement byte itself
        1 => out[0] = value as i8 as u8,
        2 => {
            out[0] = tag::INT8;
            out[1] = value as i8 as u8;
        }
        3 => {
            out[0] = tag::INT16;
            BigEndian::write_i16(&mut out[1..], value as i16);
        }
        _ => {
            out[0] = tag::INT32;
            BigEndian::write_i32(&mut out[1..], value);
        }
    }
    Ok(len)
}

/// Encodes a signed 64-bit integer.
///
/// Values in `[-2^31, 2^32)` use the 32-bit signed or unsigned forms;
/// everything else is written as `0xd3` and eight two's-complement bytes.
pub fn encode_int64(value: i64, buffer: &mut [u8], offset: usize) -> Result<usize> {
    if width::int64_len(value) < 9 {
        return if value < 0 {
            encode_int(value as i32, buffer, offset)
        } else {
            encode_uint(value as u32, buffer, offset)
        };
    }
    let out = buf::span_mut(buffer, offset, 9)?;
    out[0] = tag::INT64;
    BigEndian::write_i64(&mut out[1..], value);
    Ok(9)
}

/// Encodes `value` for a field declared with `width`, failing before any
/// byte is written if the value is not representable in that width.
pub fn encode_integer(
    width: IntWidth,
    value: i128,
    buffer: &mut [u8],
    offset: usize,
) -> Result<usize> {
    if !width.contains(value) {
        return Err(Error::OutOfRange {
            what: width.name(),
            value,
        });
    }
    match width {
        IntWidth::U8 | IntWidth::U16 | IntWidth::U32 => encode_uint(value as u32, buffer, offset),
        IntWidth::U64 => encode_uint64(value as u64, buffer, offset),
        IntWidth::I8 | IntWidth::I16 | IntWidth::I32 => encode_int(value as i32, buffer, offset),
        IntWidth::I64 => encode_int64(value as i64, buffer, offset),
    }
}

/// Every integral float in `[-2^127, 2^127)` converts to `i128` exactly.
const I128_MIN_F64: f64 = i128::MIN as f64;

/// Converts a float to the integer it exactly represents.
///
/// NaN, infinities, values with a fractional part and magnitudes outside
/// `i128` are rejected. The result still has to be range-checked against
/// the target width.
pub fn integral_value(value: f64) -> Result<i128> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value < I128_MIN_F64
        || value >= -I128_MIN_F64
    {
        return Err(Error::NotAnInteger(value));
    }
    Ok(value as i128)
}

/// Decodes any of the 8-, 16- and 32-bit integer forms, signed or
/// unsigned, widened to `i64`.
pub fn decode_int(buffer: &[u8], offset: usize) -> Result<(i64, usize)> {
    let byte = buf::read_u8(buffer, offset)?;
    let (value, len) = match byte {
        0x00..=tag::MAX_POSITIVE_FIXINT => (i64::from(byte), 1),
        tag::NEGATIVE_FIXINT..=0xff => (i64::from(byte as i8), 1),
        tag::UINT8 => (i64::from(buf::read_u8(buffer, offset + 1)?), 2),
        tag::UINT16 => (i64::from(buf::read_u16(buffer, offset + 1)?), 3),
        tag::UINT32 => (i64::from(buf::read_u32(buffer, offset + 1)?), 5),
        tag::INT8 => (i64::from(buf::read_u8(buffer, offset + 1)? as i8), 2),
        tag::INT16 => (i64::from(buf::read_u16(buffer, offset + 1)? as i16), 3),
        tag::INT32 => (i64::from(buf::read_u32(buffer, offset + 1)? as i32), 5),
        _ => return Err(Error::unexpected_tag(NARROW_INT, byte)),
    };
    Ok((value, offset + len))
}

/// Reads the raw payload of a 9-byte form (`0xcf` or `0xd3`). Returns
/// `None` for the narrow forms, which the caller decodes itself.
fn decode_raw64(buffer: &[u8], offset: usize) -> Result<Option<(u64, usize)>> {
    match buf::read_u8(buffer, offset)? {
        tag::UINT64 | tag::INT64 => Ok(Some((buf::read_u64(buffer, offset + 1)?, offset + 9))),
        0x00..=tag::MAX_POSITIVE_FIXINT
        | tag::NEGATIVE_FIXINT..=0xff
        | tag::UINT8..=tag::UINT32
        | tag::INT8..=tag::INT32 => Ok(None),
        byte => Err(Error::unexpected_tag(WIDE_INT, byte)),
    }
}

/// Decodes an unsigned 64-bit integer.
///
/// The narrow forms must hold a non-negative value. The eight payload
/// bytes of `0xcf` and `0xd3` are taken as an unsigned value whichever of
/// the two tags carries them.
pub fn decode_uint64(buffer: &[u8], offset: usize) -> Result<(u64, usize)> {
    if let Some(raw) = decode_raw64(buffer, offset)? {
        return Ok(raw);
    }
    let (value, next) = decode_int(buffer, offset)?;
    let value = u64::try_from(value).map_err(|_| Error::IntegerOverflow {
        value: value.into(),
        target: IntWidth::U64,
    })?;
    Ok((value, next))
}

/// Decodes a signed 64-bit integer.
///
/// The eight payload bytes of `0xcf` and `0xd3` are taken as two's
/// complement whichever of the two tags carries them.
pub fn decode_int64(buffer: &[u8], offset: usize) -> Result<(i64, usize)> {
    if let Some((raw, next)) = decode_raw64(buffer, offset)? {
        return Ok((raw as i64, next));
    }
    decode_int(buffer, offset)
}

/// Decodes an integer for a field declared with `width`.
///
/// Fields of 8, 16 and 32 bits accept only the narrow wire forms and the
/// decoded value must fit in `width`. 64-bit fields also accept `0xcf` and
/// `0xd3`, decoded as [`decode_uint64`] and [`decode_int64`] do.
pub fn decode_integer(width: IntWidth, buffer: &[u8], offset: usize) -> Result<(i128, usize)> {
    let (value, next): (i128, usize) = match width {
        IntWidth::U64 => {
            let (value, next) = decode_uint64(buffer, offset)?;
            (value.into(), next)
        }
        IntWidth::I64 => {
            let (value, next) = decode_int64(buffer, offset)?;
            (value.into(), next)
        }
        _ => {
            let (value, next) = decode_int(buffer, offset)?;
            (value.into(), next)
        }
    };
    if !width.contains(value) {
        return Err(Error::IntegerOverflow {
            value,
            target: width,
        });
    }
    Ok((value, next))
}
