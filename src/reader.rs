//! Typedpack decoder cursor.

use crate::buf;
use crate::bytes::decode_bytes;
use crate::error::{Error, Result};
use crate::float::{decode_f32, decode_f64};
use crate::header::{decode_array_len, decode_map_key, decode_map_len};
use crate::int::{decode_int64, decode_integer, decode_uint64};
use crate::scalar::{decode_bool, is_nil};
use crate::text::decode_str;
use crate::types::{tag, Family, IntWidth};

/// Reader decodes values one after another from a byte slice.
///
/// Strings and byte arrays are copied out, so decoded values never borrow
/// from the input.
pub struct Reader<'a> {
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self::at(data, 0)
    }

    /// Creates a new reader starting at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            buffer: data,
            pos: offset,
        }
    }

    /// Returns the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.pos)
    }

    /// Returns true if there is more data to read.
    pub fn has_more(&self) -> bool {
        self.pos < self.buffer.len()
    }

    /// Returns the next tag byte without consuming it.
    pub fn peek_tag(&self) -> Result<u8> {
        buf::read_u8(self.buffer, self.pos)
    }

    /// Returns the family of the next value without consuming it.
    pub fn peek_family(&self) -> Result<Option<Family>> {
        Ok(Family::from_tag(self.peek_tag()?))
    }

    /// Returns true if the next value is nil.
    pub fn peek_nil(&self) -> Result<bool> {
        is_nil(self.buffer, self.pos)
    }

    fn advance<T>(&mut self, (value, next): (T, usize)) -> Result<T> {
        self.pos = next;
        Ok(value)
    }

    /// Reads nil.
    pub fn read_nil(&mut self) -> Result<()> {
        let byte = self.peek_tag()?;
        if byte != tag::NIL {
            return Err(Error::unexpected_tag("nil", byte));
        }
        self.pos += 1;
        Ok(())
    }

    /// Reads a nullable value: `None` for nil, otherwise `read` decodes the
    /// value.
    pub fn read_nullable<T, F>(&mut self, read: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if self.peek_nil()? {
            self.pos += 1;
            return Ok(None);
        }
        read(self).map(Some)
    }

    /// Reads an array header and returns the element count.
    pub fn read_array_len(&mut self) -> Result<usize> {
        let decoded = decode_array_len(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a map header and returns the entry count.
    pub fn read_map_len(&mut self) -> Result<usize> {
        let decoded = decode_map_len(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a struct field tag.
    pub fn read_map_key(&mut self) -> Result<u8> {
        let decoded = decode_map_key(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a boolean.
    pub fn read_bool(&mut self) -> Result<bool> {
        let decoded = decode_bool(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads an integer for a field declared with `width`.
    pub fn read_integer(&mut self, width: IntWidth) -> Result<i128> {
        let decoded = decode_integer(width, self.buffer, self.pos)?;
        self.advance(decoded)
    }

    fn read_narrow<T: TryFrom<i128>>(&mut self, width: IntWidth) -> Result<T> {
        let (value, next) = decode_integer(width, self.buffer, self.pos)?;
        let value = T::try_from(value).map_err(|_| Error::IntegerOverflow {
            value,
            target: width,
        })?;
        self.advance((value, next))
    }

    /// Reads an 8-bit unsigned integer.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_narrow(IntWidth::U8)
    }

    /// Reads a 16-bit unsigned integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_narrow(IntWidth::U16)
    }

    /// Reads a 32-bit unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_narrow(IntWidth::U32)
    }

    /// Reads a 64-bit unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        let decoded = decode_uint64(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads an 8-bit signed integer.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_narrow(IntWidth::I8)
    }

    /// Reads a 16-bit signed integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_narrow(IntWidth::I16)
    }

    /// Reads a 32-bit signed integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_narrow(IntWidth::I32)
    }

    /// Reads a 64-bit signed integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        let decoded = decode_int64(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a 32-bit float.
    pub fn read_f32(&mut self) -> Result<f32> {
        let decoded = decode_f32(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a 64-bit float.
    pub fn read_f64(&mut self) -> Result<f64> {
        let decoded = decode_f64(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a string.
    pub fn read_string(&mut self) -> Result<String> {
        let decoded = decode_str(self.buffer, self.pos)?;
        self.advance(decoded)
    }

    /// Reads a byte array, optionally asserting its length.
    pub fn read_bytes(&mut self, expected_len: Option<usize>) -> Result<Vec<u8>> {
        let decoded = decode_bytes(self.buffer, self.pos, expected_len)?;
        self.advance(decoded)
    }
}
