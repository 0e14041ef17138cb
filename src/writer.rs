//! Typedpack encoder cursor.

use crate::bytes::encode_bytes;
use crate::error::Result;
use crate::float::{encode_f32, encode_f64};
use crate::header::{encode_array_header, encode_map_header, encode_map_key};
use crate::int::{encode_int, encode_int64, encode_integer, encode_uint, encode_uint64};
use crate::scalar::{encode_bool, encode_nil};
use crate::text::encode_str;
use crate::types::IntWidth;

/// Writer encodes values one after another into a caller-supplied buffer.
///
/// The buffer never grows; a value that does not fit fails with a buffer
/// overflow and leaves the position unchanged.
pub struct Writer<'a> {
    buffer: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    /// Creates a new writer starting at the beginning of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::at(buffer, 0)
    }

    /// Creates a new writer starting at `offset`.
    pub fn at(buffer: &'a mut [u8], offset: usize) -> Self {
        Self {
            buffer,
            pos: offset,
        }
    }

    /// Returns the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes left in the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.pos)
    }

    /// Returns the bytes written so far, from the start of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.pos.min(self.buffer.len())]
    }

    fn advance(&mut self, written: usize) -> Result<()> {
        self.pos += written;
        Ok(())
    }

    /// Writes an array header.
    pub fn write_array_header(&mut self, length: usize) -> Result<()> {
        let written = encode_array_header(length, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a map header.
    pub fn write_map_header(&mut self, length: usize) -> Result<()> {
        let written = encode_map_header(length, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a struct field tag.
    pub fn write_map_key(&mut self, key: u8) -> Result<()> {
        let written = encode_map_key(key, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes nil.
    pub fn write_nil(&mut self) -> Result<()> {
        let written = encode_nil(self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a boolean.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        let written = encode_bool(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes an unsigned integer of up to 32 bits.
    pub fn write_uint(&mut self, value: u32) -> Result<()> {
        let written = encode_uint(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes an unsigned 64-bit integer.
    pub fn write_uint64(&mut self, value: u64) -> Result<()> {
        let written = encode_uint64(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a signed integer of up to 32 bits.
    pub fn write_int(&mut self, value: i32) -> Result<()> {
        let written = encode_int(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a signed 64-bit integer.
    pub fn write_int64(&mut self, value: i64) -> Result<()> {
        let written = encode_int64(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes an integer for a field declared with `width`.
    pub fn write_integer(&mut self, width: IntWidth, value: i128) -> Result<()> {
        let written = encode_integer(width, value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a 32-bit float.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        let written = encode_f32(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a 64-bit float.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        let written = encode_f64(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a string.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        let written = encode_str(value, self.buffer, self.pos)?;
        self.advance(written)
    }

    /// Writes a byte array, optionally asserting its length.
    pub fn write_bytes(&mut self, value: &[u8], expected_len: Option<usize>) -> Result<()> {
        let written = encode_bytes(value, self.buffer, self.pos, expected_len)?;
        self.advance(written)
    }

    /// Writes a nullable value: nil for `None`, otherwise `write` is called
    /// with the value.
    pub fn write_nullable<T, F>(&mut self, value: Option<T>, write: F) -> Result<()>
    where
        F: FnOnce(&mut Self, T) -> Result<()>,
    {
        match value {
            Some(value) => write(self, value),
            None => self.write_nil(),
        }
    }
}
