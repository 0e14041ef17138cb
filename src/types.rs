//! Wire format types and utilities.

use std::fmt;

/// MessagePack tag bytes used by the codec.
pub mod tag {
    pub const MAX_POSITIVE_FIXINT: u8 = 0x7f;
    /// `1000xxxx`: map with up to 15 entries.
    pub const FIXMAP: u8 = 0x80;
    /// `1001xxxx`: array with up to 15 elements.
    pub const FIXARRAY: u8 = 0x90;
    /// `101xxxxx`: string with up to 31 bytes.
    pub const FIXSTR: u8 = 0xa0;
    pub const NIL: u8 = 0xc0;
    pub const FALSE: u8 = 0xc2;
    pub const TRUE: u8 = 0xc3;
    pub const BIN8: u8 = 0xc4;
    pub const BIN16: u8 = 0xc5;
    pub const BIN32: u8 = 0xc6;
    pub const FLOAT32: u8 = 0xca;
    pub const FLOAT64: u8 = 0xcb;
    pub const UINT8: u8 = 0xcc;
    pub const UINT16: u8 = 0xcd;
    pub const UINT32: u8 = 0xce;
    pub const UINT64: u8 = 0xcf;
    pub const INT8: u8 = 0xd0;
    pub const INT16: u8 = 0xd1;
    pub const INT32: u8 = 0xd2;
    pub const INT64: u8 = 0xd3;
    pub const STR8: u8 = 0xd9;
    pub const STR16: u8 = 0xda;
    pub const STR32: u8 = 0xdb;
    pub const ARRAY16: u8 = 0xdc;
    pub const ARRAY32: u8 = 0xdd;
    pub const MAP16: u8 = 0xde;
    pub const MAP32: u8 = 0xdf;
    /// `111xxxxx`: integer in `-32..=-1`.
    pub const NEGATIVE_FIXINT: u8 = 0xe0;
}

/// Kind of value introduced by a tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Nil,
    Bool,
    Int,
    Float32,
    Float64,
    Str,
    Bin,
    Array,
    Map,
}

impl Family {
    /// Classifies a tag byte. Extension, timestamp and reserved tags are
    /// outside the supported subset and return `None`.
    pub fn from_tag(byte: u8) -> Option<Self> {
        match byte {
            0x00..=0x7f | 0xe0..=0xff => Some(Family::Int),
            0x80..=0x8f | tag::MAP16 | tag::MAP32 => Some(Family::Map),
            0x90..=0x9f | tag::ARRAY16 | tag::ARRAY32 => Some(Family::Array),
            0xa0..=0xbf | tag::STR8 | tag::STR16 | tag::STR32 => Some(Family::Str),
            tag::NIL => Some(Family::Nil),
            tag::FALSE | tag::TRUE => Some(Family::Bool),
            tag::BIN8 | tag::BIN16 | tag::BIN32 => Some(Family::Bin),
            tag::FLOAT32 => Some(Family::Float32),
            tag::FLOAT64 => Some(Family::Float64),
            tag::UINT8..=tag::INT64 => Some(Family::Int),
            _ => None,
        }
    }
}

/// Integer width and signedness declared by a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    /// Smallest value of this width.
    pub fn min(self) -> i128 {
        match self {
            IntWidth::U8 | IntWidth::U16 | IntWidth::U32 | IntWidth::U64 => 0,
            IntWidth::I8 => i8::MIN.into(),
            IntWidth::I16 => i16::MIN.into(),
            IntWidth::I32 => i32::MIN.into(),
            IntWidth::I64 => i64::MIN.into(),
        }
    }

    /// Largest value of this width.
    pub fn max(self) -> i128 {
        match self {
            IntWidth::U8 => u8::MAX.into(),
            IntWidth::U16 => u16::MAX.into(),
            IntWidth::U32 => u32::MAX.into(),
            IntWidth::U64 => u64::MAX.into(),
            IntWidth::I8 => i8::MAX.into(),
            IntWidth::I16 => i16::MAX.into(),
            IntWidth::I32 => i32::MAX.into(),
            IntWidth::I64 => i64::MAX.into(),
        }
    }

    /// Returns true if `value` is representable in this width.
    pub fn contains(self, value: i128) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Returns true for the 64-bit widths, which use the 9-byte wire forms.
    pub fn is_64(self) -> bool {
        matches!(self, IntWidth::U64 | IntWidth::I64)
    }

    /// Returns true for the signed widths.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntWidth::I8 | IntWidth::I16 | IntWidth::I32 | IntWidth::I64
        )
    }

    /// Schema name of this width.
    pub fn name(self) -> &'static str {
        match self {
            IntWidth::U8 => "uint8",
            IntWidth::U16 => "uint16",
            IntWidth::U32 => "uint32",
            IntWidth::U64 => "uint64",
            IntWidth::I8 => "int8",
            IntWidth::I16 => "int16",
            IntWidth::I32 => "int32",
            IntWidth::I64 => "int64",
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
