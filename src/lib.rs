//! Typedpack - MessagePack primitive codec over caller-supplied buffers
//!
//! Every operation is a stateless function taking a buffer and an offset.
//! Encoders return the number of bytes written; decoders return the value
//! together with the offset just past it. Integers, strings, byte arrays
//! and container headers always use the narrowest MessagePack form.
//!
//! # Example
//!
//! ```rust
//! use typedpack::{Reader, Result, Writer};
//!
//! fn main() -> Result<()> {
//!     let mut buffer = [0u8; 32];
//!
//!     // Encoding: a record with two fields keyed by small integer tags
//!     let mut writer = Writer::new(&mut buffer);
//!     writer.write_map_header(2)?;
//!     writer.write_map_key(0)?;
//!     writer.write_int64(-42)?;
//!     writer.write_map_key(1)?;
//!     writer.write_str("hello")?;
//!     let written = writer.position();
//!
//!     // Decoding
//!     let mut reader = Reader::new(&buffer[..written]);
//!     for _ in 0..reader.read_map_len()? {
//!         match reader.read_map_key()? {
//!             0 => assert_eq!(reader.read_i64()?, -42),
//!             1 => assert_eq!(reader.read_string()?, "hello"),
//!             _ => unreachable!(),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The same bytes can be produced with the free functions directly:
//!
//! ```rust
//! let mut buffer = [0u8; 8];
//! let mut offset = 0;
//! offset += typedpack::encode_array_header(2, &mut buffer, offset).unwrap();
//! offset += typedpack::encode_uint(128, &mut buffer, offset).unwrap();
//! offset += typedpack::encode_bool(true, &mut buffer, offset).unwrap();
//! assert_eq!(&buffer[..offset], &[0x92, 0xcc, 0x80, 0xc3]);
//!
//! let (len, next) = typedpack::decode_array_len(&buffer, 0).unwrap();
//! assert_eq!((len, next), (2, 1));
//! ```

mod buf;
mod bytes;
mod error;
mod float;
mod header;
mod int;
mod reader;
mod scalar;
mod text;
pub mod types;
pub mod width;
mod writer;

pub use bytes::{decode_bytes, encode_bytes};
pub use error::{Error, ErrorKind, Result};
pub use float::{decode_f32, decode_f64, encode_f32, encode_f64};
pub use header::{
    decode_array_len, decode_map_key, decode_map_len, encode_array_header, encode_map_header,
    encode_map_key,
};
pub use int::{
    decode_int, decode_int64, decode_integer, decode_uint64, encode_int, encode_int64,
    encode_integer, encode_uint, encode_uint64, integral_value,
};
pub use reader::Reader;
pub use scalar::{decode_bool, encode_bool, encode_nil, is_nil};
pub use text::{decode_str, encode_str};
pub use types::{tag, Family, IntWidth};
pub use width::{array_header_len, bytes_header_len, map_header_len, string_header_len};
pub use writer::Writer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marshal runs `encoder` over `buffer` and returns the number of bytes
/// written.
pub fn marshal<F>(buffer: &mut [u8], encoder: F) -> Result<usize>
where
    F: FnOnce(&mut Writer) -> Result<()>,
{
    let mut writer = Writer::new(buffer);
    encoder(&mut writer)?;
    Ok(writer.position())
}

/// Unmarshal runs `decoder` over `data` and returns the decoded value with
/// the offset just past it.
pub fn unmarshal<T, F>(data: &[u8], decoder: F) -> Result<(T, usize)>
where
    F: FnOnce(&mut Reader) -> Result<T>,
{
    let mut reader = Reader::new(data);
    let value = decoder(&mut reader)?;
    Ok((value, reader.position()))
}
