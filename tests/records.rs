//! Record-level round trips built on the primitive codec.
//!
//! Records are maps keyed by small integer field tags. Optional fields are
//! left out when absent, nullable fields are always present and carry nil
//! when null, and tagged unions are two-element arrays of
//! `[variant tag, payload]`.

use thiserror::Error;
use typedpack::{marshal, unmarshal, ErrorKind, Reader, Writer};

#[derive(Error, Debug)]
enum RecordError {
    #[error(transparent)]
    Codec(#[from] typedpack::Error),

    #[error("missing required field {0}")]
    MissingField(&'static str),

    #[error("unknown field tag {0}")]
    UnknownField(u8),

    #[error("unknown variant {0}")]
    UnknownVariant(u32),

    #[error("union must have 2 elements, got {0}")]
    UnionArity(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u32)]
enum Color {
    Red = 0,
    Green = 1,
    Blue = 0x7f,
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Circle { radius: f64 },
    Rect { w: u32, h: u32 },
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: i64,
    name: String,
    quota: Option<u32>,
    parent: Option<i64>,
    key: [u8; 4],
    color: Color,
    shape: Shape,
}

fn encode<F>(encoder: F) -> Vec<u8>
where
    F: FnOnce(&mut Writer) -> typedpack::Result<()>,
{
    let mut buffer = vec![0u8; 256];
    let written = marshal(&mut buffer, encoder).unwrap();
    buffer.truncate(written);
    buffer
}

fn decode<T, F>(data: &[u8], decoder: F) -> Result<(T, usize), RecordError>
where
    F: FnOnce(&mut Reader) -> Result<T, RecordError>,
{
    let mut reader = Reader::new(data);
    let value = decoder(&mut reader)?;
    Ok((value, reader.position()))
}

fn encode_color(w: &mut Writer, color: Color) -> typedpack::Result<()> {
    w.write_uint(color as u32)
}

fn decode_color(r: &mut Reader) -> Result<Color, RecordError> {
    match r.read_u32()? {
        0 => Ok(Color::Red),
        1 => Ok(Color::Green),
        0x7f => Ok(Color::Blue),
        other => Err(RecordError::UnknownVariant(other)),
    }
}

fn encode_shape(w: &mut Writer, shape: &Shape) -> typedpack::Result<()> {
    w.write_array_header(2)?;
    match shape {
        Shape::Circle { radius } => {
            w.write_uint(0)?;
            w.write_f64(*radius)
        }
        Shape::Rect { w: width, h } => {
            w.write_uint(1)?;
            w.write_array_header(2)?;
            w.write_uint(*width)?;
            w.write_uint(*h)
        }
        Shape::Empty => {
            w.write_uint(2)?;
            w.write_nil()
        }
    }
}

fn decode_shape(r: &mut Reader) -> Result<Shape, RecordError> {
    let len = r.read_array_len()?;
    if len != 2 {
        return Err(RecordError::UnionArity(len));
    }
    match r.read_u32()? {
        0 => Ok(Shape::Circle {
            radius: r.read_f64()?,
        }),
        1 => {
            let len = r.read_array_len()?;
            if len != 2 {
                return Err(RecordError::UnionArity(len));
            }
            Ok(Shape::Rect {
                w: r.read_u32()?,
                h: r.read_u32()?,
            })
        }
        2 => {
            r.read_nil()?;
            Ok(Shape::Empty)
        }
        other => Err(RecordError::UnknownVariant(other)),
    }
}

fn encode_account(w: &mut Writer, account: &Account) -> typedpack::Result<()> {
    let fields = if account.quota.is_some() { 7 } else { 6 };
    w.write_map_header(fields)?;

    w.write_map_key(0)?;
    w.write_int64(account.id)?;

    w.write_map_key(1)?;
    w.write_str(&account.name)?;

    if let Some(quota) = account.quota {
        w.write_map_key(2)?;
        w.write_uint(quota)?;
    }

    w.write_map_key(3)?;
    w.write_nullable(account.parent, |w, v| w.write_int64(v))?;

    w.write_map_key(4)?;
    w.write_bytes(&account.key, Some(4))?;

    w.write_map_key(5)?;
    encode_color(w, account.color)?;

    w.write_map_key(6)?;
    encode_shape(w, &account.shape)
}

fn decode_account(r: &mut Reader) -> Result<Account, RecordError> {
    let mut id = None;
    let mut name = None;
    let mut quota = None;
    let mut parent = None;
    let mut key = None;
    let mut color = None;
    let mut shape = None;

    for _ in 0..r.read_map_len()? {
        match r.read_map_key()? {
            0 => id = Some(r.read_i64()?),
            1 => name = Some(r.read_string()?),
            2 => quota = Some(r.read_u32()?),
            3 => parent = Some(r.read_nullable(|r| r.read_i64())?),
            4 => key = Some(r.read_bytes(Some(4))?),
            5 => color = Some(decode_color(r)?),
            6 => shape = Some(decode_shape(r)?),
            other => return Err(RecordError::UnknownField(other)),
        }
    }

    let mut fixed = [0u8; 4];
    fixed.copy_from_slice(&key.ok_or(RecordError::MissingField("key"))?);
    Ok(Account {
        id: id.ok_or(RecordError::MissingField("id"))?,
        name: name.ok_or(RecordError::MissingField("name"))?,
        quota,
        parent: parent.ok_or(RecordError::MissingField("parent"))?,
        key: fixed,
        color: color.ok_or(RecordError::MissingField("color"))?,
        shape: shape.ok_or(RecordError::MissingField("shape"))?,
    })
}

fn sample_account() -> Account {
    Account {
        id: -1,
        name: "ab".to_string(),
        quota: None,
        parent: Some(5),
        key: [1, 2, 3, 4],
        color: Color::Blue,
        shape: Shape::Empty,
    }
}

#[test]
fn test_account_wire_bytes() {
    let data = encode(|w| encode_account(w, &sample_account()));
    assert_eq!(
        hex::encode(&data),
        "8600ff01a26162030504c40401020304057f069202c0"
    );

    let (decoded, next) = decode(&data, decode_account).unwrap();
    assert_eq!(decoded, sample_account());
    assert_eq!(next, data.len());
}

#[test]
fn test_account_roundtrip() {
    let accounts = vec![
        sample_account(),
        Account {
            id: i64::MAX,
            name: "世界".to_string(),
            quota: Some(u32::MAX),
            parent: None,
            key: [0xff; 4],
            color: Color::Red,
            shape: Shape::Rect { w: 3, h: 300 },
        },
        Account {
            id: i64::MIN,
            name: String::new(),
            quota: Some(0),
            parent: Some(i64::MIN),
            key: [0; 4],
            color: Color::Green,
            shape: Shape::Circle { radius: -0.5 },
        },
    ];

    for account in accounts {
        let data = encode(|w| encode_account(w, &account));
        let (decoded, next) = decode(&data, decode_account).unwrap();
        assert_eq!(decoded, account);
        assert_eq!(next, data.len());
    }
}

fn encode_point(w: &mut Writer, x: i64) -> typedpack::Result<()> {
    w.write_map_header(1)?;
    w.write_map_key(0)?;
    w.write_int64(x)
}

fn decode_point(r: &mut Reader) -> Result<i64, RecordError> {
    let mut x = None;
    for _ in 0..r.read_map_len()? {
        match r.read_map_key()? {
            0 => x = Some(r.read_i64()?),
            other => return Err(RecordError::UnknownField(other)),
        }
    }
    x.ok_or(RecordError::MissingField("x"))
}

fn decode_optional_point(r: &mut Reader) -> Result<Option<i64>, RecordError> {
    let mut x = None;
    for _ in 0..r.read_map_len()? {
        match r.read_map_key()? {
            0 => x = Some(r.read_i64()?),
            other => return Err(RecordError::UnknownField(other)),
        }
    }
    Ok(x)
}

fn decode_nullable_point(r: &mut Reader) -> Result<Option<i64>, RecordError> {
    let mut x = None;
    for _ in 0..r.read_map_len()? {
        match r.read_map_key()? {
            0 => x = Some(r.read_nullable(|r| r.read_i64())?),
            other => return Err(RecordError::UnknownField(other)),
        }
    }
    x.ok_or(RecordError::MissingField("x"))
}

#[test]
fn test_single_field_records() {
    assert_eq!(hex::encode(encode(|w| encode_point(w, 0))), "810000");
    assert_eq!(decode(&[0x81, 0x00, 0x00], decode_point).unwrap(), (0, 3));

    // optional and absent
    assert_eq!(hex::encode(encode(|w| w.write_map_header(0))), "80");
    assert_eq!(decode(&[0x80], decode_optional_point).unwrap(), (None, 1));

    // nullable and null
    let data = encode(|w| {
        w.write_map_header(1)?;
        w.write_map_key(0)?;
        w.write_nullable(None::<i64>, |w, v| w.write_int64(v))
    });
    assert_eq!(hex::encode(&data), "8100c0");
    assert_eq!(decode(&data, decode_nullable_point).unwrap(), (None, 3));
}

#[test]
fn test_missing_required_field() {
    let err = decode(&[0x80], decode_point).unwrap_err();
    assert!(matches!(err, RecordError::MissingField("x")));

    let err = decode(&[0x80], decode_nullable_point).unwrap_err();
    assert!(matches!(err, RecordError::MissingField("x")));
}

#[test]
fn test_null_in_non_nullable_field() {
    let err = decode(&[0x81, 0x00, 0xc0], decode_point).unwrap_err();
    match err {
        RecordError::Codec(err) => assert_eq!(err.kind(), ErrorKind::Format),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_unknown_field_tag() {
    let err = decode(&[0x81, 0x09, 0x00], decode_point).unwrap_err();
    assert!(matches!(err, RecordError::UnknownField(9)));

    // field tags above 127 are not valid map keys
    let err = decode(&[0x81, 0xcc, 0x80, 0x00], decode_point).unwrap_err();
    assert!(matches!(err, RecordError::Codec(_)));

    let mut buffer = [0u8; 4];
    let err = Writer::new(&mut buffer).write_map_key(128).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn test_enum_values() {
    assert_eq!(encode(|w| encode_color(w, Color::Blue)), [0x7f]);
    assert_eq!(encode(|w| encode_color(w, Color::Red)), [0x00]);
    assert_eq!(decode(&[0x01], decode_color).unwrap(), (Color::Green, 1));

    let err = decode(&[0x02], decode_color).unwrap_err();
    assert!(matches!(err, RecordError::UnknownVariant(2)));

    let err = decode(&[0xff], decode_color).unwrap_err();
    assert!(matches!(err, RecordError::Codec(_)));
}

#[test]
fn test_union_wire_bytes() {
    let test_cases = vec![
        (Shape::Empty, "9202c0"),
        (Shape::Rect { w: 3, h: 300 }, "92019203cd012c"),
        (Shape::Circle { radius: 1.5 }, "9200cb3ff8000000000000"),
    ];

    for (shape, expected) in test_cases {
        let data = encode(|w| encode_shape(w, &shape));
        assert_eq!(hex::encode(&data), expected, "{:?} failed", shape);
        let (decoded, next) = decode(&data, decode_shape).unwrap();
        assert_eq!(decoded, shape);
        assert_eq!(next, data.len());
    }
}

#[test]
fn test_union_rejects() {
    let err = decode(&hex::decode("9103").unwrap(), decode_shape).unwrap_err();
    assert!(matches!(err, RecordError::UnionArity(1)));

    let err = decode(&hex::decode("9205c0").unwrap(), decode_shape).unwrap_err();
    assert!(matches!(err, RecordError::UnknownVariant(5)));

    // payload of the wrong kind for the variant
    let err = decode(&hex::decode("9200c0").unwrap(), decode_shape).unwrap_err();
    assert!(matches!(err, RecordError::Codec(_)));
}

#[test]
fn test_truncated_record() {
    let data = encode(|w| encode_account(w, &sample_account()));
    for end in 0..data.len() {
        let err = decode(&data[..end], decode_account).unwrap_err();
        assert!(
            matches!(&err, RecordError::Codec(e) if e.kind() == ErrorKind::BufferBounds),
            "prefix of {} bytes: {}",
            end,
            err
        );
    }
}

#[test]
fn test_marshal_into_small_buffer() {
    let mut buffer = [0u8; 8];
    let err = marshal(&mut buffer, |w| encode_account(w, &sample_account())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferBounds);
}

#[test]
fn test_unmarshal_list() {
    let names = ["alpha", "", "γ"];
    let data = encode(|w| {
        w.write_array_header(names.len())?;
        for name in names {
            w.write_str(name)?;
        }
        Ok(())
    });

    let (decoded, next) = unmarshal(&data, |r| {
        let len = r.read_array_len()?;
        (0..len).map(|_| r.read_string()).collect::<typedpack::Result<Vec<_>>>()
    })
    .unwrap();
    assert_eq!(decoded, names);
    assert_eq!(next, data.len());
}

#[test]
fn test_concurrent_decode() {
    let account = sample_account();
    let data = encode(|w| encode_account(w, &account));

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let (decoded, _) = decode(&data, decode_account).unwrap();
                    assert_eq!(decoded, account);
                }
            });
        }
    });
}
