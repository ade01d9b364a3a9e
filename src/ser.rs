//! Serde support.
//!
//! Every value type implements [`Serialize`], so a tree can be handed to any
//! serde data format. In the other direction, [`to_value`] runs a
//! [`serde::Serializer`] that builds a value tree from any `Serialize` type.
//!
//! Mapping used by [`to_value`]:
//!
//! | Rust data | Value |
//! |---|---|
//! | `bool` | `Bool` |
//! | integers | `Int` if the number fits `i32`, otherwise [`Error::IntOutOfRange`] |
//! | `char`, `str` | `String` |
//! | bytes | `Seq` of `Int` |
//! | sequences, tuples, tuple structs | `Seq` |
//! | maps, structs | `Struct` (keys must be strings) |
//! | `Some(x)`, newtype structs | the inner value |
//! | unit variants | `String` holding the variant name |
//! | other enum variants | single-entry `Struct` keyed by the variant name |
//! | floats, `()`, unit structs, `None` | [`Error::Unsupported`] |

use serde::{Serialize, ser};

use crate::{
    BoolValue, Error, IntValue, Result, SeqValue, StringValue, StructValue, Text, Value,
    cold_path,
};

impl Serialize for Text {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for BoolValue {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.get())
    }
}

impl Serialize for IntValue {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.get())
    }
}

impl Serialize for StringValue {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for SeqValue {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for StructValue {
    #[inline]
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl Serialize for Value {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Bool(value) => value.serialize(serializer),
            Value::Int(value) => value.serialize(serializer),
            Value::String(value) => value.serialize(serializer),
            Value::Seq(value) => value.serialize(serializer),
            Value::Struct(value) => value.serialize(serializer),
        }
    }
}

/// Converts any `Serialize` type into a value tree.
///
/// # Example
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point {
///     y: i32,
///     x: i32,
/// }
///
/// let value = valtree::to_value(&Point { y: 2, x: 1 })?;
/// assert_eq!(value.to_json_string(), r#"{"x": 1, "y": 2}"#);
/// # Ok::<(), valtree::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - An integer does not fit `i32` ([`Error::IntOutOfRange`])
/// - A map has non-string keys ([`Error::KeyMustBeString`])
/// - The data contains floats, unit or `None` ([`Error::Unsupported`])
#[inline]
pub fn to_value(value: &(impl ?Sized + Serialize)) -> Result<Value> {
    value.serialize(Serializer)
}

/// Converts `value` with [`to_value`] and renders the result.
#[inline]
pub fn to_json_string(value: &(impl ?Sized + Serialize)) -> Result<String> {
    Ok(to_value(value)?.to_json_string())
}

/// A [`serde::Serializer`] whose output is a [`Value`].
///
/// Prefer [`to_value`] over using this type directly.
#[derive(Clone, Copy, Default, Debug)]
pub struct Serializer;

#[inline]
fn int(value: impl TryInto<i32>) -> Result<Value> {
    match value.try_into() {
        Ok(value) => Ok(Value::Int(IntValue::new(value))),
        Err(_) => {
            cold_path();
            Err(Error::IntOutOfRange)
        }
    }
}

/// Wraps `value` as the single entry of a struct keyed by `variant`.
#[inline]
fn tagged(variant: &'static str, value: impl Into<Value>) -> Value {
    let mut record = StructValue::new();
    record.insert(variant, value);
    Value::Struct(record)
}

impl ser::Serializer for Serializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = VariantSeqSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = VariantMapSerializer;

    #[inline]
    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(BoolValue::new(v)))
    }

    #[inline]
    fn serialize_i8(self, v: i8) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_i16(self, v: i16) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_i32(self, v: i32) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_i64(self, v: i64) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_i128(self, v: i128) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_u8(self, v: u8) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_u16(self, v: u16) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_u32(self, v: u32) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_u64(self, v: u64) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_u128(self, v: u128) -> Result<Value> {
        int(v)
    }

    #[inline]
    fn serialize_f32(self, _v: f32) -> Result<Value> {
        cold_path();
        Err(Error::Unsupported("f32"))
    }

    #[inline]
    fn serialize_f64(self, _v: f64) -> Result<Value> {
        cold_path();
        Err(Error::Unsupported("f64"))
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(StringValue::new(v)))
    }

    #[inline]
    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(StringValue::new(v)))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Seq(v.iter().map(|&byte| i32::from(byte)).collect()))
    }

    #[inline]
    fn serialize_none(self) -> Result<Value> {
        cold_path();
        Err(Error::Unsupported("none"))
    }

    #[inline]
    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    #[inline]
    fn serialize_unit(self) -> Result<Value> {
        cold_path();
        Err(Error::Unsupported("unit"))
    }

    #[inline]
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        cold_path();
        Err(Error::Unsupported("unit struct"))
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        self.serialize_str(variant)
    }

    #[inline]
    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, value.serialize(self)?))
    }

    #[inline]
    fn serialize_seq(self, len: Option<usize>) -> Result<SeqSerializer> {
        Ok(SeqSerializer {
            seq: SeqValue::with_capacity(len.unwrap_or(0)),
        })
    }

    #[inline]
    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqSerializer> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqSerializer> {
        Ok(VariantSeqSerializer {
            variant,
            seq: SeqValue::with_capacity(len),
        })
    }

    #[inline]
    fn serialize_map(self, _len: Option<usize>) -> Result<MapSerializer> {
        Ok(MapSerializer {
            record: StructValue::new(),
            key: None,
        })
    }

    #[inline]
    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapSerializer> {
        self.serialize_map(Some(len))
    }

    #[inline]
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<VariantMapSerializer> {
        Ok(VariantMapSerializer {
            variant,
            record: StructValue::new(),
        })
    }
}

pub struct SeqSerializer {
    seq: SeqValue,
}

impl ser::SerializeSeq for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.seq.push_back(value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<Value> {
        Ok(Value::Seq(self.seq))
    }
}

impl ser::SerializeTuple for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    #[inline]
    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    #[inline]
    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct VariantSeqSerializer {
    variant: &'static str,
    seq: SeqValue,
}

impl ser::SerializeTupleVariant for VariantSeqSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.seq.push_back(value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, self.seq))
    }
}

pub struct MapSerializer {
    record: StructValue,
    key: Option<Text>,
}

impl ser::SerializeMap for MapSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let Some(key) = self.key.take() else {
            cold_path();
            return Err(Error::Message(
                "serialize_value called before serialize_key".to_owned(),
            ));
        };
        self.record.insert(key, value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<Value> {
        Ok(Value::Struct(self.record))
    }
}

impl ser::SerializeStruct for MapSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.insert(key, value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<Value> {
        Ok(Value::Struct(self.record))
    }
}

pub struct VariantMapSerializer {
    variant: &'static str,
    record: StructValue,
}

impl ser::SerializeStructVariant for VariantMapSerializer {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.insert(key, value.serialize(Serializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, self.record))
    }
}

/// Accepts only string-like keys.
struct MapKeySerializer;

macro_rules! reject_key {
    ($($method:ident($($arg:ty),*);)*) => {
        $(
            #[inline]
            fn $method(self, $(_: $arg),*) -> Result<Text> {
                cold_path();
                Err(Error::KeyMustBeString)
            }
        )*
    };
}

impl ser::Serializer for MapKeySerializer {
    type Ok = Text;
    type Error = Error;

    type SerializeSeq = ser::Impossible<Text, Error>;
    type SerializeTuple = ser::Impossible<Text, Error>;
    type SerializeTupleStruct = ser::Impossible<Text, Error>;
    type SerializeTupleVariant = ser::Impossible<Text, Error>;
    type SerializeMap = ser::Impossible<Text, Error>;
    type SerializeStruct = ser::Impossible<Text, Error>;
    type SerializeStructVariant = ser::Impossible<Text, Error>;

    #[inline]
    fn serialize_str(self, v: &str) -> Result<Text> {
        Ok(Text::from(v))
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<Text> {
        Ok(Text::from(v))
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Text> {
        Ok(Text::from(variant))
    }

    #[inline]
    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Text>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    reject_key! {
        serialize_bool(bool);
        serialize_i8(i8);
        serialize_i16(i16);
        serialize_i32(i32);
        serialize_i64(i64);
        serialize_u8(u8);
        serialize_u16(u16);
        serialize_u32(u32);
        serialize_u64(u64);
        serialize_f32(f32);
        serialize_f64(f64);
        serialize_bytes(&[u8]);
        serialize_none();
        serialize_unit();
        serialize_unit_struct(&'static str);
    }

    #[inline]
    fn serialize_some<T>(self, _value: &T) -> Result<Text>
    where
        T: ?Sized + Serialize,
    {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Text>
    where
        T: ?Sized + Serialize,
    {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        cold_path();
        Err(Error::KeyMustBeString)
    }

    #[inline]
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        cold_path();
        Err(Error::KeyMustBeString)
    }
}
