#![cfg(feature = "serde")]

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use valtree::{Error, SeqValue, StructValue, Value, ser::to_json_string, to_value};

// Simple wrapper for serializing bytes
#[derive(Serialize)]
struct ByteVec(#[serde(with = "serde_bytes_impl")] Vec<u8>);

mod serde_bytes_impl {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(data)
    }
}

#[derive(Serialize)]
struct Player {
    name: String,
    level: u8,
    alive: bool,
    tags: Vec<String>,
    pos: (i32, i32),
    stats: BTreeMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    guild: Option<String>,
}

#[derive(Serialize)]
struct Meters(i32);

#[derive(Serialize)]
struct Rgb(u8, u8, u8);

#[derive(Serialize)]
enum Shape {
    Empty,
    Circle(i32),
    Rect(i32, i32),
    Poly { sides: u8 },
}

#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Head,
    Feet,
}

#[test]
fn test_struct_to_value() {
    let player = Player {
        name: "Steve".to_owned(),
        level: 30,
        alive: true,
        tags: vec!["builder".to_owned(), "miner".to_owned()],
        pos: (-12, 64),
        stats: BTreeMap::from([("kills".to_owned(), 3), ("deaths".to_owned(), 1)]),
        nick: Some("st".to_owned()),
        guild: None,
    };

    let value = to_value(&player).unwrap();
    assert!(value.is_struct());
    assert!(value.get("guild").is_none());
    assert_eq!(value.get("level").and_then(Value::as_int), Some(30));
    assert_eq!(
        value.to_json_string(),
        r#"{"alive": true, "level": 30, "name": "Steve", "nick": "st", "pos": [-12, 64], "stats": {"deaths": 1, "kills": 3}, "tags": ["builder", "miner"]}"#
    );
}

#[test]
fn test_primitives_to_value() {
    assert_eq!(to_value(&true).unwrap(), Value::from(true));
    assert_eq!(to_value(&-5i8).unwrap(), Value::from(-5));
    assert_eq!(to_value(&300u16).unwrap(), Value::from(300));
    assert_eq!(to_value(&i64::from(i32::MIN)).unwrap(), Value::from(i32::MIN));
    assert_eq!(to_value(&7u128).unwrap(), Value::from(7));
    assert_eq!(to_value(&'x').unwrap(), Value::from("x"));
    assert_eq!(to_value("text").unwrap(), Value::from("text"));
    assert_eq!(to_value(&Some(9)).unwrap(), Value::from(9));
    assert_eq!(to_value(&Meters(5)).unwrap(), Value::from(5));
}

#[test]
fn test_sequences_to_value() {
    assert_eq!(to_json_string(&vec![1, 2, 3]).unwrap(), "[1, 2, 3]");
    assert_eq!(to_json_string(&Rgb(255, 128, 0)).unwrap(), "[255, 128, 0]");
    assert_eq!(to_json_string(&(true, "a", 1)).unwrap(), r#"[true, "a", 1]"#);
    assert_eq!(to_json_string(&Vec::<i32>::new()).unwrap(), "[]");
    assert_eq!(to_json_string(&ByteVec(vec![1, 2, 255])).unwrap(), "[1, 2, 255]");
}

#[test]
fn test_enums_to_value() {
    assert_eq!(to_json_string(&Shape::Empty).unwrap(), r#""Empty""#);
    assert_eq!(to_json_string(&Shape::Circle(5)).unwrap(), r#"{"Circle": 5}"#);
    assert_eq!(to_json_string(&Shape::Rect(2, 3)).unwrap(), r#"{"Rect": [2, 3]}"#);
    assert_eq!(
        to_json_string(&Shape::Poly { sides: 6 }).unwrap(),
        r#"{"Poly": {"sides": 6}}"#
    );
}

#[test]
fn test_map_keys() {
    let by_char = BTreeMap::from([('b', 2), ('a', 1)]);
    assert_eq!(to_json_string(&by_char).unwrap(), r#"{"a": 1, "b": 2}"#);

    let by_variant = BTreeMap::from([(Slot::Feet, "boots"), (Slot::Head, "helmet")]);
    assert_eq!(
        to_json_string(&by_variant).unwrap(),
        r#"{"Feet": "boots", "Head": "helmet"}"#
    );

    // HashMap iteration order does not leak into the output.
    let hashed: HashMap<String, i32> = (0..20).map(|i| (format!("k{i:02}"), i)).collect();
    let value = to_value(&hashed).unwrap();
    let keys: Vec<&str> = value
        .as_struct()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_error_int_out_of_range() {
    assert!(matches!(to_value(&3_000_000_000u32), Err(Error::IntOutOfRange)));
    assert!(matches!(to_value(&i64::MIN), Err(Error::IntOutOfRange)));
    assert!(matches!(to_value(&vec![1u64, u64::MAX]), Err(Error::IntOutOfRange)));
}

#[test]
fn test_error_unsupported() {
    assert!(matches!(to_value(&1.5f64), Err(Error::Unsupported("f64"))));
    assert!(matches!(to_value(&1.5f32), Err(Error::Unsupported("f32"))));
    assert!(matches!(to_value(&None::<i32>), Err(Error::Unsupported("none"))));
    assert!(matches!(to_value(&()), Err(Error::Unsupported("unit"))));

    let err = to_value(&()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported data kind: unit");
}

#[test]
fn test_error_key_must_be_string() {
    let by_int = BTreeMap::from([(1, "one")]);
    let err = to_value(&by_int).unwrap_err();
    assert!(matches!(err, Error::KeyMustBeString));
    assert_eq!(err.to_string(), "map key must be a string");

    let by_tuple = BTreeMap::from([((1, 2), 3)]);
    assert!(matches!(to_value(&by_tuple), Err(Error::KeyMustBeString)));

    // Empty maps never serialize a key.
    let empty: BTreeMap<i32, i32> = BTreeMap::new();
    assert_eq!(to_json_string(&empty).unwrap(), "{}");
}

#[test]
fn test_value_serializes_to_itself() {
    let mut seq = SeqValue::new();
    seq.push_back(false);
    seq.push_back("Hello");
    seq.push_back(SeqValue::new());

    let mut record = StructValue::new();
    record.insert("seq", seq);
    record.insert("val", 42);
    record.insert("empty", StructValue::new());
    let value = Value::from(record);

    assert_eq!(to_value(&value).unwrap(), value);
    assert_eq!(to_json_string(&value).unwrap(), value.to_json_string());
}
