//! The closed value model.
//!
//! A [`Value`] is one of five variants. Leaves ([`BoolValue`], [`IntValue`],
//! [`StringValue`]) are immutable once constructed. Containers ([`SeqValue`],
//! [`StructValue`]) own their children exclusively: `push_back` and `insert`
//! take the child by value, so a subtree has exactly one owner and cycles cannot
//! be expressed.
//!
//! # Example
//!
//! ```
//! use valtree::{SeqValue, StructValue, Value};
//!
//! let mut seq = SeqValue::new();
//! seq.push_back(false);
//! seq.push_back("Hello");
//!
//! let mut root = StructValue::new();
//! root.insert("val", 42);
//! root.insert("seq", seq);
//!
//! let root = Value::from(root);
//! assert_eq!(root.to_json_string(), r#"{"seq": [false, "Hello"], "val": 42}"#);
//! ```

use std::mem;

use crate::{Key, Tag, Text, ValueVisitor};

mod leaf;
mod seq;
mod structure;

pub use leaf::*;
pub use seq::*;
pub use structure::*;

/// A node of a value tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Value {
    Bool(BoolValue),
    Int(IntValue),
    String(StringValue),
    Seq(SeqValue),
    Struct(StructValue),
}

impl Value {
    /// Dispatches to the visitor method matching this value's variant.
    ///
    /// Exactly one visitor method runs. Children are only visited if the
    /// visitor itself recurses into them.
    #[inline]
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Value::Bool(value) => visitor.visit_bool(value),
            Value::Int(value) => visitor.visit_int(value),
            Value::String(value) => visitor.visit_string(value),
            Value::Seq(value) => visitor.visit_seq(value),
            Value::Struct(value) => visitor.visit_struct(value),
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Value::Bool(_) => Tag::Bool,
            Value::Int(_) => Tag::Int,
            Value::String(_) => Tag::String,
            Value::Seq(_) => Tag::Seq,
            Value::Struct(_) => Tag::Struct,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(value.get()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(value) => Some(value.get()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    pub fn as_string(&self) -> Option<&Text> {
        match self {
            Value::String(value) => Some(value.get()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn as_seq(&self) -> Option<&SeqValue> {
        match self {
            Value::Seq(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq_mut(&mut self) -> Option<&mut SeqValue> {
        match self {
            Value::Seq(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    #[inline]
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_struct_mut(&mut self) -> Option<&mut StructValue> {
        match self {
            Value::Struct(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_struct(&self) -> bool {
        matches!(self, Value::Struct(_))
    }

    /// Looks up a child by position (sequences) or by name (structs).
    ///
    /// Returns `None` for leaves, for a missing position or name, and when the
    /// key kind does not match the container kind.
    ///
    /// ```
    /// use valtree::{SeqValue, Value};
    ///
    /// let seq: SeqValue = [1, 2, 3].into_iter().collect();
    /// let value = Value::from(seq);
    /// assert_eq!(value.get(1_usize).and_then(Value::as_int), Some(2));
    /// assert!(value.get("key").is_none());
    /// ```
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Value> {
        match (self, key.into()) {
            (Value::Seq(value), Key::Position(position)) => value.get(position),
            (Value::Struct(value), Key::Name(name)) => value.get(name),
            _ => None,
        }
    }

    pub fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Option<&mut Value> {
        match (self, key.into()) {
            (Value::Seq(value), Key::Position(position)) => value.get_mut(position),
            (Value::Struct(value), Key::Name(name)) => value.get_mut(name),
            _ => None,
        }
    }

    #[inline]
    fn has_children(&self) -> bool {
        match self {
            Value::Seq(value) => !value.is_empty(),
            Value::Struct(value) => !value.is_empty(),
            _ => false,
        }
    }

    /// Moves this value's children onto `stack`, leaving it childless.
    fn detach_children(&mut self, stack: &mut Vec<Value>) {
        match self {
            Value::Seq(value) => stack.append(&mut value.values),
            Value::Struct(value) => stack.extend(mem::take(&mut value.values).into_values()),
            _ => (),
        }
    }
}

/// Drops a forest without recursing once per nesting level.
///
/// Container `Drop` impls funnel their children through here so that dropping
/// a very deep tree does not exhaust the call stack.
pub(crate) fn drop_forest(mut stack: Vec<Value>) {
    while let Some(mut value) = stack.pop() {
        value.detach_children(&mut stack);
    }
}

impl Default for Value {
    /// An empty struct, the usual document root.
    #[inline]
    fn default() -> Self {
        Value::Struct(StructValue::new())
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(BoolValue::new(value))
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Int(IntValue::new(value))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(StringValue::new(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(StringValue::new(value))
    }
}

impl From<Text> for Value {
    #[inline]
    fn from(value: Text) -> Self {
        Value::String(StringValue::new(value))
    }
}

impl From<BoolValue> for Value {
    #[inline]
    fn from(value: BoolValue) -> Self {
        Value::Bool(value)
    }
}

impl From<IntValue> for Value {
    #[inline]
    fn from(value: IntValue) -> Self {
        Value::Int(value)
    }
}

impl From<StringValue> for Value {
    #[inline]
    fn from(value: StringValue) -> Self {
        Value::String(value)
    }
}

impl From<SeqValue> for Value {
    #[inline]
    fn from(value: SeqValue) -> Self {
        Value::Seq(value)
    }
}

impl From<StructValue> for Value {
    #[inline]
    fn from(value: StructValue) -> Self {
        Value::Struct(value)
    }
}
