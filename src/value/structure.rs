use std::{
    collections::{BTreeMap, btree_map},
    mem,
};

use crate::{Text, Value, ValueVisitor, value::drop_forest};

/// A keyed record of owned values.
///
/// Keys are unique and iteration always yields entries in ascending key order,
/// regardless of the order they were inserted in.
///
/// # Example
///
/// ```
/// use valtree::StructValue;
///
/// let mut record = StructValue::new();
/// record.insert("b", 1);
/// record.insert("a", 2);
/// assert_eq!(record.insert("b", 3).and_then(|old| old.as_int()), Some(1));
///
/// let keys: Vec<_> = record.keys().map(|k| k.as_str()).collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct StructValue {
    pub(crate) values: BTreeMap<Text, Value>,
}

impl StructValue {
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Inserts `value` under `key`, taking ownership of both.
    ///
    /// An existing entry for `key` is replaced and handed back.
    #[inline]
    pub fn insert(&mut self, key: impl Into<Text>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, Text, Value> {
        self.values.iter()
    }

    #[inline]
    pub fn keys(&self) -> btree_map::Keys<'_, Text, Value> {
        self.values.keys()
    }

    #[inline]
    pub fn values(&self) -> btree_map::Values<'_, Text, Value> {
        self.values.values()
    }

    #[inline]
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_struct(self)
    }
}

impl Drop for StructValue {
    fn drop(&mut self) {
        if !self.values.values().any(Value::has_children) {
            return;
        }
        drop_forest(mem::take(&mut self.values).into_values().collect());
    }
}

impl<K: Into<Text>, V: Into<Value>> FromIterator<(K, V)> for StructValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl<K: Into<Text>, V: Into<Value>> Extend<(K, V)> for StructValue {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a StructValue {
    type Item = (&'a Text, &'a Value);
    type IntoIter = btree_map::Iter<'a, Text, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for StructValue {
    type Item = (Text, Value);
    type IntoIter = btree_map::IntoIter<Text, Value>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.values).into_iter()
    }
}
