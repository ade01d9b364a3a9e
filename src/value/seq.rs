use std::{mem, slice, vec};

use crate::{Value, ValueVisitor, value::drop_forest};

/// An insertion-ordered sequence of owned values.
///
/// The only mutator is [`push_back`](SeqValue::push_back): elements are never
/// removed or reordered, so iteration order is always the order of insertion.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct SeqValue {
    pub(crate) values: Vec<Value>,
}

impl SeqValue {
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` as the new last element, taking ownership of it.
    #[inline]
    pub fn push_back(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
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
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Mutable access to an element in place. The element keeps its position.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_seq(self)
    }
}

impl Drop for SeqValue {
    fn drop(&mut self) {
        if !self.values.iter().any(Value::has_children) {
            return;
        }
        drop_forest(mem::take(&mut self.values));
    }
}

impl<T: Into<Value>> FromIterator<T> for SeqValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Value>> Extend<T> for SeqValue {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a SeqValue {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for SeqValue {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        mem::take(&mut self.values).into_iter()
    }
}
