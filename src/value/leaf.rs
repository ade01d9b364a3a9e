use crate::{Text, ValueVisitor};

/// A boolean leaf.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoolValue {
    value: bool,
}

impl BoolValue {
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn get(&self) -> bool {
        self.value
    }

    #[inline]
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_bool(self)
    }
}

impl From<bool> for BoolValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

/// An integer leaf. The payload is a fixed-width 32-bit signed integer.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct IntValue {
    value: i32,
}

impl IntValue {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn get(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_int(self)
    }
}

impl From<i32> for IntValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

/// A string leaf owning one [`Text`].
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StringValue {
    value: Text,
}

impl StringValue {
    #[inline]
    pub fn new(value: impl Into<Text>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[inline]
    pub fn get(&self) -> &Text {
        &self.value
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    #[inline]
    pub fn into_text(self) -> Text {
        self.value
    }

    #[inline]
    pub fn accept<V: ValueVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_string(self)
    }
}

impl From<&str> for StringValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Text> for StringValue {
    #[inline]
    fn from(value: Text) -> Self {
        Self::new(value)
    }
}
