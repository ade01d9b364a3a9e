use crate::Text;

/// Addresses one child of a container [`Value`](crate::Value).
///
/// A position selects an element of a [`SeqValue`](crate::SeqValue); a name
/// selects an entry of a [`StructValue`](crate::StructValue).
///
/// ```
/// use valtree::Key;
///
/// assert_eq!(Key::from(3_usize), Key::Position(3));
/// assert_eq!(Key::from("name"), Key::Name("name"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Key<'a> {
    Position(usize),
    Name(&'a str),
}

impl From<usize> for Key<'_> {
    #[inline]
    fn from(position: usize) -> Self {
        Key::Position(position)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    #[inline]
    fn from(name: &'a String) -> Self {
        Key::Name(name.as_str())
    }
}

impl<'a> From<&'a Text> for Key<'a> {
    #[inline]
    fn from(name: &'a Text) -> Self {
        Key::Name(name.as_str())
    }
}
