use std::{
    borrow::Borrow,
    fmt::{self, Display},
    ops::Deref,
    str::Chars,
};

/// An owning, ordered text buffer.
///
/// `Text` is the payload of [`StringValue`](crate::StringValue) and the key type
/// of [`StructValue`](crate::StructValue). Ordering is byte-lexicographic, so
/// struct keys iterate in the order `strcmp` would sort them.
///
/// # Example
///
/// ```
/// use valtree::Text;
///
/// let a = Text::from("apple");
/// let b = Text::from("banana");
/// assert!(a < b);
/// assert_eq!(a.len(), 5);
/// assert_eq!(b.chars().filter(|&c| c == 'a').count(), 3);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct Text(String);

impl Text {
    #[inline]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn chars(&self) -> Chars<'_> {
        self.0.chars()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Text {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Text {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Text {
    #[inline]
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<char> for Text {
    #[inline]
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl From<Text> for String {
    #[inline]
    fn from(value: Text) -> Self {
        value.0
    }
}

impl Deref for Text {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Text {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `BTreeMap<Text, _>` be queried with a plain `&str`.
impl Borrow<str> for Text {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Text {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Text {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = char;
    type IntoIter = Chars<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
