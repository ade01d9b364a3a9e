use std::fmt::{self, Display};

/// The discriminant of a [`Value`](crate::Value).
///
/// The variant set is closed: there is exactly one tag per value variant.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    Bool = 0,
    Int = 1,
    String = 2,
    Seq = 3,
    Struct = 4,
}

impl Tag {
    /// Returns `true` if values of this tag cannot hold children.
    ///
    /// # Example
    ///
    /// ```
    /// use valtree::Tag;
    ///
    /// assert!(Tag::Int.is_leaf());
    /// assert!(Tag::String.is_leaf());
    /// assert!(!Tag::Seq.is_leaf());
    /// ```
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::String)
    }

    /// Returns `true` for [`Tag::Seq`] and [`Tag::Struct`].
    pub const fn is_container(self) -> bool {
        !self.is_leaf()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
            Self::Seq => "seq",
            Self::Struct => "struct",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
