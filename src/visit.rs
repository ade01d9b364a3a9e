use crate::{BoolValue, IntValue, SeqValue, StringValue, StructValue};

/// An operation over value trees, with one method per value variant.
///
/// [`Value::accept`](crate::Value::accept) calls exactly one of these methods,
/// chosen by the variant of the value it is called on. Visiting children is
/// left to the implementation: a visitor that needs the whole tree calls
/// `accept` on each child of a [`SeqValue`] or [`StructValue`] itself.
///
/// New output formats are added by implementing this trait. The variant set is
/// closed, so a new variant would be a new required method here.
///
/// # Example
///
/// ```
/// use valtree::{BoolValue, IntValue, SeqValue, StringValue, StructValue, Value, ValueVisitor};
///
/// /// Sums every integer in a tree.
/// struct Sum;
///
/// impl ValueVisitor for Sum {
///     type Output = i64;
///
///     fn visit_bool(&mut self, _: &BoolValue) -> i64 {
///         0
///     }
///
///     fn visit_int(&mut self, value: &IntValue) -> i64 {
///         value.get().into()
///     }
///
///     fn visit_string(&mut self, _: &StringValue) -> i64 {
///         0
///     }
///
///     fn visit_seq(&mut self, value: &SeqValue) -> i64 {
///         value.iter().map(|child| child.accept(self)).sum()
///     }
///
///     fn visit_struct(&mut self, value: &StructValue) -> i64 {
///         value.values().map(|child| child.accept(self)).sum()
///     }
/// }
///
/// let seq: SeqValue = [1, 2, 3].into_iter().collect();
/// assert_eq!(Value::from(seq).accept(&mut Sum), 6);
/// ```
pub trait ValueVisitor {
    type Output;

    fn visit_bool(&mut self, value: &BoolValue) -> Self::Output;

    fn visit_int(&mut self, value: &IntValue) -> Self::Output;

    fn visit_string(&mut self, value: &StringValue) -> Self::Output;

    fn visit_seq(&mut self, value: &SeqValue) -> Self::Output;

    fn visit_struct(&mut self, value: &StructValue) -> Self::Output;
}

impl<V: ValueVisitor + ?Sized> ValueVisitor for &mut V {
    type Output = V::Output;

    #[inline]
    fn visit_bool(&mut self, value: &BoolValue) -> Self::Output {
        (**self).visit_bool(value)
    }

    #[inline]
    fn visit_int(&mut self, value: &IntValue) -> Self::Output {
        (**self).visit_int(value)
    }

    #[inline]
    fn visit_string(&mut self, value: &StringValue) -> Self::Output {
        (**self).visit_string(value)
    }

    #[inline]
    fn visit_seq(&mut self, value: &SeqValue) -> Self::Output {
        (**self).visit_seq(value)
    }

    #[inline]
    fn visit_struct(&mut self, value: &StructValue) -> Self::Output {
        (**self).visit_struct(value)
    }
}
