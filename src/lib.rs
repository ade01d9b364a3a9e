//! Closed, dynamically-typed value trees and a streaming JSON writer.
//!
//! A [`Value`] is one of five variants: [`BoolValue`], [`IntValue`],
//! [`StringValue`], [`SeqValue`] and [`StructValue`]. Trees are built bottom-up
//! and rendered by driving a [`ValueVisitor`] over the root. [`JsonWriter`] is
//! the visitor that ships with the crate.
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
//! root.insert("seq", seq);
//! root.insert("val", 42);
//!
//! let mut out = Vec::new();
//! Value::from(root).write_to_writer(&mut out)?;
//! assert_eq!(out, br#"{"seq": [false, "Hello"], "val": 42}"#);
//! # Ok::<(), valtree::Error>(())
//! ```

mod error;
mod key;
mod tag;
mod text;
mod util;
pub mod value;
mod visit;
pub mod write;

#[cfg(feature = "serde")]
pub mod ser;

pub use error::*;
pub use key::*;
pub use tag::*;
pub use text::*;
pub(crate) use util::*;
pub use value::*;
pub use visit::*;
pub use write::{Escape, JsonWriter, WriterConfig};

#[cfg(feature = "serde")]
pub use ser::to_value;
