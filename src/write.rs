//! Streaming JSON rendering.
//!
//! [`JsonWriter`] is a [`ValueVisitor`] that writes each value to its sink as it
//! is visited. Nothing is buffered: a tree is rendered in one top-down pass and
//! a failing sink aborts the render with whatever was already written left in
//! place.
//!
//! The output is JSON-like rather than strict JSON. Children are separated by
//! `", "`, struct entries are written as `"key": value` in key order, and string
//! contents are written verbatim between the quotes. A string containing `"`,
//! `\` or a control character therefore produces invalid JSON. Callers who need
//! strict output can opt in to [`Escape::Json`].

use std::{
    fmt::{self, Display},
    io::{self, Write},
    str,
};

use crate::{
    BoolValue, Error, IntValue, Result, SeqValue, StringValue, StructValue, Value, ValueVisitor,
    cold_path,
};

/// How string contents and struct keys are written between their quotes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Escape {
    /// Emit the text unchanged.
    #[default]
    Verbatim,
    /// Escape `"`, `\` and control characters as RFC 8259 requires.
    Json,
}

/// Options for [`JsonWriter`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct WriterConfig {
    pub escape: Escape,
}

impl WriterConfig {
    #[inline]
    pub const fn new() -> Self {
        Self {
            escape: Escape::Verbatim,
        }
    }

    #[inline]
    pub const fn escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }
}

/// Renders value trees as JSON text onto a [`Write`] sink.
///
/// # Example
///
/// ```
/// use valtree::{JsonWriter, SeqValue, Value};
///
/// let mut seq = SeqValue::new();
/// seq.push_back(1);
/// seq.push_back(true);
///
/// let mut out = Vec::new();
/// JsonWriter::new(&mut out).render(&Value::from(seq))?;
/// assert_eq!(out, b"[1, true]");
/// # Ok::<(), valtree::Error>(())
/// ```
pub struct JsonWriter<W: Write> {
    writer: W,
    config: WriterConfig,
}

impl<W: Write> JsonWriter<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::new())
    }

    #[inline]
    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self { writer, config }
    }

    #[inline]
    pub fn config(&self) -> WriterConfig {
        self.config
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders `value` and all of its descendants.
    #[inline]
    pub fn render(&mut self, value: &Value) -> Result<()> {
        value.accept(self)
    }

    #[inline]
    fn raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::Io)
    }

    fn quoted(&mut self, text: &str) -> Result<()> {
        self.raw(b"\"")?;
        match self.config.escape {
            Escape::Verbatim => self.raw(text.as_bytes())?,
            Escape::Json => self.escaped(text.as_bytes())?,
        }
        self.raw(b"\"")
    }

    fn escaped(&mut self, bytes: &[u8]) -> Result<()> {
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            let short = match byte {
                b'"' => b'"',
                b'\\' => b'\\',
                b'\n' => b'n',
                b'\r' => b'r',
                b'\t' => b't',
                0x08 => b'b',
                0x0C => b'f',
                0x00..=0x1F => b'u',
                _ => continue,
            };
            if start < i {
                self.raw(&bytes[start..i])?;
            }
            if short == b'u' {
                const HEX: &[u8; 16] = b"0123456789abcdef";
                self.raw(&[
                    b'\\',
                    b'u',
                    b'0',
                    b'0',
                    HEX[(byte >> 4) as usize],
                    HEX[(byte & 0x0F) as usize],
                ])?;
            } else {
                self.raw(&[b'\\', short])?;
            }
            start = i + 1;
        }
        if start < bytes.len() {
            self.raw(&bytes[start..])?;
        }
        Ok(())
    }
}

impl<W: Write> ValueVisitor for JsonWriter<W> {
    type Output = Result<()>;

    fn visit_bool(&mut self, value: &BoolValue) -> Result<()> {
        let literal: &[u8] = if value.get() { b"true" } else { b"false" };
        self.raw(literal)
    }

    fn visit_int(&mut self, value: &IntValue) -> Result<()> {
        write!(self.writer, "{}", value.get()).map_err(Error::Io)
    }

    fn visit_string(&mut self, value: &StringValue) -> Result<()> {
        self.quoted(value.as_str())
    }

    fn visit_seq(&mut self, value: &SeqValue) -> Result<()> {
        self.raw(b"[")?;
        for (i, child) in value.iter().enumerate() {
            if i != 0 {
                self.raw(b", ")?;
            }
            child.accept(self)?;
        }
        self.raw(b"]")
    }

    fn visit_struct(&mut self, value: &StructValue) -> Result<()> {
        self.raw(b"{")?;
        for (i, (key, child)) in value.iter().enumerate() {
            if i != 0 {
                self.raw(b", ")?;
            }
            self.quoted(key)?;
            self.raw(b": ")?;
            child.accept(self)?;
        }
        self.raw(b"}")
    }
}

impl Value {
    /// Renders this tree onto `writer` with the default [`WriterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] as soon as the sink rejects a write. The output is
    /// then truncated at that point.
    #[inline]
    pub fn write_to_writer(&self, writer: impl Write) -> Result<()> {
        self.write_to_writer_with(writer, WriterConfig::new())
    }

    pub fn write_to_writer_with(&self, writer: impl Write, config: WriterConfig) -> Result<()> {
        let mut json = JsonWriter::with_config(writer, config);
        match json.render(self) {
            Ok(()) => {
                log::trace!("rendered {} value", self.tag());
                Ok(())
            }
            Err(error) => {
                cold_path();
                log::debug!("render of {} value aborted: {error}", self.tag());
                Err(error)
            }
        }
    }

    pub fn write_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        if let Err(error) = self.write_to_writer(&mut buf) {
            unreachable!("writing to a Vec failed: {error}");
        }
        buf
    }

    /// Renders this tree into a new `String`.
    ///
    /// ```
    /// use valtree::{IntValue, Value};
    ///
    /// assert_eq!(Value::from(IntValue::new(-3)).to_json_string(), "-3");
    /// ```
    pub fn to_json_string(&self) -> String {
        // Only whole `str`s and ASCII are ever written.
        match String::from_utf8(self.write_to_vec()) {
            Ok(json) => json,
            Err(error) => String::from_utf8_lossy(error.as_bytes()).into_owned(),
        }
    }
}

/// Passes each chunk a [`JsonWriter`] emits straight on to a `fmt::Write`.
struct FmtSink<'a, F: ?Sized> {
    inner: &'a mut F,
}

impl<F: fmt::Write + ?Sized> Write for FmtSink<'_, F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Chunks are whole `str`s or split at ASCII bytes.
        let text = str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.inner
            .write_str(text)
            .map_err(|_| io::Error::other("formatter error"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_writer(FmtSink { inner: f })
            .map_err(|_| fmt::Error)
    }
}
