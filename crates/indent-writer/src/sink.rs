//! Output sinks for [`IndentWriter`](crate::IndentWriter).
//!
//! A sink is anything that accepts raw text. The writer decides what to emit
//! (indent prefixes, newlines); the sink only stores or forwards it.

use std::io;

use crate::StringBuilder;

/// Destination for raw text emitted by an indent writer.
pub trait Sink {
    /// Accept a chunk of text exactly as given.
    fn write_raw(&mut self, text: &str);
}

impl Sink for StringBuilder {
    fn write_raw(&mut self, text: &str) {
        self.append(text);
    }
}

impl Sink for String {
    fn write_raw(&mut self, text: &str) {
        self.push_str(text);
    }
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn write_raw(&mut self, text: &str) {
        (**self).write_raw(text);
    }
}

/// Sink forwarding text to an [`io::Write`] implementation.
///
/// The first I/O error is kept and every later write is dropped, so the
/// writer API stays infallible. Check [`error`](Self::error) or call
/// [`finish`](Self::finish) to get the error back unchanged.
///
/// No buffering or flushing is added on top of the wrapped writer.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// First I/O error seen, if any.
    #[must_use]
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Return the wrapped writer, or the first I/O error seen.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }

    /// Return the wrapped writer, discarding any stored error.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_raw(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.inner.write_all(text.as_bytes()) {
            tracing::debug!(error = %e, "Sink write failed, dropping further output");
            self.error = Some(e);
        }
    }
}
