//! Scoped indentation.

use std::ops::{Deref, DerefMut};

use crate::sink::Sink;
use crate::writer::IndentWriter;

/// Guard holding one extra indent level on an [`IndentWriter`].
///
/// Created by [`IndentWriter::scope`]. The level is released when the guard
/// is dropped, on every exit path.
///
/// ```
/// use indent_writer::IndentWriter;
///
/// let mut w = IndentWriter::buffered();
/// w.println("outer");
/// {
///     let mut inner = w.scope();
///     inner.println("inner");
/// }
/// w.println("outer again");
///
/// assert_eq!(w.to_string(), "outer\n    inner\nouter again\n");
/// ```
#[must_use = "the indent level is released as soon as the guard is dropped"]
pub struct IndentGuard<'a, S: Sink> {
    writer: &'a mut IndentWriter<S>,
}

impl<'a, S: Sink> IndentGuard<'a, S> {
    pub(crate) fn new(writer: &'a mut IndentWriter<S>) -> Self {
        writer.indent(1);
        Self { writer }
    }
}

impl<S: Sink> Deref for IndentGuard<'_, S> {
    type Target = IndentWriter<S>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<S: Sink> DerefMut for IndentGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl<S: Sink> Drop for IndentGuard<'_, S> {
    fn drop(&mut self) {
        self.writer.unindent(1);
    }
}
