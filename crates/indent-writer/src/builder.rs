//! Append-only string accumulator.

use std::fmt;

/// Collects string fragments and joins them on demand.
///
/// Fragments are kept separately until [`to_string`](ToString::to_string) or
/// [`into_string`](Self::into_string) is called, which concatenates them in a
/// single pass.
///
/// # Example
///
/// ```
/// use indent_writer::StringBuilder;
///
/// let mut sb = StringBuilder::new();
/// sb.append("Hello, ");
/// sb.append("world!");
/// assert_eq!(sb.to_string(), "Hello, world!");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringBuilder {
    fragments: Vec<String>,
}

impl StringBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment to the end.
    pub fn append(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Non-empty lines of the accumulated output.
    ///
    /// Each fragment is split on `'\n'` separately and empty pieces are
    /// dropped, so blank lines do not appear in the result.
    ///
    /// ```
    /// use indent_writer::StringBuilder;
    ///
    /// let sb = StringBuilder::from(vec!["a\n\nb\n", "c"]);
    /// assert_eq!(sb.to_lines(), vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn to_lines(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .flat_map(|fragment| fragment.split('\n'))
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Consume the builder and return the joined string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.fragments.concat()
    }

    /// Total length in bytes of all fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.iter().map(String::len).sum()
    }

    /// Whether no text has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(String::is_empty)
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragments.concat())
    }
}

impl From<&str> for StringBuilder {
    fn from(s: &str) -> Self {
        Self {
            fragments: vec![s.to_owned()],
        }
    }
}

impl From<String> for StringBuilder {
    fn from(s: String) -> Self {
        Self {
            fragments: vec![s],
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for StringBuilder {
    fn from(fragments: Vec<S>) -> Self {
        fragments.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StringBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut sb = Self::new();
        sb.extend(iter);
        sb
    }
}

impl<S: Into<String>> Extend<S> for StringBuilder {
    /// Add each fragment in order.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.fragments.extend(iter.into_iter().map(Into::into));
    }
}
