//! Markup tree nodes.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::element::Element;
use crate::escape::escape_text;
use crate::render::RenderOptions;

/// Kind of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Element with a tag, attributes and children.
    Element,
    /// Text leaf.
    Text,
}

/// Node in a markup tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Element node.
    Element(Element),
    /// Text leaf.
    Text(Text),
}

impl Node {
    /// Kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
        }
    }

    /// Element contents, if this is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Text contents, if this is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Render with default options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render with the given options.
    #[must_use]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        match self {
            Self::Element(element) => element.render_with(options),
            Self::Text(text) => text.render(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(Text::new(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(Text::new(text))
    }
}

/// Text leaf.
///
/// Content is either a literal string or a deferred value converted to text
/// each time the tree is rendered, e.g. a translated or interpolated message
/// resolved at output time.
#[derive(Clone)]
pub struct Text {
    source: TextSource,
}

#[derive(Clone)]
enum TextSource {
    Literal(String),
    Deferred(Rc<dyn fmt::Display>),
}

impl Text {
    /// Text leaf with literal content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            source: TextSource::Literal(content.into()),
        }
    }

    /// Text leaf whose content is produced by `value` at render time.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::fmt;
    /// use std::rc::Rc;
    ///
    /// use indent_markup::Text;
    ///
    /// struct Counter(Rc<Cell<u32>>);
    ///
    /// impl fmt::Display for Counter {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "visits: {}", self.0.get())
    ///     }
    /// }
    ///
    /// let visits = Rc::new(Cell::new(1));
    /// let text = Text::deferred(Counter(Rc::clone(&visits)));
    /// assert_eq!(text.render(), "visits: 1");
    /// visits.set(2);
    /// assert_eq!(text.render(), "visits: 2");
    /// ```
    pub fn deferred(value: impl fmt::Display + 'static) -> Self {
        Self {
            source: TextSource::Deferred(Rc::new(value)),
        }
    }

    /// Unescaped content.
    #[must_use]
    pub fn content(&self) -> Cow<'_, str> {
        match &self.source {
            TextSource::Literal(s) => Cow::Borrowed(s),
            TextSource::Deferred(value) => Cow::Owned(value.to_string()),
        }
    }

    /// Escaped content, without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        escape_text(&self.content()).into_owned()
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            TextSource::Literal(_) => "Literal",
            TextSource::Deferred(_) => "Deferred",
        };
        f.debug_struct("Text")
            .field("kind", &kind)
            .field("content", &self.content())
            .finish()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.content() == other.content()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
