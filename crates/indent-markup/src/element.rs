//! Element nodes and their rendering.

use std::fmt;

use indent_writer::{BufferedIndentWriter, IndentWriter, StringBuilder};

use crate::arg::{ApplyArg, AttrValue, Attributes};
use crate::error::StructuralError;
use crate::escape::{escape_attr, escape_text};
use crate::node::Node;
use crate::render::RenderOptions;
use crate::tags::{is_no_indent_tag, is_void_tag};

/// Element with a tag name, ordered attributes and ordered children.
///
/// In HTML mode the element follows HTML5 conventions: void elements
/// (`img`, `br`, ...) reject children, other empty elements still get an
/// explicit closing tag, and `class` values accumulate instead of being
/// replaced.
///
/// # Example
///
/// ```
/// use indent_markup::{Element, args};
///
/// let mut first = Element::new("li");
/// first.apply("a")?;
/// let mut list = Element::new("ul");
/// list.apply(args![first, Element::new("li").with_attr("id", "b")])?;
///
/// assert_eq!(
///     list.render(),
///     "<ul>\n    <li>a</li>\n    <li id=\"b\"/>\n</ul>\n"
/// );
/// # Ok::<(), indent_markup::StructuralError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    children: Vec<Node>,
    doctype: Option<String>,
    html: bool,
}

impl Element {
    /// Create an XML element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_mode(tag, false)
    }

    /// Create an element following HTML5 rules.
    pub fn html(tag: impl Into<String>) -> Self {
        Self::with_mode(tag, true)
    }

    pub(crate) fn with_mode(tag: impl Into<String>, html: bool) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
            doctype: None,
            html,
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Value of one attribute. `Some(None)` means a bare boolean attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<Option<&str>> {
        self.attributes.get(key).map(Option::as_deref)
    }

    /// Child nodes in order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Doctype emitted before the element, if any.
    #[must_use]
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    /// Whether HTML5 rules apply.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.html
    }

    /// Whether this is an HTML void element that cannot take children.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.html && is_void_tag(&self.tag)
    }

    /// Set the doctype emitted before the element, e.g. `html`.
    pub fn set_doctype(&mut self, doctype: impl Into<String>) -> &mut Self {
        self.doctype = Some(doctype.into());
        self
    }

    /// Builder form of [`set_doctype`](Self::set_doctype).
    #[must_use]
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.set_doctype(doctype);
        self
    }

    /// Set an attribute, replacing any previous value in place.
    ///
    /// Unlike [`apply`](Self::apply), `class` is replaced even in HTML mode.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.insert(key.into(), value.into().0);
        self
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Add children and attributes.
    ///
    /// Each argument is dispatched by shape:
    /// - text becomes a text child
    /// - a group is applied element by element
    /// - attributes are merged: new keys are appended, existing keys keep
    ///   their position and take the new value; in HTML mode a second
    ///   `class` is joined to the first with a space
    /// - a node is appended as a child
    ///
    /// Fails without modifying the element if the arguments would add any
    /// child to an HTML void element.
    pub fn apply(&mut self, arg: impl Into<ApplyArg>) -> Result<&mut Self, StructuralError> {
        let arg = arg.into();
        if self.is_void() && arg.adds_children() {
            tracing::debug!(tag = %self.tag, "Rejected child for void element");
            return Err(self.void_error());
        }
        self.apply_unchecked(arg);
        Ok(self)
    }

    /// Append one child node.
    ///
    /// Fails for HTML void elements.
    pub fn append(&mut self, child: impl Into<Node>) -> Result<&mut Self, StructuralError> {
        if self.is_void() {
            tracing::debug!(tag = %self.tag, "Rejected child for void element");
            return Err(self.void_error());
        }
        self.children.push(child.into());
        Ok(self)
    }

    fn apply_unchecked(&mut self, arg: ApplyArg) {
        match arg {
            ApplyArg::Text(text) => self.children.push(Node::Text(text)),
            ApplyArg::Group(args) => {
                for arg in args {
                    self.apply_unchecked(arg);
                }
            }
            ApplyArg::Attributes(attributes) => {
                for (key, value) in attributes {
                    self.merge_attr(key, value);
                }
            }
            ApplyArg::Node(node) => self.children.push(node),
        }
    }

    fn merge_attr(&mut self, key: String, value: Option<String>) {
        if self.html && key == "class" {
            if let Some(existing) = self.attributes.get_mut("class") {
                *existing = match (existing.take(), value) {
                    (Some(old), Some(new)) => Some(format!("{old} {new}")),
                    (old, new) => new.or(old),
                };
                return;
            }
        }
        self.attributes.insert(key, value);
    }

    fn void_error(&self) -> StructuralError {
        StructuralError::VoidElementChild {
            tag: self.tag.clone(),
        }
    }

    /// Render with default options.
    ///
    /// Each element line ends with a newline. Rendering does not modify the
    /// tree, so repeated calls give identical output.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render with the given options.
    #[must_use]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        tracing::trace!(tag = %self.tag, children = self.children.len(), "Rendering element");

        let mut sb: BufferedIndentWriter =
            IndentWriter::with_options(StringBuilder::new(), &options.writer_options());

        if let Some(doctype) = &self.doctype {
            sb.println(&format!("<!doctype {doctype}>"));
        }

        let name = escape_text(&self.tag);
        let open = if self.attributes.is_empty() {
            format!("<{name}")
        } else {
            format!("<{name} {}", self.attrs_str())
        };

        if self.children.is_empty() {
            if self.html && !is_void_tag(&self.tag) {
                sb.println(&format!("{open}></{name}>"));
            } else {
                sb.println(&format!("{open}/>"));
            }
        } else if self.html && is_no_indent_tag(&self.tag) {
            let content: String = self
                .children
                .iter()
                .map(|child| child.render_with(options))
                .collect();
            sb.println(&format!("{open}>{content}</{name}>"));
        } else if let Some(text) = self.inline_text() {
            sb.println(&format!("{open}>{text}</{name}>"));
        } else {
            sb.println(&format!("{open}>"));
            sb.indented(|sb| {
                for child in &self.children {
                    sb.print_lines(&child.render_with(options));
                }
            });
            sb.println(&format!("</{name}>"));
        }

        sb.into_string()
    }

    /// Rendered text of a sole single-line text child.
    fn inline_text(&self) -> Option<String> {
        match self.children.as_slice() {
            [Node::Text(text)] => {
                let rendered = text.render();
                (!rendered.contains('\n')).then_some(rendered)
            }
            _ => None,
        }
    }

    fn attrs_str(&self) -> String {
        self.attributes
            .iter()
            .map(|(key, value)| match value {
                Some(value) => format!(r#"{}="{}""#, escape_text(key), escape_attr(value)),
                None => escape_text(key).into_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
