//! XML/HTML element trees rendered as indented markup.
//!
//! Trees are assembled from [`Element`]s and [`Text`] leaves, usually through
//! a factory ([`XmlFactory`] or [`HtmlFactory`]), and rendered with
//! [`Element::render`]. Rendering nests each child one indent level deeper
//! using [`indent_writer::IndentWriter`].
//!
//! # Architecture
//!
//! - [`ApplyArg`]: closed set of things that can be applied to an element
//!   (text, groups, attributes, nodes), with conversions from plain values
//! - [`Element`]: tag, ordered attributes, children, optional doctype and the
//!   HTML-mode flag
//! - [`MarkupFactory`]: element construction by tag name
//!
//! HTML mode adds three rules: void elements reject children with a
//! [`StructuralError`], other empty elements render with a closing tag, and
//! repeated `class` attributes are joined.
//!
//! # Example
//!
//! ```
//! use indent_markup::{XmlFactory, args};
//!
//! let x = XmlFactory;
//! let list = x.ul(args![x.li("a")?, x.li("b")?])?;
//! assert_eq!(list.render(), "<ul>\n    <li>a</li>\n    <li>b</li>\n</ul>\n");
//! # Ok::<(), indent_markup::StructuralError>(())
//! ```

mod arg;
mod element;
mod error;
mod escape;
mod factory;
mod node;
mod render;
mod tags;

pub use arg::{ApplyArg, AttrValue, Attributes};
pub use element::Element;
pub use error::StructuralError;
pub use escape::{escape_attr, escape_text};
pub use factory::{HTML, HtmlFactory, MarkupFactory, TagConstructor, XML, XmlFactory};
pub use node::{Node, NodeKind, Text};
pub use render::RenderOptions;
pub use tags::{HTML_NO_INDENT_TAGS, HTML_VOID_TAGS, is_no_indent_tag, is_void_tag};
