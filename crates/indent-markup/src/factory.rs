//! Element factories.
//!
//! A factory turns a tag name plus [`ApplyArg`]s into an [`Element`]. Any tag
//! name works through [`MarkupFactory::element`] or [`MarkupFactory::tag`];
//! the common HTML vocabulary is also available as named methods:
//!
//! ```
//! use indent_markup::{HtmlFactory, args, attrs};
//!
//! let h = HtmlFactory;
//! let page = h.html(args![
//!     h.head(h.title("Indent Tools")?)?,
//!     h.body(h.h1(args!["Hello, world!", attrs!("style" => "color: red;")])?)?,
//! ])?;
//!
//! assert_eq!(
//!     page.render(),
//!     "\
//! <html>
//!     <head>
//!         <title>Indent Tools</title>
//!     </head>
//!     <body>
//!         <h1 style=\"color: red;\">Hello, world!</h1>
//!     </body>
//! </html>
//! "
//! );
//! # Ok::<(), indent_markup::StructuralError>(())
//! ```

use crate::arg::ApplyArg;
use crate::element::Element;
use crate::error::StructuralError;

/// Builds elements by tag name.
pub trait MarkupFactory {
    /// Whether built elements follow HTML5 rules.
    fn html_mode(&self) -> bool;

    /// Build an element named `tag` and apply `args` to it.
    fn element(&self, tag: &str, args: impl Into<ApplyArg>) -> Result<Element, StructuralError> {
        let mut element = Element::with_mode(tag, self.html_mode());
        element.apply(args)?;
        Ok(element)
    }

    /// Constructor bound to `name`, for tags chosen at runtime or with names
    /// that are not valid Rust identifiers.
    fn tag(&self, name: &str) -> TagConstructor {
        TagConstructor {
            name: name.to_owned(),
            html: self.html_mode(),
        }
    }
}

/// Constructor for elements of one tag name.
///
/// ```
/// use indent_markup::{MarkupFactory, XmlFactory};
///
/// let first_name = XmlFactory.tag("1stName");
/// assert_eq!(first_name.call("Lee")?.render(), "<1stName>Lee</1stName>\n");
/// # Ok::<(), indent_markup::StructuralError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagConstructor {
    name: String,
    html: bool,
}

impl TagConstructor {
    /// Tag name of constructed elements.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build an element and apply `args` to it.
    pub fn call(&self, args: impl Into<ApplyArg>) -> Result<Element, StructuralError> {
        let mut element = Element::with_mode(self.name.as_str(), self.html);
        element.apply(args)?;
        Ok(element)
    }
}

/// Factory for plain XML elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XmlFactory;

/// Factory for elements following HTML5 rules: void elements reject
/// children and other elements always get a closing tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HtmlFactory;

/// Shared XML factory.
pub const XML: XmlFactory = XmlFactory;

/// Shared HTML factory.
pub const HTML: HtmlFactory = HtmlFactory;

impl MarkupFactory for XmlFactory {
    fn html_mode(&self) -> bool {
        false
    }
}

impl MarkupFactory for HtmlFactory {
    fn html_mode(&self) -> bool {
        true
    }
}

macro_rules! tag_methods {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Build a `<", stringify!($name), ">` element.")]
            pub fn $name(&self, args: impl Into<ApplyArg>) -> Result<Element, StructuralError> {
                self.element(stringify!($name), args)
            }
        )*
    };
}

macro_rules! impl_tag_methods {
    ($($factory:ty),*) => {
        $(
            impl $factory {
                tag_methods!(
                    a, article, aside, b, blockquote, body, br, button, caption, code, col, dd,
                    div, dl, dt, em, footer, form, h1, h2, h3, h4, h5, h6, head, header, hr,
                    html, i, img, input, label, li, link, main, meta, nav, ol, option, p, pre,
                    script, section, select, small, source, span, strong, style, sub, sup,
                    table, tbody, td, textarea, tfoot, th, thead, title, tr, u, ul,
                );
            }
        )*
    };
}

impl_tag_methods!(XmlFactory, HtmlFactory);
