//! Arguments accepted by [`Element::apply`](crate::Element::apply).

use indexmap::IndexMap;

use crate::element::Element;
use crate::node::{Node, Text};

/// Ordered attribute map. Values of `None` render as bare boolean attributes.
pub type Attributes = IndexMap<String, Option<String>>;

/// One argument to [`Element::apply`](crate::Element::apply).
///
/// Values convert into the matching variant:
///
/// | Source                             | Variant                      |
/// |------------------------------------|------------------------------|
/// | `&str`, `String`, numbers, [`Text`] | [`Text`](Self::Text)        |
/// | `Vec<T>`, `[T; N]`, `()`           | [`Group`](Self::Group)       |
/// | [`Attributes`], [`attrs!`](crate::attrs) | [`Attributes`](Self::Attributes) |
/// | [`Element`], [`Node`]              | [`Node`](Self::Node)         |
#[derive(Clone, Debug, PartialEq)]
pub enum ApplyArg {
    /// Appended as a text child.
    Text(Text),
    /// Applied element by element, as if passed directly.
    Group(Vec<ApplyArg>),
    /// Merged into the element's attributes.
    Attributes(Attributes),
    /// Appended as a child node.
    Node(Node),
}

impl ApplyArg {
    /// Attribute argument built from key/value pairs.
    pub fn attrs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttrValue)>,
    {
        Self::Attributes(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.0))
                .collect(),
        )
    }

    /// Whether applying this argument would add at least one child.
    pub(crate) fn adds_children(&self) -> bool {
        match self {
            Self::Text(_) | Self::Node(_) => true,
            Self::Group(args) => args.iter().any(Self::adds_children),
            Self::Attributes(_) => false,
        }
    }
}

impl From<Text> for ApplyArg {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ApplyArg {
    fn from(text: &str) -> Self {
        Self::Text(Text::new(text))
    }
}

impl From<&String> for ApplyArg {
    fn from(text: &String) -> Self {
        Self::Text(Text::new(text.as_str()))
    }
}

impl From<String> for ApplyArg {
    fn from(text: String) -> Self {
        Self::Text(Text::new(text))
    }
}

macro_rules! text_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ApplyArg {
                fn from(value: $ty) -> Self {
                    Self::Text(Text::new(value.to_string()))
                }
            }
        )*
    };
}

text_from_display!(char, i32, i64, u32, u64, usize, f64);

impl From<Element> for ApplyArg {
    fn from(element: Element) -> Self {
        Self::Node(Node::Element(element))
    }
}

impl From<Node> for ApplyArg {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Attributes> for ApplyArg {
    fn from(attributes: Attributes) -> Self {
        Self::Attributes(attributes)
    }
}

impl From<()> for ApplyArg {
    fn from((): ()) -> Self {
        Self::Group(Vec::new())
    }
}

impl<T: Into<ApplyArg>> From<Vec<T>> for ApplyArg {
    fn from(args: Vec<T>) -> Self {
        Self::Group(args.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ApplyArg>, const N: usize> From<[T; N]> for ApplyArg {
    fn from(args: [T; N]) -> Self {
        Self::Group(args.into_iter().map(Into::into).collect())
    }
}

/// Attribute value: a string, or `None` for a bare boolean attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrValue(pub Option<String>);

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self(Some(value.to_owned()))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self(Some(value.clone()))
    }
}

impl From<Option<&str>> for AttrValue {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(str::to_owned))
    }
}

/// Build a [`Group`](ApplyArg::Group) from values of mixed types.
///
/// ```
/// use indent_markup::{HtmlFactory, args, attrs};
///
/// let h = HtmlFactory;
/// let link = h.a(args!["Docs", attrs!("href" => "/docs")]).unwrap();
/// assert_eq!(link.render(), "<a href=\"/docs\">Docs</a>\n");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        $crate::ApplyArg::Group(::std::vec![$($crate::ApplyArg::from($arg)),*])
    };
}

/// Build an [`Attributes`](ApplyArg::Attributes) argument from `key => value`
/// pairs. A value of `None` produces a bare boolean attribute.
///
/// ```
/// use indent_markup::{ApplyArg, attrs};
///
/// let arg = attrs!("type" => "checkbox", "checked" => None);
/// let ApplyArg::Attributes(map) = arg else { unreachable!() };
/// assert_eq!(map["type"].as_deref(), Some("checkbox"));
/// assert_eq!(map["checked"], None);
/// ```
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::ApplyArg::Attributes(
            [$((
                ::std::string::String::from($key),
                $crate::AttrValue::from($value).0,
            )),*]
            .into_iter()
            .collect::<$crate::Attributes>(),
        )
    };
}
