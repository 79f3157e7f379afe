//! Errors raised while building markup trees.

/// Invalid tree construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// A child was added to an HTML void element such as `img` or `br`.
    #[error("HTML void element <{tag}> cannot have child nodes")]
    VoidElementChild {
        /// Tag name of the element that rejected the child.
        tag: String,
    },
}
