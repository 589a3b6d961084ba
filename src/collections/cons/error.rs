use derive_more::{Display, Error, From, IsVariant};

/// The rest of a [`Link`](super::Link) was something other than another Link of the same element
/// type.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("rest of a Link must be another Link or empty")]
pub struct InvalidRestType;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unexpected input at offset {offset}, expected {expected}")]
pub struct SyntaxError {
    pub offset: usize,
    pub expected: &'static str,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unable to parse element {text:?} at offset {offset}")]
pub struct ElementError {
    pub offset: usize,
    pub text: String,
}

/// An error produced when parsing a [`Link`](super::Link) from its debug form.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ParseLinkError {
    Syntax(SyntaxError),
    Element(ElementError),
}
