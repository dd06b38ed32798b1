//! Plain-string errors
use std::borrow::Cow;
use thiserror::Error;

/// A non-semantic error that is just its message.
///
/// Handy as the wrapped error of a catalog entry with custom text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StringError(Cow<'static, str>);

impl StringError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        StringError(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for StringError {
    fn from(message: &'static str) -> Self {
        StringError(Cow::Borrowed(message))
    }
}

impl From<String> for StringError {
    fn from(message: String) -> Self {
        StringError(Cow::Owned(message))
    }
}
