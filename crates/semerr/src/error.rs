//! Catalog entries and chain matching
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::kind::{Code, ErrorKind};

/// Owned, thread-safe error trait object
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Anything that carries a semantic kind.
///
/// Chain matching never consults this trait: it only recognises
/// [`SemanticError`] values reached through `Error::source`. Implementing
/// `Semantic` alone does not make a type classifiable by `find` or `code_of`.
///
/// Types that compose a [`SemanticError`] forward `kind()` to it and return
/// the composed entry from `Error::source`, so chain matching still finds it:
///
/// ```
/// use semerr::{ErrorKind, Semantic, SemanticError};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("user {id} not found")]
/// struct UserNotFound {
///     id: u64,
///     #[source]
///     inner: SemanticError,
/// }
///
/// impl Semantic for UserNotFound {
///     fn kind(&self) -> ErrorKind {
///         self.inner.kind()
///     }
/// }
///
/// let err = UserNotFound { id: 10, inner: ErrorKind::NotFound.error() };
/// assert_eq!(err.http_status(), 404);
/// assert!(semerr::is_kind(&err, ErrorKind::NotFound));
/// ```
pub trait Semantic {
    fn kind(&self) -> ErrorKind;

    fn code(&self) -> Code {
        self.kind().code()
    }

    fn http_status(&self) -> u16 {
        self.kind().http_status()
    }
}

impl Semantic for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

/// A catalog entry: one kind, optionally wrapping an underlying error.
///
/// Equality and hashing only look at the kind.
pub struct SemanticError {
    kind: ErrorKind,
    inner: Option<BoxError>,
}

impl SemanticError {
    /// Entry with no wrapped error; displays the kind's default message.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, inner: None }
    }

    /// Entry wrapping `err`; displays `err`'s message untouched.
    pub fn wrap(kind: ErrorKind, err: impl Into<BoxError>) -> Self {
        Self {
            kind,
            inner: Some(err.into()),
        }
    }

    pub(crate) fn from_parts(kind: ErrorKind, inner: Option<BoxError>) -> Self {
        Self { kind, inner }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> Code {
        self.kind.code()
    }

    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The wrapped error, if any.
    pub fn unwrap_inner(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
    }

    pub fn into_inner(self) -> Option<BoxError> {
        self.inner
    }
}

impl Semantic for SemanticError {
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => fmt::Display::fmt(inner, f),
            None => f.write_str(self.kind.default_message()),
        }
    }
}

impl fmt::Debug for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticError")
            .field("kind", &self.kind)
            .field("inner", &self.inner)
            .finish()
    }
}

impl Error for SemanticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.unwrap_inner()
    }
}

impl PartialEq for SemanticError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for SemanticError {}

impl PartialEq<ErrorKind> for SemanticError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

impl Hash for SemanticError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl From<ErrorKind> for SemanticError {
    fn from(kind: ErrorKind) -> Self {
        SemanticError::new(kind)
    }
}

/// Every catalog entry in `err`'s source chain, outermost first.
fn entries<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a SemanticError> {
    std::iter::successors(Some(err), |&e| e.source())
        .filter_map(|e| e.downcast_ref::<SemanticError>())
}

/// First catalog entry in `err`'s source chain, starting with `err` itself.
///
/// When entries are nested the outermost one classifies the error; this is
/// what `code_of` and `http_status_of` report.
pub fn find<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a SemanticError> {
    entries(err).next()
}

pub fn kind_of(err: &(dyn Error + 'static)) -> Option<ErrorKind> {
    find(err).map(SemanticError::kind)
}

/// Whether `err`, or anything in its source chain, is an entry of kind `kind`.
///
/// Unlike [`kind_of`] this looks past the outermost entry.
pub fn is_kind(err: &(dyn Error + 'static), kind: ErrorKind) -> bool {
    entries(err).any(|entry| entry.kind() == kind)
}
