//! Conversions between catalog entries and RPC codes / HTTP statuses
//!
//! All functions are total: unclassified or absent errors are ordinary
//! inputs with well-defined answers.

use std::error::Error;

use crate::error::{find, BoxError, SemanticError};
use crate::kind::{Code, ErrorKind};

/// RPC code for `err`.
///
/// - `None` → `(0, true)`
/// - a chain holding a catalog entry → its code and `true`
/// - anything else → Unknown's code and `false`
pub fn code_of(err: Option<&(dyn Error + 'static)>) -> (Code, bool) {
    let Some(err) = err else {
        return (ErrorKind::Ok.code(), true);
    };
    match find(err) {
        Some(entry) => (entry.code(), true),
        None => (ErrorKind::Unknown.code(), false),
    }
}

/// HTTP status for `err`.
///
/// - `None` → `(200, true)`
/// - a chain holding a catalog entry → its status and `true`
/// - anything else → `(500, false)`
pub fn http_status_of(err: Option<&(dyn Error + 'static)>) -> (u16, bool) {
    let Some(err) = err else {
        return (ErrorKind::Ok.http_status(), true);
    };
    match find(err) {
        Some(entry) => (entry.http_status(), true),
        None => (ErrorKind::Unknown.http_status(), false),
    }
}

/// Catalog entry for `code` wrapping `err`.
///
/// OK and unmapped codes return `err` unchanged, including `None`.
pub fn from_code(code: Code, err: Option<BoxError>) -> Option<BoxError> {
    match ErrorKind::from_code(code) {
        Some(kind) => Some(Box::new(SemanticError::from_parts(kind, err))),
        None => {
            tracing::trace!(code = code.as_u32(), "unmapped rpc code, passing error through");
            err
        }
    }
}

/// Catalog entry for `status` wrapping `err`.
///
/// Statuses shared by several kinds resolve as documented on
/// [`ErrorKind::from_http_status`]. 200 and unmapped statuses return `err`
/// unchanged, including `None`.
pub fn from_http_status(status: u16, err: Option<BoxError>) -> Option<BoxError> {
    match ErrorKind::from_http_status(status) {
        Some(kind) => Some(Box::new(SemanticError::from_parts(kind, err))),
        None => {
            tracing::trace!(status, "unmapped http status, passing error through");
            err
        }
    }
}

/// [`from_code`] for callers that already hold an error.
pub fn classify(code: Code, err: BoxError) -> BoxError {
    match ErrorKind::from_code(code) {
        Some(kind) => Box::new(SemanticError::wrap(kind, err)),
        None => err,
    }
}

/// [`from_http_status`] for callers that already hold an error.
pub fn classify_http(status: u16, err: BoxError) -> BoxError {
    match ErrorKind::from_http_status(status) {
        Some(kind) => Box::new(SemanticError::wrap(kind, err)),
        None => err,
    }
}
