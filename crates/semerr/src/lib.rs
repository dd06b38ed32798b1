//! Semerr: semantic errors for service boundaries
//!
//! A closed catalog of error kinds mirroring the canonical RPC codes. Each
//! entry can wrap an underlying error, is recognised anywhere in a
//! `source()` chain, and converts to and from RPC codes and HTTP statuses.
//!
//! # Example
//!
//! ```
//! use semerr::{code_of, http_status_of, ErrorKind, SemanticError, StringError};
//!
//! // Standalone: the default message of the kind.
//! let err = SemanticError::new(ErrorKind::NotFound);
//! assert_eq!(err.to_string(), "not found");
//!
//! // Annotating an existing error keeps its message.
//! let err = ErrorKind::NotFound.wrap(StringError::new("user not found"));
//! assert_eq!(err.to_string(), "user not found");
//!
//! assert_eq!(code_of(Some(&err)), (semerr::Code(5), true));
//! assert_eq!(http_status_of(Some(&err)), (404, true));
//! ```
//!
//! # Boundaries
//!
//! ```
//! use semerr::{from_http_status, is_kind, ErrorKind, StringError};
//!
//! // A 404 received from upstream re-enters as NotFound.
//! let err = from_http_status(404, Some(Box::new(StringError::new("user not found"))))
//!     .expect("404 is mapped");
//! assert!(is_kind(&*err, ErrorKind::NotFound));
//! assert_eq!(err.to_string(), "user not found");
//! ```

pub mod convert;
pub mod error;
pub mod kind;
pub mod string;

pub use convert::{classify, classify_http, code_of, from_code, from_http_status, http_status_of};
pub use error::{find, is_kind, kind_of, BoxError, Semantic, SemanticError};
pub use kind::{Code, ErrorKind};
pub use string::StringError;
