//! Error kinds and the static code/status tables
//!
//! Every kind owns exactly one RPC code and one HTTP status. The reverse
//! tables pick a single representative kind per code/status; collisions are
//! resolved here, once, and never at lookup time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::error::{BoxError, SemanticError};

/// Canonical RPC status code (0 = OK, 1..=16 = errors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(pub u32);

impl Code {
    pub const OK: Code = Code(0);

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Code {
    fn from(value: u32) -> Self {
        Code(value)
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of semantic error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Ok,
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl ErrorKind {
    /// All kinds, in code order.
    pub const ALL: [ErrorKind; 17] = [
        ErrorKind::Ok,
        ErrorKind::Canceled,
        ErrorKind::Unknown,
        ErrorKind::InvalidArgument,
        ErrorKind::DeadlineExceeded,
        ErrorKind::NotFound,
        ErrorKind::AlreadyExists,
        ErrorKind::PermissionDenied,
        ErrorKind::ResourceExhausted,
        ErrorKind::FailedPrecondition,
        ErrorKind::Aborted,
        ErrorKind::OutOfRange,
        ErrorKind::Unimplemented,
        ErrorKind::Internal,
        ErrorKind::Unavailable,
        ErrorKind::DataLoss,
        ErrorKind::Unauthenticated,
    ];

    /// RPC code for this kind
    pub const fn code(self) -> Code {
        let n = match self {
            ErrorKind::Ok => 0,
            ErrorKind::Canceled => 1,
            ErrorKind::Unknown => 2,
            ErrorKind::InvalidArgument => 3,
            ErrorKind::DeadlineExceeded => 4,
            ErrorKind::NotFound => 5,
            ErrorKind::AlreadyExists => 6,
            ErrorKind::PermissionDenied => 7,
            ErrorKind::ResourceExhausted => 8,
            ErrorKind::FailedPrecondition => 9,
            ErrorKind::Aborted => 10,
            ErrorKind::OutOfRange => 11,
            ErrorKind::Unimplemented => 12,
            ErrorKind::Internal => 13,
            ErrorKind::Unavailable => 14,
            ErrorKind::DataLoss => 15,
            ErrorKind::Unauthenticated => 16,
        };
        Code(n)
    }

    /// HTTP status for this kind
    ///
    /// Canceled uses 499 (client closed request).
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorKind::Ok => 200,
            ErrorKind::Canceled => 499,
            ErrorKind::Unknown => 500,
            ErrorKind::InvalidArgument => 400,
            ErrorKind::DeadlineExceeded => 504,
            ErrorKind::NotFound => 404,
            ErrorKind::AlreadyExists => 409,
            ErrorKind::PermissionDenied => 403,
            ErrorKind::ResourceExhausted => 429,
            ErrorKind::FailedPrecondition => 400,
            ErrorKind::Aborted => 409,
            ErrorKind::OutOfRange => 400,
            ErrorKind::Unimplemented => 501,
            ErrorKind::Internal => 500,
            ErrorKind::Unavailable => 503,
            ErrorKind::DataLoss => 500,
            ErrorKind::Unauthenticated => 401,
        }
    }

    /// Message used by an entry that wraps nothing
    pub const fn default_message(self) -> &'static str {
        match self {
            ErrorKind::Ok => "ok",
            ErrorKind::Canceled => "canceled",
            ErrorKind::Unknown => "unknown",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::DeadlineExceeded => "deadline exceeded",
            ErrorKind::NotFound => "not found",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::ResourceExhausted => "resource exhausted",
            ErrorKind::FailedPrecondition => "failed precondition",
            ErrorKind::Aborted => "aborted",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::Unimplemented => "unimplemented",
            ErrorKind::Internal => "internal",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::DataLoss => "data loss",
            ErrorKind::Unauthenticated => "unauthenticated",
        }
    }

    /// Reverse RPC table. OK and codes above 16 have no entry.
    pub const fn from_code(code: Code) -> Option<ErrorKind> {
        let kind = match code.0 {
            1 => ErrorKind::Canceled,
            2 => ErrorKind::Unknown,
            3 => ErrorKind::InvalidArgument,
            4 => ErrorKind::DeadlineExceeded,
            5 => ErrorKind::NotFound,
            6 => ErrorKind::AlreadyExists,
            7 => ErrorKind::PermissionDenied,
            8 => ErrorKind::ResourceExhausted,
            9 => ErrorKind::FailedPrecondition,
            10 => ErrorKind::Aborted,
            11 => ErrorKind::OutOfRange,
            12 => ErrorKind::Unimplemented,
            13 => ErrorKind::Internal,
            14 => ErrorKind::Unavailable,
            15 => ErrorKind::DataLoss,
            16 => ErrorKind::Unauthenticated,
            _ => return None,
        };
        Some(kind)
    }

    /// Reverse HTTP table. 200 and unlisted statuses have no entry.
    ///
    /// Shared statuses resolve to the most general kind:
    /// - 400 → InvalidArgument (over FailedPrecondition, OutOfRange)
    /// - 409 → AlreadyExists (over Aborted)
    /// - 500 → Internal (over Unknown, DataLoss)
    pub const fn from_http_status(status: u16) -> Option<ErrorKind> {
        let kind = match status {
            400 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthenticated,
            403 => ErrorKind::PermissionDenied,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::AlreadyExists,
            429 => ErrorKind::ResourceExhausted,
            499 => ErrorKind::Canceled,
            500 => ErrorKind::Internal,
            501 => ErrorKind::Unimplemented,
            503 => ErrorKind::Unavailable,
            504 => ErrorKind::DeadlineExceeded,
            _ => return None,
        };
        Some(kind)
    }

    /// Status falls in the 4xx range
    pub const fn is_client_error(self) -> bool {
        matches!(self.http_status(), 400..=499)
    }

    /// Status falls in the 5xx range
    pub const fn is_server_error(self) -> bool {
        matches!(self.http_status(), 500..=599)
    }

    /// Empty catalog entry of this kind
    pub fn error(self) -> SemanticError {
        SemanticError::new(self)
    }

    /// Catalog entry of this kind wrapping `err`
    pub fn wrap(self, err: impl Into<BoxError>) -> SemanticError {
        SemanticError::wrap(self, err)
    }

    /// Whether `err`, or anything in its source chain, is an entry of this kind.
    pub fn matches(self, err: &(dyn Error + 'static)) -> bool {
        crate::error::is_kind(err, self)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_message())
    }
}
