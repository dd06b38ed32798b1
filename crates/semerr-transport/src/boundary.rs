//! Classifying errors as they cross a transport boundary
//!
//! Outgoing errors become a tonic `Status` or an HTTP status plus body;
//! incoming ones are turned back into catalog entries before they reach
//! application code.

use std::error::Error;

use http::StatusCode;
use semerr::{classify, classify_http, find, BoxError, Code, ErrorKind, StringError};

use crate::config::BoundaryConfig;

/// Convert a semerr code into tonic's enum. Out-of-range codes become `Unknown`.
pub fn code_to_tonic(code: Code) -> tonic::Code {
    match i32::try_from(code.as_u32()) {
        Ok(n) => tonic::Code::from(n),
        Err(_) => tonic::Code::Unknown,
    }
}

pub fn code_from_tonic(code: tonic::Code) -> Code {
    Code(code as i32 as u32)
}

pub fn status_code(kind: ErrorKind) -> StatusCode {
    StatusCode::from_u16(kind.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[derive(Debug, Clone, Default)]
pub struct Boundary {
    config: BoundaryConfig,
}

impl Boundary {
    pub fn new(config: BoundaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Kind and outgoing message for `err`. Unclassified errors report Unknown.
    fn outgoing(&self, err: &(dyn Error + 'static)) -> (ErrorKind, String) {
        match find(err) {
            Some(entry) => {
                tracing::debug!(kind = ?entry.kind(), code = %entry.code(), "classified error leaving service");
                (entry.kind(), err.to_string())
            }
            None => {
                if self.config.log_unclassified {
                    tracing::warn!(error = %err, "unclassified error leaving service");
                }
                let message = if self.config.redact_unclassified {
                    self.config.unclassified_message.clone()
                } else {
                    err.to_string()
                };
                (ErrorKind::Unknown, message)
            }
        }
    }

    pub fn to_status(&self, err: &(dyn Error + 'static)) -> tonic::Status {
        let (kind, message) = self.outgoing(err);
        tonic::Status::new(code_to_tonic(kind.code()), message)
    }

    /// Classify a received status. An OK status is unmapped, so only the message comes back.
    pub fn from_status(&self, status: &tonic::Status) -> BoxError {
        let code = code_from_tonic(status.code());
        tracing::debug!(%code, "classifying received rpc status");
        classify(code, Box::new(StringError::new(status.message().to_owned())))
    }

    pub fn to_response(&self, err: &(dyn Error + 'static)) -> (StatusCode, String) {
        let (kind, message) = self.outgoing(err);
        (status_code(kind), message)
    }

    pub fn from_response(&self, status: StatusCode, body: impl Into<String>) -> BoxError {
        tracing::debug!(status = status.as_u16(), "classifying received http status");
        classify_http(status.as_u16(), Box::new(StringError::new(body.into())))
    }
}
