//! Semerr Transport: boundary adapters for tonic and axum
//!
//! Outgoing errors are classified with [`semerr::find`] and rendered as a
//! tonic `Status` or an HTTP response. Incoming statuses are classified
//! back into catalog entries.
//!
//! ```
//! use semerr::{is_kind, ErrorKind};
//! use semerr_transport::Boundary;
//!
//! let boundary = Boundary::default();
//!
//! let status = boundary.to_status(&ErrorKind::NotFound.wrap("user not found"));
//! assert_eq!(status.code(), tonic::Code::NotFound);
//!
//! let err = boundary.from_status(&status);
//! assert!(is_kind(&*err, ErrorKind::NotFound));
//! ```

pub mod boundary;
pub mod config;
pub mod response;

pub use boundary::{code_from_tonic, code_to_tonic, status_code, Boundary};
pub use config::{BoundaryConfig, ConfigError};
pub use response::ApiError;
