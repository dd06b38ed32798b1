//! Integration tests for the semerr catalog and converter.
//!
//! These exercise the public surface the way a service would: build an
//! entry deep inside application code, bury it under foreign wrappers, and
//! classify it again at the boundary.

use anyhow::Context as _;
use semerr::{
    code_of, find, from_code, from_http_status, http_status_of, is_kind, BoxError, Code,
    ErrorKind, Semantic, SemanticError, StringError,
};

fn dyn_error(err: &anyhow::Error) -> &(dyn std::error::Error + 'static) {
    err.as_ref()
}

fn user_not_found() -> BoxError {
    Box::new(StringError::new("user not found"))
}

// =============================================================================
// Catalog Scenarios
// =============================================================================

#[test]
fn test_annotate_existing_error() {
    let err = SemanticError::wrap(ErrorKind::NotFound, StringError::new("user not found"));

    assert_eq!(err.to_string(), "user not found");
    assert_eq!(code_of(Some(&err)), (Code(5), true));
    assert_eq!(http_status_of(Some(&err)), (404, true));
}

#[test]
fn test_standalone_entry() {
    let err = SemanticError::new(ErrorKind::NotFound);

    assert_eq!(err.message(), "not found");
    assert_eq!(err.code(), Code(5));
    assert_eq!(err.http_status(), 404);
}

#[test]
fn test_every_kind_standalone_and_wrapped() {
    for kind in ErrorKind::ALL {
        for err in [SemanticError::new(kind), SemanticError::wrap(kind, user_not_found())] {
            assert_eq!(code_of(Some(&err)), (kind.code(), true), "{:?}", kind);
            assert_eq!(http_status_of(Some(&err)), (kind.http_status(), true), "{:?}", kind);
        }
    }
}

// =============================================================================
// Foreign Wrap Chains
// =============================================================================

#[test]
fn test_anyhow_context_layers() {
    let result: anyhow::Result<()> = Err(ErrorKind::NotFound.wrap(user_not_found()))
        .context("loading profile")
        .context("rendering page")
        .context("GET /users/10");
    let err = result.unwrap_err();

    assert_eq!(err.to_string(), "GET /users/10");
    assert!(is_kind(dyn_error(&err), ErrorKind::NotFound));
    assert_eq!(code_of(Some(dyn_error(&err))), (Code(5), true));
    assert_eq!(http_status_of(Some(dyn_error(&err))), (404, true));
    assert_eq!(find(dyn_error(&err)).unwrap().to_string(), "user not found");
}

#[test]
fn test_anyhow_without_entry_is_unclassified() {
    let err = anyhow::anyhow!("disk on fire").context("saving");

    assert_eq!(code_of(Some(dyn_error(&err))), (Code(2), false));
    assert_eq!(http_status_of(Some(dyn_error(&err))), (500, false));
}

#[derive(Debug, thiserror::Error)]
#[error("user {id} not found")]
struct UserNotFound {
    id: u64,
    #[source]
    inner: SemanticError,
}

impl Semantic for UserNotFound {
    fn kind(&self) -> ErrorKind {
        self.inner.kind()
    }
}

#[test]
fn test_composed_entry() {
    let err = UserNotFound {
        id: 10,
        inner: ErrorKind::NotFound.wrap("user 10 not found"),
    };

    assert_eq!(Semantic::code(&err), Code(5));
    assert_eq!(Semantic::http_status(&err), 404);
    assert_eq!(err.to_string(), "user 10 not found");

    let found = find(&err).expect("composed entry is reachable");
    assert_eq!(found.kind(), ErrorKind::NotFound);
    assert_eq!(code_of(Some(&err)), (Code(5), true));
}

// =============================================================================
// Boundary Conversions
// =============================================================================

#[test]
fn test_from_rpc_code() {
    let err = from_code(Code(5), Some(user_not_found())).unwrap();

    assert!(is_kind(&*err, ErrorKind::NotFound));
    assert_eq!(err.to_string(), "user not found");
}

#[test]
fn test_from_http_status() {
    let err = from_http_status(404, Some(user_not_found())).unwrap();

    assert!(is_kind(&*err, ErrorKind::NotFound));
    assert_eq!(err.to_string(), "user not found");
}

#[test]
fn test_http_collisions_pick_canonical_kind() {
    let cases = [
        (400, ErrorKind::InvalidArgument),
        (409, ErrorKind::AlreadyExists),
        (500, ErrorKind::Internal),
        (499, ErrorKind::Canceled),
    ];
    for (status, kind) in cases {
        let err = from_http_status(status, None).unwrap();
        assert!(is_kind(&*err, kind), "status {}", status);
    }
}

#[test]
fn test_unmapped_inputs_pass_through() {
    assert!(from_code(Code(0), None).is_none());
    assert!(from_code(Code(999), None).is_none());
    assert!(from_http_status(200, None).is_none());
    assert!(from_http_status(999, None).is_none());

    let err = from_http_status(418, Some(user_not_found())).unwrap();
    assert!(find(&*err).is_none());
    assert_eq!(err.to_string(), "user not found");
    assert!(err.downcast_ref::<StringError>().is_some());
}

#[test]
fn test_received_error_keeps_original_reachable() {
    let err = from_code(Code(13), Some(user_not_found())).unwrap();
    let entry = err.downcast_ref::<SemanticError>().unwrap();

    let inner = entry.unwrap_inner().unwrap();
    assert_eq!(inner.downcast_ref::<StringError>().unwrap().as_str(), "user not found");
}
