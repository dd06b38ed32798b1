//! axum integration
use axum::response::{IntoResponse, Response};
use semerr::BoxError;

use crate::boundary::Boundary;

/// Handler error that renders through the default [`Boundary`].
///
/// Anything convertible into a boxed error can be `?`-ed into it.
#[derive(Debug)]
pub struct ApiError(BoxError);

impl ApiError {
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<BoxError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Boundary::default().to_response(&*self.0).into_response()
    }
}
