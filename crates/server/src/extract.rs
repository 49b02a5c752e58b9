//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ServerError;

/// `axum::Json` whose rejections (missing content type, bad syntax, wrong
/// field types) surface as [`ServerError::BadRequest`] with the JSON error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
