//! Request extractors with JSON error bodies
//!
//! Axum's own `Json` and `Path` rejections answer 422/400 with plain text;
//! these wrappers turn every rejection into an [`ApiError::Validation`].

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor rejecting with `ApiError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor rejecting with `ApiError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
