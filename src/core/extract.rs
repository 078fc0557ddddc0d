//! Extractors - Json e Path con errori restituiti come AppError
//!
//! Le rejection di axum sono testo semplice; questi wrapper le convertono nel corpo JSON
//! `{ "error": ..., "details": ... }` usato da tutti gli altri errori.

use super::AppError;
use axum_macros::{FromRequest, FromRequestParts};

/// JSON body extractor that rejects with a 400 `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor that rejects with a 400 `AppError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
