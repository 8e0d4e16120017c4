//! JSON body extractor with the application's error contract.
//!
//! axum's own `Json` rejects malformed or mistyped bodies with 422 and a plain text
//! message. `ApiJson` routes the rejection through `AppError`, so clients get a 400
//! with the usual `{ "error": ... }` body.

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
