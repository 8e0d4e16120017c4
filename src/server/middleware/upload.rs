//! Multipart image extractor.

use axum::extract::{
    multipart::{MultipartError, MultipartRejection},
    FromRequest, Multipart, Request,
};

use crate::server::{error::AppError, storage::ImageUpload};

/// Name of the form field carrying the image.
pub const IMAGE_FIELD: &str = "file";

/// Image read from the `file` field of a `multipart/form-data` body.
///
/// Other fields are skipped. A missing field, a missing content type or a file that
/// `ImageUpload::new` refuses is a 400.
pub struct ImageFile(pub ImageUpload);

impl<S> FromRequest<S> for ImageFile
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await?;

        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }

            let content_type = field
                .content_type()
                .map(str::to_string)
                .ok_or_else(|| AppError::BadRequest("Image has no content type".to_string()))?;
            let bytes = field.bytes().await?;

            return Ok(Self(ImageUpload::new(&content_type, bytes.to_vec())?));
        }

        Err(AppError::BadRequest(format!(
            "Missing multipart field '{}'",
            IMAGE_FIELD
        )))
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
