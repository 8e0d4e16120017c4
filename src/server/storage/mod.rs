//! Image storage for avatars and workspace favicons.
//!
//! `ImageStore` is the seam between the upload services and the object store. The
//! server runs with `bucket::S3ImageStore`; tests use an in-memory store.

pub mod bucket;

#[cfg(test)]
pub mod memory;

use std::future::Future;

use crate::server::error::AppError;

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Accepted content types and the file extension stored with them.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/x-icon", "ico"),
    ("image/vnd.microsoft.icon", "ico"),
];

/// What an image is used for. Each kind lives in its own bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Avatar,
    WorkspaceFavicon,
}

/// An uploaded image whose type and size were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    content_type: String,
    extension: &'static str,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// # Returns
    /// - `Ok(ImageUpload)` - Non-empty image of an accepted type
    /// - `Err(AppError::BadRequest)` - Empty, too large or not an accepted image type
    pub fn new(content_type: &str, bytes: Vec<u8>) -> Result<Self, AppError> {
        let content_type = content_type.trim().to_ascii_lowercase();
        let Some(&(_, extension)) = IMAGE_TYPES.iter().find(|(t, _)| *t == content_type) else {
            return Err(AppError::BadRequest(format!(
                "Unsupported image type '{}'",
                content_type
            )));
        };

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Image is empty".to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::BadRequest(format!(
                "Image exceeds {} bytes",
                MAX_IMAGE_BYTES
            )));
        }

        Ok(Self {
            content_type,
            extension,
            bytes,
        })
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Unique object key for an image owned by `owner`, such as `user-4`.
    pub fn object_key(&self, owner: &str) -> String {
        format!("{:032x}-{}.{}", rand::random::<u128>(), owner, self.extension)
    }
}

/// Object store holding uploaded images.
pub trait ImageStore {
    /// Stores `image` under `key` and returns its public URL.
    fn upload(
        &self,
        kind: ImageKind,
        key: &str,
        image: &ImageUpload,
    ) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Deletes the object behind `url`. URLs this store did not hand out are ignored.
    fn remove(
        &self,
        kind: ImageKind,
        url: &str,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}
