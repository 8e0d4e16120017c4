use dioxus_logger::tracing;
use s3::{bucket::Bucket, creds::Credentials, region::Region, BucketConfiguration};

use crate::server::{
    error::AppError,
    storage::{ImageKind, ImageStore, ImageUpload},
};

/// Image store on an S3 compatible service such as MinIO.
///
/// Buckets are addressed path style and are created on first upload. Public URLs have
/// the form `{public_url}/{bucket}/{key}`.
#[derive(Clone)]
pub struct S3ImageStore {
    region: Region,
    credentials: Credentials,
    public_url: String,
    avatar_bucket: String,
    favicon_bucket: String,
}

impl S3ImageStore {
    pub fn new(
        region: Region,
        credentials: Credentials,
        public_url: &str,
        avatar_bucket: String,
        favicon_bucket: String,
    ) -> Self {
        Self {
            region,
            credentials,
            public_url: public_url.trim_end_matches('/').to_string(),
            avatar_bucket,
            favicon_bucket,
        }
    }

    fn bucket_name(&self, kind: ImageKind) -> &str {
        match kind {
            ImageKind::Avatar => &self.avatar_bucket,
            ImageKind::WorkspaceFavicon => &self.favicon_bucket,
        }
    }

    fn bucket(&self, kind: ImageKind) -> Result<Box<Bucket>, AppError> {
        let bucket = Bucket::new(
            self.bucket_name(kind),
            self.region.clone(),
            self.credentials.clone(),
        )?;

        Ok(bucket.with_path_style())
    }

    /// Opens the bucket of `kind`, creating it when it does not exist yet.
    async fn open_bucket(&self, kind: ImageKind) -> Result<Box<Bucket>, AppError> {
        let bucket = self.bucket(kind)?;

        if !bucket.exists().await? {
            let name = self.bucket_name(kind);
            Bucket::create_with_path_style(
                name,
                self.region.clone(),
                self.credentials.clone(),
                BucketConfiguration::default(),
            )
            .await?;
            tracing::info!("Created bucket {}", name);
        }

        Ok(bucket)
    }

    fn public_url(&self, kind: ImageKind, key: &str) -> String {
        format!("{}/{}/{}", self.public_url, self.bucket_name(kind), key)
    }

    /// Object key behind a URL handed out by this store.
    fn key_of<'u>(&self, kind: ImageKind, url: &'u str) -> Option<&'u str> {
        url.strip_prefix(self.public_url.as_str())?
            .strip_prefix('/')?
            .strip_prefix(self.bucket_name(kind))?
            .strip_prefix('/')
            .filter(|key| !key.is_empty())
    }
}

impl ImageStore for S3ImageStore {
    async fn upload(
        &self,
        kind: ImageKind,
        key: &str,
        image: &ImageUpload,
    ) -> Result<String, AppError> {
        let bucket = self.open_bucket(kind).await?;

        bucket
            .put_object_with_content_type(key, image.bytes(), image.content_type())
            .await?;

        tracing::debug!("Stored {} ({} bytes)", key, image.bytes().len());

        Ok(self.public_url(kind, key))
    }

    async fn remove(&self, kind: ImageKind, url: &str) -> Result<(), AppError> {
        let Some(key) = self.key_of(kind, url) else {
            return Ok(());
        };

        self.bucket(kind)?.delete_object(key).await?;

        Ok(())
    }
}
