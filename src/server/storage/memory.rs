use std::{collections::HashMap, sync::Mutex};

use crate::server::{
    error::AppError,
    storage::{ImageKind, ImageStore, ImageUpload},
};

const BASE_URL: &str = "memory://images";

/// In-memory image store keyed by public URL.
#[derive(Default)]
pub struct MemoryImageStore {
    objects: Mutex<HashMap<String, ImageUpload>>,
}

impl MemoryImageStore {
    pub fn urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        urls.sort();
        urls
    }
}

fn folder(kind: ImageKind) -> &'static str {
    match kind {
        ImageKind::Avatar => "avatars",
        ImageKind::WorkspaceFavicon => "favicons",
    }
}

impl ImageStore for MemoryImageStore {
    async fn upload(
        &self,
        kind: ImageKind,
        key: &str,
        image: &ImageUpload,
    ) -> Result<String, AppError> {
        let url = format!("{}/{}/{}", BASE_URL, folder(kind), key);
        self.objects
            .lock()
            .unwrap()
            .insert(url.clone(), image.clone());

        Ok(url)
    }

    async fn remove(&self, _kind: ImageKind, url: &str) -> Result<(), AppError> {
        self.objects.lock().unwrap().remove(url);

        Ok(())
    }
}
