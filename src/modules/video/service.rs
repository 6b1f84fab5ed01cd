use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::constants::{Env, VIDEO_PREFIX};
use crate::modules::video::{
    model::{NewObject, ObjectAcl, UploadedFile},
    repository::VideoStore,
    schema::{ObjectMeta, VideoRecord},
};

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Clone)]
pub struct VideoService {
    store: Arc<dyn VideoStore + Send + Sync>,
    env: Arc<Env>,
    clock: Clock,
}

impl VideoService {
    pub fn with_dependencies(store: Arc<dyn VideoStore + Send + Sync>, env: Arc<Env>) -> Self {
        info!("VideoService initialized with dependencies");
        Self::with_clock(store, env, Arc::new(Utc::now))
    }

    pub fn with_clock(store: Arc<dyn VideoStore + Send + Sync>, env: Arc<Env>, clock: Clock) -> Self {
        VideoService { store, env, clock }
    }

    /// `videos/<unix-millis>-<original-filename>`
    pub fn storage_key(&self, original_name: &str) -> String {
        let millis = (self.clock)().timestamp_millis();
        format!("{VIDEO_PREFIX}{millis}-{original_name}")
    }

    fn to_record(&self, meta: ObjectMeta) -> VideoRecord {
        VideoRecord {
            url: self.env.object_url(&meta.key),
            key: meta.key,
            size: meta.size,
            last_modified: meta.last_modified,
        }
    }

    pub async fn list_videos(&self) -> Result<Vec<VideoRecord>, error::SystemError> {
        let objects = self.store.list(VIDEO_PREFIX).await?;
        Ok(objects.into_iter().map(|meta| self.to_record(meta)).collect())
    }

    /// Store the file world-readable and return its key.
    pub async fn upload_video(&self, file: UploadedFile) -> Result<String, error::SystemError> {
        let key = self.storage_key(&file.original_name);
        let size = file.bytes.len();

        self.store
            .put(NewObject {
                key: key.clone(),
                body: file.bytes,
                content_type: file.mime_type,
                acl: ObjectAcl::PublicRead,
            })
            .await?;

        info!("Uploaded video {} ({} bytes)", key, size);
        Ok(key)
    }
}
