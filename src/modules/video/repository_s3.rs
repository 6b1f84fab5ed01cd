use aws_sdk_s3::{
    primitives::ByteStream,
    types::{Object, ObjectCannedAcl},
    Client,
};
use chrono::{DateTime, Utc};

use crate::{
    api::error,
    modules::video::{
        model::{NewObject, ObjectAcl},
        repository::VideoStore,
        schema::ObjectMeta,
    },
};

#[derive(Clone)]
pub struct S3VideoStore {
    client: Client,
    bucket: String,
}

impl S3VideoStore {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

fn to_object_meta(obj: &Object) -> Option<ObjectMeta> {
    let key = obj.key()?.to_string();
    let last_modified =
        obj.last_modified().and_then(|lm| DateTime::<Utc>::from_timestamp(lm.secs(), lm.subsec_nanos()));
    Some(ObjectMeta { key, size: obj.size().unwrap_or_default(), last_modified })
}

impl From<ObjectAcl> for ObjectCannedAcl {
    fn from(acl: ObjectAcl) -> Self {
        match acl {
            ObjectAcl::PublicRead => ObjectCannedAcl::PublicRead,
        }
    }
}

#[async_trait::async_trait]
impl VideoStore for S3VideoStore {
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectMeta>, error::SystemError> {
        let mut objects = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let resp = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix)
                .set_continuation_token(continuation_token.take())
                .send()
                .await?;

            objects.extend(resp.contents().iter().filter_map(to_object_meta));

            match resp.next_continuation_token() {
                Some(token) if resp.is_truncated().unwrap_or(false) => {
                    continuation_token = Some(token.to_string());
                }
                _ => break,
            }
        }

        log::debug!("Listed {} objects under s3://{}/{}", objects.len(), self.bucket, prefix);
        Ok(objects)
    }

    async fn put(&self, object: NewObject) -> Result<(), error::SystemError> {
        let size = object.body.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object.key)
            .body(ByteStream::from(object.body))
            .content_type(object.content_type)
            .acl(object.acl.into())
            .send()
            .await?;

        log::info!("Stored s3://{}/{} ({} bytes)", self.bucket, object.key, size);
        Ok(())
    }
}
