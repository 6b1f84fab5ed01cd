use crate::{
    api::error,
    modules::video::{model::NewObject, schema::ObjectMeta},
};

#[async_trait::async_trait]
pub trait VideoStore {
    /// Every object whose key starts with `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectMeta>, error::SystemError>;

    async fn put(&self, object: NewObject) -> Result<(), error::SystemError>;
}
