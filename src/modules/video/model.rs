use actix_web::web::Bytes;

/// A file pulled out of an upload request, held in memory until it is stored.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

/// Canned access policy applied to a stored object. Videos are only ever
/// published world-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAcl {
    PublicRead,
}

/// Object to write into the store
#[derive(Debug, Clone)]
pub struct NewObject {
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    pub acl: ObjectAcl,
}

/// Upload ingestion limits
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub field_name: String,
    pub max_file_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            field_name: crate::constants::UPLOAD_FIELD.to_string(),
            max_file_size: crate::constants::DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}
