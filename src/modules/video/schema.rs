use chrono::{DateTime, Utc};

/// Listing entry as returned by the object store
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMeta {
    pub key: String,
    pub size: i64,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Display form of a stored video
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub key: String,
    pub url: String,
    pub size: i64,
    pub last_modified: Option<DateTime<Utc>>,
}
