use crate::api::error;

pub const SERVICE_NAME: &str = "Educational Video Platform";
pub const VIDEO_PREFIX: &str = "videos/";
pub const UPLOAD_FIELD: &str = "video";
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 100 * 1024 * 1024; // 100MiB

#[derive(Debug, Clone)]
pub struct Env {
    pub ip: String,
    pub port: u16,
    pub workers: usize,
    pub aws_region: String,
    pub s3_bucket: String,
    pub s3_endpoint: Option<String>,
    pub max_upload_size: usize,
}

impl Env {
    pub fn load() -> Result<Self, error::SystemError> {
        let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 3000u16)?;
        let workers = parse_var("WORKERS", 2usize)?;
        if workers == 0 {
            return Err(error::SystemError::config("WORKERS must be at least 1"));
        }

        let aws_region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let s3_bucket = std::env::var("S3_BUCKET").ok().filter(|b| !b.is_empty()).ok_or_else(|| {
            error::SystemError::config("S3_BUCKET must be set in .env file or environment variable")
        })?;
        let s3_endpoint = std::env::var("S3_ENDPOINT").ok().filter(|e| !e.is_empty());

        let max_upload_size = parse_var("MAX_UPLOAD_SIZE", DEFAULT_MAX_UPLOAD_SIZE)?;

        Ok(Env { ip, port, workers, aws_region, s3_bucket, s3_endpoint, max_upload_size })
    }

    /// Public URL of an object, derived from bucket, region and key only.
    pub fn object_url(&self, key: &str) -> String {
        match &self.s3_endpoint {
            Some(endpoint) => {
                format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.s3_bucket, key)
            }
            None => format!("https://{}.s3.{}.amazonaws.com/{}", self.s3_bucket, self.aws_region, key),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, error::SystemError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| {
                error::SystemError::config(format!("{name} must be a valid number, got '{raw}'"))
            }),
        Err(_) => Ok(default),
    }
}
