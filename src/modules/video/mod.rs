pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_s3;
pub mod route;
pub mod schema;
pub mod service;
pub mod view;

pub use repository_s3::S3VideoStore;
pub use service::VideoService;
