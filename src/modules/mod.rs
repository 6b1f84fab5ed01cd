pub mod monitor;
pub mod video;
