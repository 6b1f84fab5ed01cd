use crate::modules::video::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(home).service(list_videos).service(upload_video);
}
