use actix_web::{get, post, web};

use crate::api::{error, success};
use crate::constants::SERVICE_NAME;
use crate::modules::video::{service::VideoService, view};
use crate::utils::SingleFile;

#[get("/")]
pub async fn home() -> success::Success {
    success::Success::html(view::index(SERVICE_NAME))
}

#[get("/videos")]
pub async fn list_videos(
    video_service: web::Data<VideoService>,
) -> Result<success::Success, error::Error> {
    let videos = video_service.list_videos().await.map_err(|e| {
        log::error!("Error fetching videos: {e}");
        error::Error::internal("Error fetching videos")
    })?;
    Ok(success::Success::html(view::videos(&videos)))
}

#[post("/upload")]
pub async fn upload_video(
    video_service: web::Data<VideoService>,
    upload: SingleFile,
) -> Result<success::Success, error::Error> {
    let Some(file) = upload.0 else {
        return Err(error::Error::bad_request("No file uploaded"));
    };

    video_service.upload_video(file).await.map_err(|e| {
        log::error!("Upload error: {e}");
        error::Error::internal("Upload failed")
    })?;
    Ok(success::Success::redirect("/videos"))
}
