use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use crate::{
    configs::connect_storage,
    constants::Env,
    modules::video::{model::UploadConfig, VideoService},
};

mod api;
mod configs;
mod constants;
mod modules;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let env = Env::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    log::info!("Environment variables loaded");

    let store = connect_storage(&env).await;
    let env = Arc::new(env);

    let video_service = VideoService::with_dependencies(Arc::new(store), env.clone());
    let upload_config = UploadConfig { max_file_size: env.max_upload_size, ..Default::default() };

    log::info!("{} running on http://{}:{}", constants::SERVICE_NAME, env.ip, env.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(video_service.clone()))
            .app_data(web::Data::new(upload_config.clone()))
            .configure(modules::video::route::configure)
            .configure(modules::monitor::route::configure)
    })
    .bind((env.ip.as_str(), env.port))?
    .workers(env.workers)
    .run()
    .await
}
