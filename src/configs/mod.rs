use aws_config::{BehaviorVersion, Region};

use crate::{constants::Env, modules::video::S3VideoStore};

/// Build the S3 client from the default AWS credential chain and the configured
/// region. A custom endpoint (MinIO and friends) switches to path-style addressing.
pub async fn connect_storage(env: &Env) -> S3VideoStore {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(env.aws_region.clone()))
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &env.s3_endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    let client = aws_sdk_s3::Client::from_conf(builder.build());
    log::info!("S3 client ready for bucket {} in {}", env.s3_bucket, env.aws_region);
    S3VideoStore::new(client, env.s3_bucket.clone())
}
