use actix_multipart::{Field, Multipart};
use actix_web::{
    web::{self, BytesMut},
    FromRequest,
};
use futures_util::{future::LocalBoxFuture, TryStreamExt};

use crate::{
    api::error,
    modules::video::model::{UploadConfig, UploadedFile},
};

/// Single file sent under the configured form field, or `None` when the request
/// carries no such file (or more than one). Files over the size limit are
/// rejected here, before the handler runs.
pub struct SingleFile(pub Option<UploadedFile>);

impl FromRequest for SingleFile {
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let config = req
            .app_data::<web::Data<UploadConfig>>()
            .map(|c| c.get_ref().clone())
            .unwrap_or_default();
        let fut = Multipart::from_request(req, payload);

        Box::pin(async move {
            let multipart = fut.await.map_err(|e| error::Error::bad_request(e.to_string()))?;
            read_single_file(multipart, &config).await.map(SingleFile)
        })
    }
}

async fn read_single_file(
    mut multipart: Multipart,
    config: &UploadConfig,
) -> Result<Option<UploadedFile>, error::Error> {
    let mut file = None;
    let mut file_count = 0usize;

    loop {
        let field = match multipart.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // Not multipart, or a malformed body: nothing usable was sent.
            Err(e) => {
                log::debug!("Multipart body rejected: {e}");
                return Ok(None);
            }
        };

        let Some(filename) = file_name(&field, &config.field_name) else {
            continue;
        };

        file_count += 1;
        // A second file already makes the upload unusable, so it is not buffered.
        if file_count > 1 {
            file = None;
            continue;
        }

        let mime_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| mime_guess::from_path(&filename).first_or_octet_stream().to_string());
        let bytes = read_limited(field, config.max_file_size).await?;
        file = Some(UploadedFile { original_name: filename, mime_type, bytes: bytes.freeze() });
    }

    if file_count > 1 {
        log::debug!("Upload carried {file_count} files under '{}'", config.field_name);
        return Ok(None);
    }
    Ok(file)
}

/// Filename of a file part sent under `field_name`; plain form values have none.
fn file_name(field: &Field, field_name: &str) -> Option<String> {
    let disposition = field.content_disposition()?;
    if disposition.get_name() != Some(field_name) {
        return None;
    }
    disposition.get_filename().filter(|name| !name.is_empty()).map(str::to_string)
}

async fn read_limited(mut field: Field, limit: usize) -> Result<BytesMut, error::Error> {
    let mut bytes = BytesMut::new();
    while let Some(chunk) =
        field.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
    {
        if bytes.len() + chunk.len() > limit {
            return Err(error::Error::payload_too_large("File too large"));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
