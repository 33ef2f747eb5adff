//! Multipart upload interception stage.
//!
//! Accepted images are streamed to the [`UploadStorage`] directory before any
//! handler runs; handlers only see the resulting [`UploadedFile`].

use std::path::Path;

use axum::{
    body::Body,
    extract::{multipart::Field, FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
};
use tokio::io::AsyncWriteExt;

use crate::{
    error::Error,
    model::{
        request::FormFields,
        upload::{
            UploadClaim, UploadDescriptor, UploadStorage, UploadedFile, UPLOAD_FIELD_NAME,
        },
    },
};

/// Intercepts `multipart/form-data` bodies.
///
/// Text parts are appended to the request's [`FormFields`]. The first file sent
/// under [`UPLOAD_FIELD_NAME`] with an accepted image mime type is written to
/// the upload directory under a random name. Files with any other mime type,
/// under any other field name, or after the first accepted one are skipped
/// without failing the request.
///
/// Every request leaves this stage with an [`UploadedFile`] and an
/// [`UploadClaim`] extension. A stored file no handler claimed is removed once
/// the response has been produced.
pub async fn intercept_upload(
    State(storage): State<UploadStorage>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    if !is_multipart(&request) {
        let mut request = request;
        request.extensions_mut().insert(UploadedFile::default());
        request.extensions_mut().insert(UploadClaim::default());

        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let mut fields = parts
        .extensions
        .get::<FormFields>()
        .cloned()
        .unwrap_or_default();

    let mut multipart = Multipart::from_request(Request::from_parts(parts.clone(), body), &()).await?;
    let mut uploaded: Option<UploadDescriptor> = None;

    if let Err(e) = read_fields(&storage, &mut multipart, &mut fields, &mut uploaded).await {
        if let Some(upload) = uploaded {
            remove_upload(&upload).await;
        }

        return Err(e);
    }

    let claim = UploadClaim::default();
    let mut request = Request::from_parts(parts, Body::empty());
    request.extensions_mut().insert(fields);
    request.extensions_mut().insert(UploadedFile(uploaded.clone()));
    request.extensions_mut().insert(claim.clone());

    let response = next.run(request).await;

    if let Some(upload) = uploaded {
        if !claim.is_claimed() {
            tracing::debug!(
                "Removing upload {:?}, no handler kept it",
                upload.storage_name
            );
            remove_upload(&upload).await;
        }
    }

    Ok(response)
}

async fn read_fields(
    storage: &UploadStorage,
    multipart: &mut Multipart,
    fields: &mut FormFields,
    uploaded: &mut Option<UploadDescriptor>,
) -> Result<(), Error> {
    while let Some(mut field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        let Some(original_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            fields.push(name, value);

            continue;
        };

        if name != UPLOAD_FIELD_NAME {
            tracing::debug!("Skipping file {:?} sent under field {:?}", original_name, name);

            continue;
        }

        if uploaded.is_some() {
            tracing::debug!("Skipping additional file {:?}", original_name);

            continue;
        }

        let sent_type = field.content_type().unwrap_or_default().to_string();
        let (Some(mime_type), Some(storage_name)) = (
            UploadStorage::canonical_type(&sent_type),
            UploadStorage::storage_name_for(&sent_type),
        ) else {
            tracing::debug!(
                "Rejected upload {:?} with mime type {:?}",
                original_name,
                sent_type
            );

            continue;
        };

        let path = storage.path_for(&storage_name);
        if let Err(e) = write_field(&mut field, &path).await {
            // Don't leave a truncated file behind
            let _ = tokio::fs::remove_file(&path).await;

            return Err(e);
        }

        tracing::debug!("Stored upload {:?} as {:?}", original_name, storage_name);

        *uploaded = Some(UploadDescriptor {
            original_name,
            storage_name,
            mime_type: mime_type.to_string(),
            path,
        });
    }

    Ok(())
}

async fn remove_upload(upload: &UploadDescriptor) {
    if let Err(e) = tokio::fs::remove_file(&upload.path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove upload {:?}: {}", upload.path, e);
        }
    }
}

async fn write_field(field: &mut Field<'_>, path: &Path) -> Result<(), Error> {
    let mut file = tokio::fs::File::create(path).await?;

    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    Ok(())
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}
