use axum::{
    Json,
    extract::{
        State,
        multipart::{Field, Multipart, MultipartRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use coursehub_application::UploadAssetUseCase;
use coursehub_core::{AssetStore, FileType, ObjectStore, StagedFile};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::UploadState, views::AssetView};

pub async fn upload_image<O, A>(
    State(state): State<UploadState<O, A>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    upload(state, FileType::Image, multipart?).await
}

pub async fn upload_video<O, A>(
    State(state): State<UploadState<O, A>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    upload(state, FileType::Video, multipart?).await
}

pub async fn upload_pdf<O, A>(
    State(state): State<UploadState<O, A>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    upload(state, FileType::Pdf, multipart?).await
}

#[tracing::instrument(name = "Upload file", skip(state, multipart))]
async fn upload<O, A>(
    state: UploadState<O, A>,
    field_name: FileType,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    let staged = receive_file(&state, field_name, multipart).await?;

    let asset = UploadAssetUseCase::new(&state.object_store, &state.asset_store)
        .execute(staged)
        .await?;

    let response = Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        file: AssetView::from(asset),
    });

    Ok((StatusCode::CREATED, response))
}

/// Accept exactly one file under `field_name` and stage it to disk. Text fields are
/// ignored; files under any other name, or a second file, are rejected.
async fn receive_file<O, A>(
    state: &UploadState<O, A>,
    field_name: FileType,
    mut multipart: Multipart,
) -> Result<Option<StagedFile>, ApiError>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    let mut staged: Option<StagedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_none() {
            continue;
        }

        let result = if field.name() != Some(field_name.as_str()) || staged.is_some() {
            Err(ApiError::UnexpectedField)
        } else {
            stage_field(state, field).await
        };

        match result {
            Ok(file) => staged = Some(file),
            Err(e) => {
                if let Some(file) = staged.take() {
                    discard(&file).await;
                }
                return Err(e);
            }
        }
    }

    Ok(staged)
}

async fn stage_field<O, A>(
    state: &UploadState<O, A>,
    mut field: Field<'_>,
) -> Result<StagedFile, ApiError>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    let content_type = field.content_type().unwrap_or_default().to_owned();
    let original_name = field.file_name().unwrap_or_default().to_owned();

    // Reject unsupported types before anything touches the disk
    FileType::from_mime(&content_type)?;

    let mut bytes = Vec::new();
    while let Some(chunk) = field.chunk().await? {
        if (bytes.len() + chunk.len()) as u64 > state.max_upload_bytes {
            return Err(ApiError::FileTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    state
        .staging
        .stage(&original_name, &content_type, &bytes)
        .await
        .map_err(|e| ApiError::UnexpectedError(e.to_string()))
}

async fn discard(file: &StagedFile) {
    if let Err(e) = tokio::fs::remove_file(&file.path).await {
        tracing::warn!(error = %e, path = %file.path.display(), "Failed to remove staged upload");
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: AssetView,
}
