use std::path::Path;

use chrono::Utc;
use coursehub_core::{
    AssetStore, AssetStoreError, FileType, FileTypeError, ObjectStore, ObjectStoreError,
    ObjectUpload, ResourceType, StagedFile, UploadedAsset,
};

/// Error types specific to upload asset use case
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,
    #[error("{0}")]
    UnsupportedType(#[from] FileTypeError),
    #[error("Failed to read staged upload: {0}")]
    StagingError(String),
    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] ObjectStoreError),
    #[error("Asset store error: {0}")]
    AssetStoreError(#[from] AssetStoreError),
}

/// Upload asset use case - forwards a staged file to the object store and records it
pub struct UploadAssetUseCase<'a, O, A>
where
    O: ObjectStore,
    A: AssetStore,
{
    object_store: &'a O,
    asset_store: &'a A,
}

impl<'a, O, A> UploadAssetUseCase<'a, O, A>
where
    O: ObjectStore,
    A: AssetStore,
{
    pub fn new(object_store: &'a O, asset_store: &'a A) -> Self {
        Self {
            object_store,
            asset_store,
        }
    }

    /// Execute the upload pipeline
    ///
    /// 1. Classify the declared MIME type
    /// 2. Transfer the bytes under the matching resource type
    /// 3. Rewrite PDF URLs to force a download
    /// 4. Record `{url, publicId}` in the collection for the file type
    ///
    /// The staged file is removed once the remote transfer has completed, whatever
    /// its outcome; failing to remove it is only logged. When recording fails after
    /// a successful transfer the remote object is destroyed again on a best-effort basis.
    #[tracing::instrument(name = "UploadAssetUseCase::execute", skip(self))]
    pub async fn execute(&self, file: Option<StagedFile>) -> Result<UploadedAsset, UploadError> {
        let staged = file.ok_or(UploadError::NoFile)?;

        let file_type = match FileType::from_mime(&staged.content_type) {
            Ok(file_type) => file_type,
            Err(e) => {
                discard_staged_file(&staged.path).await;
                return Err(e.into());
            }
        };

        let bytes = match tokio::fs::read(&staged.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                discard_staged_file(&staged.path).await;
                return Err(UploadError::StagingError(e.to_string()));
            }
        };

        let resource_type = ResourceType::from(file_type);
        let transfer = self
            .object_store
            .put(ObjectUpload {
                file_name: staged.original_name.clone(),
                content_type: staged.content_type.clone(),
                bytes,
                resource_type,
            })
            .await;

        discard_staged_file(&staged.path).await;
        let stored = transfer?;

        let url = file_type.delivery_url(stored.url);
        let asset = UploadedAsset::new(file_type, url, stored.public_id.clone(), Utc::now());

        match self.asset_store.add_asset(asset).await {
            Ok(asset) => Ok(asset),
            Err(e) => {
                self.compensate(&stored.public_id, resource_type).await;
                Err(e.into())
            }
        }
    }

    async fn compensate(&self, public_id: &str, resource_type: ResourceType) {
        if let Err(e) = self.object_store.remove(public_id, resource_type).await {
            tracing::warn!(
                error = %e,
                public_id,
                "Failed to remove orphaned remote asset"
            );
        }
    }
}

async fn discard_staged_file(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(
            error = %e,
            path = %path.display(),
            "Failed to remove staged upload"
        );
    }
}
