use coursehub_core::{AssetStore, AssetStoreError, FileType, UploadedAsset};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresAssetStore {
    pool: PgPool,
}

impl PostgresAssetStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAssetStore { pool }
    }
}

fn table_for(file_type: FileType) -> &'static str {
    match file_type {
        FileType::Image => "images",
        FileType::Video => "videos",
        FileType::Pdf => "pdfs",
    }
}

#[async_trait::async_trait]
impl AssetStore for PostgresAssetStore {
    #[tracing::instrument(name = "Recording uploaded asset in PostgreSQL", skip_all, fields(file_type = %asset.file_type))]
    async fn add_asset(&self, asset: UploadedAsset) -> Result<UploadedAsset, AssetStoreError> {
        let statement = format!(
            "INSERT INTO {} (id, url, public_id, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)",
            table_for(asset.file_type)
        );

        sqlx::query(&statement)
            .bind(asset.id)
            .bind(&asset.url)
            .bind(&asset.public_id)
            .bind(asset.created_at)
            .bind(asset.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AssetStoreError::UnexpectedError(e.to_string()))?;

        Ok(asset)
    }
}
