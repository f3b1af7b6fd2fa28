use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use coursehub_core::{AssetStore, AssetStoreError, FileType, UploadedAsset};

/// One in-memory collection per file type.
#[derive(Default, Clone)]
pub struct HashMapAssetStore {
    assets: Arc<RwLock<HashMap<FileType, Vec<UploadedAsset>>>>,
}

impl HashMapAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn assets_of(&self, file_type: FileType) -> Vec<UploadedAsset> {
        self.assets
            .read()
            .await
            .get(&file_type)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl AssetStore for HashMapAssetStore {
    async fn add_asset(&self, asset: UploadedAsset) -> Result<UploadedAsset, AssetStoreError> {
        let mut assets = self.assets.write().await;
        assets
            .entry(asset.file_type)
            .or_default()
            .push(asset.clone());
        Ok(asset)
    }
}
