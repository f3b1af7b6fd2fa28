use std::path::PathBuf;

use chrono::Utc;
use coursehub_core::StagedFile;
use uuid::Uuid;

const FALLBACK_FILE_NAME: &str = "upload";

/// Local directory holding uploads between receipt and transfer to the object store.
#[derive(Debug, Clone)]
pub struct DiskStaging {
    dir: PathBuf,
}

impl DiskStaging {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Write the bytes under a collision-free name: `<unix-millis>-<uuid>-<name>`.
    #[tracing::instrument(name = "Staging upload", skip(self, bytes), fields(size = bytes.len()))]
    pub async fn stage(
        &self,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> std::io::Result<StagedFile> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4(),
            sanitise_file_name(original_name)
        );
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;

        Ok(StagedFile {
            path,
            content_type: content_type.to_string(),
            original_name: original_name.to_string(),
        })
    }
}

fn sanitise_file_name(name: &str) -> String {
    // Drop any directory components a client may send
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let sanitised: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitised.trim_matches('.').is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitised
    }
}
