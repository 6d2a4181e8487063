use std::io;
use std::path::{Path, PathBuf};

/// Filesystem blob store for uploaded images. Files land in a single flat
/// directory under their original name; a colliding name overwrites the
/// previous file (last writer wins).
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the uploaded bytes under `original_name` and return the absolute
    /// destination path, which is what the product record stores.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.root).await?;

        // Strip any client-supplied directory components; uploads are flat.
        let file_name = Path::new(original_name)
            .file_name()
            .map(|n| n.to_owned())
            .unwrap_or_else(|| "upload".into());

        let dest = self.root.join(file_name);
        tokio::fs::write(&dest, bytes).await?;

        let absolute = if dest.is_absolute() {
            dest
        } else {
            std::env::current_dir()?.join(dest)
        };

        Ok(absolute)
    }

    /// Best-effort removal, used to clean up a written file when the
    /// subsequent persist step fails.
    pub async fn remove(&self, path: &str) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!("failed to remove orphaned upload {}: {}", path, e);
        }
    }
}
