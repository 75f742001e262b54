//! JSON-file-backed persistence: one pretty-printed document per file
//! under a root directory. The on-disk payload is exactly the serialized
//! document; nothing else crosses the boundary.

use crate::store::{PortfolioId, PortfolioStore, StoreError};
use focal_model::PortfolioDocument;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

pub struct JsonFileStore {
    root: PathBuf,
    next_id: AtomicU64,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `root`. Existing
    /// documents are scanned so freshly allocated ids never collide.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        let mut highest = 0;
        let mut entries = tokio::fs::read_dir(&root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if let Some(serial) = parse_serial(&entry.path()) {
                highest = highest.max(serial);
            }
        }

        Ok(Self {
            root,
            next_id: AtomicU64::new(highest),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &PortfolioId) -> PathBuf {
        self.root.join(format!("{}.json", id.as_str()))
    }

    fn allocate_id(&self) -> PortfolioId {
        let serial = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        PortfolioId::new(format!("pf-{serial:06}"))
    }

    async fn write(&self, id: &PortfolioId, document: &PortfolioDocument) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(self.path_for(id), payload).await?;
        debug!(id = %id, "wrote portfolio document");
        Ok(())
    }
}

/// Extract the numeric serial from a `pf-NNNNNN.json` file name.
fn parse_serial(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    if path.extension()?.to_str()? != "json" {
        return None;
    }
    stem.strip_prefix("pf-")?.parse().ok()
}

impl PortfolioStore for JsonFileStore {
    async fn save(&self, document: &PortfolioDocument) -> Result<PortfolioId, StoreError> {
        let id = self.allocate_id();
        self.write(&id, document).await?;
        Ok(id)
    }

    async fn update(
        &self,
        id: &PortfolioId,
        document: &PortfolioDocument,
    ) -> Result<(), StoreError> {
        if !tokio::fs::try_exists(self.path_for(id)).await? {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.write(id, document).await
    }

    async fn load(&self, id: &PortfolioId) -> Result<PortfolioDocument, StoreError> {
        let payload = match tokio::fs::read_to_string(self.path_for(id)).await {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&payload)?)
    }

    async fn delete(&self, id: &PortfolioId) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
