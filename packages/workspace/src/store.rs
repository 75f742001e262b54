//! Persistence contract and the in-memory store.
//!
//! The engine treats storage as an opaque collaborator: documents go in,
//! ids come out. Only this boundary can fail in a way the user must see;
//! everything in-memory always succeeds. Retry and backoff concerns belong
//! to the callers of this trait, not to the engine.

use chrono::{DateTime, Utc};
use focal_model::PortfolioDocument;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

/// Opaque identifier of a persisted portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioId(String);

impl PortfolioId {
    pub fn new(value: impl Into<String>) -> Self {
        PortfolioId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failures at the persistence boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document was deleted or never existed.
    #[error("portfolio '{0}' no longer exists")]
    NotFound(PortfolioId),

    /// Transport or storage failure. Recoverable: the in-memory document
    /// is untouched and the caller may retry.
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    /// The stored payload does not deserialize into a document.
    #[error("malformed portfolio document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persistence collaborator consumed by the builder session.
///
/// The serialized document JSON is the only artifact crossing this
/// boundary. Saves are last-write-wins: there is no optimistic-concurrency
/// check and no conflict detection.
pub trait PortfolioStore {
    /// Persist a new document and return its assigned id.
    fn save(
        &self,
        document: &PortfolioDocument,
    ) -> impl std::future::Future<Output = Result<PortfolioId, StoreError>> + Send;

    /// Overwrite an existing document.
    fn update(
        &self,
        id: &PortfolioId,
        document: &PortfolioDocument,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Fetch a document by id.
    fn load(
        &self,
        id: &PortfolioId,
    ) -> impl std::future::Future<Output = Result<PortfolioDocument, StoreError>> + Send;

    /// Remove a document permanently. Documents are never deleted
    /// implicitly; this is the only way out.
    fn delete(
        &self,
        id: &PortfolioId,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Debug, Clone)]
struct StoredDocument {
    document: PortfolioDocument,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// In-memory store: a true store for tests and single-process use.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<PortfolioId, StoredDocument>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> PortfolioId {
        let serial = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        PortfolioId(format!("pf-{serial:06}"))
    }

    /// Last-modified timestamp, if the document exists.
    pub async fn modified_at(&self, id: &PortfolioId) -> Option<DateTime<Utc>> {
        self.documents
            .read()
            .await
            .get(id)
            .map(|stored| stored.updated_at)
    }
}

impl PortfolioStore for MemoryStore {
    async fn save(&self, document: &PortfolioDocument) -> Result<PortfolioId, StoreError> {
        let id = self.allocate_id();
        let now = Utc::now();
        self.documents.write().await.insert(
            id.clone(),
            StoredDocument {
                document: document.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn update(
        &self,
        id: &PortfolioId,
        document: &PortfolioDocument,
    ) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let stored = documents
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        stored.document = document.clone();
        stored.updated_at = Utc::now();
        Ok(())
    }

    async fn load(&self, id: &PortfolioId) -> Result<PortfolioDocument, StoreError> {
        self.documents
            .read()
            .await
            .get(id)
            .map(|stored| stored.document.clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn delete(&self, id: &PortfolioId) -> Result<(), StoreError> {
        self.documents
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focal_model::SectionKind;

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let doc = PortfolioDocument::starter("owner-1");

        let id = store.save(&doc).await.unwrap();
        let loaded = store.load(&id).await.unwrap();
        assert_eq!(doc, loaded);
    }

    #[tokio::test]
    async fn test_update_overwrites_with_latest_state() {
        let store = MemoryStore::new();
        let mut doc = PortfolioDocument::starter("owner-1");

        let id = store.save(&doc).await.unwrap();
        doc.add_section(SectionKind::Reviews);
        store.update(&id, &doc).await.unwrap();

        assert_eq!(store.load(&id).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_missing_documents_surface_not_found() {
        let store = MemoryStore::new();
        let missing = PortfolioId::new("pf-999999");

        assert!(matches!(
            store.load(&missing).await,
            Err(StoreError::NotFound(_))
        ));
        let doc = PortfolioDocument::starter("owner-1");
        assert!(matches!(
            store.update(&missing, &doc).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_is_permanent() {
        let store = MemoryStore::new();
        let id = store
            .save(&PortfolioDocument::starter("owner-1"))
            .await
            .unwrap();

        store.delete(&id).await.unwrap();
        assert!(matches!(
            store.load(&id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_are_unique_per_store() {
        let store = MemoryStore::new();
        let doc = PortfolioDocument::starter("owner-1");

        let first = store.save(&doc).await.unwrap();
        let second = store.save(&doc).await.unwrap();
        assert_ne!(first, second);
    }
}
