//! Integration tests for the builder session: edit → save → reload →
//! publish, against both provided stores.

use focal_model::{OwnerProfile, PortfolioDocument};
use focal_workspace::{
    BuilderSession, JsonFileStore, MemoryStore, Mutation, PortfolioId, PortfolioStore,
    RenderMode, SectionKind, StoreError, ThemePreset,
};
use serde_json::json;
use std::io::ErrorKind;
use std::sync::Arc;

fn owner() -> OwnerProfile {
    OwnerProfile {
        id: "pro-1".to_string(),
        name: "Ada Marsh".to_string(),
        headline: "Documentary wedding photography".to_string(),
        ..Default::default()
    }
}

/// Shared handle so a second session can reopen the same store.
#[derive(Clone)]
struct SharedStore(Arc<MemoryStore>);

impl PortfolioStore for SharedStore {
    async fn save(&self, document: &PortfolioDocument) -> Result<PortfolioId, StoreError> {
        self.0.save(document).await
    }

    async fn update(
        &self,
        id: &PortfolioId,
        document: &PortfolioDocument,
    ) -> Result<(), StoreError> {
        self.0.update(id, document).await
    }

    async fn load(&self, id: &PortfolioId) -> Result<PortfolioDocument, StoreError> {
        self.0.load(id).await
    }

    async fn delete(&self, id: &PortfolioId) -> Result<(), StoreError> {
        self.0.delete(id).await
    }
}

/// Store double whose writes always fail, for save-failure semantics.
struct OfflineStore;

impl PortfolioStore for OfflineStore {
    async fn save(&self, _document: &PortfolioDocument) -> Result<PortfolioId, StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            ErrorKind::ConnectionRefused,
            "offline",
        )))
    }

    async fn update(
        &self,
        _id: &PortfolioId,
        _document: &PortfolioDocument,
    ) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            ErrorKind::ConnectionRefused,
            "offline",
        )))
    }

    async fn load(&self, id: &PortfolioId) -> Result<PortfolioDocument, StoreError> {
        Err(StoreError::NotFound(id.clone()))
    }

    async fn delete(&self, _id: &PortfolioId) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::new(
            ErrorKind::ConnectionRefused,
            "offline",
        )))
    }
}

#[tokio::test]
async fn test_edit_save_reload_round_trip() {
    let store = SharedStore(Arc::new(MemoryStore::new()));

    let mut session = BuilderSession::open(store.clone(), owner());
    session.apply(Mutation::AddSection {
        kind: SectionKind::Packages,
    });
    session.set_theme_preset(ThemePreset::Elegant);
    session.apply(Mutation::MoveSection { from: 4, to: 0 });

    let id = session.save().await.unwrap();

    let resumed = BuilderSession::open_existing(store, owner(), id)
        .await
        .unwrap();
    assert_eq!(resumed.document(), session.document());
    assert_eq!(resumed.document().theme_preset(), ThemePreset::Elegant);
    assert_eq!(
        resumed.document().section_at(0).unwrap().kind,
        SectionKind::Packages
    );
}

#[tokio::test]
async fn test_second_save_updates_in_place() {
    let store = SharedStore(Arc::new(MemoryStore::new()));
    let mut session = BuilderSession::open(store.clone(), owner());

    let first = session.save().await.unwrap();
    session.apply(Mutation::AddSection {
        kind: SectionKind::Reviews,
    });
    let second = session.save().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(store.load(&first).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_failed_save_leaves_document_editable() {
    let mut session = BuilderSession::open(OfflineStore, owner());
    session.apply(Mutation::AddSection {
        kind: SectionKind::Services,
    });
    let before = session.document().clone();

    let result = session.save().await;
    assert!(matches!(result, Err(StoreError::Io(_))));

    // Nothing was lost and editing continues.
    assert_eq!(session.document(), &before);
    assert!(session.document_id().is_none());
    session.apply(Mutation::AddSection {
        kind: SectionKind::Testimonials,
    });
    assert_eq!(session.document().len(), 6);
}

#[tokio::test]
async fn test_open_missing_document_reports_not_found() {
    let store = SharedStore(Arc::new(MemoryStore::new()));
    let result =
        BuilderSession::open_existing(store, owner(), PortfolioId::new("pf-404404")).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_selection_follows_adds_and_removals() {
    let store = MemoryStore::new();
    let mut session = BuilderSession::open(store, owner());

    let added = session
        .apply(Mutation::AddSection {
            kind: SectionKind::Reviews,
        })
        .unwrap();
    assert_eq!(session.selection(), Some(&added));
    assert!(session.editor_panel().is_some());

    session.apply(Mutation::RemoveSection { id: added.clone() });
    assert_eq!(session.selection(), None);
    assert!(session.editor_panel().is_none());
}

#[tokio::test]
async fn test_field_writes_show_up_in_the_preview() {
    let store = MemoryStore::new();
    let mut session = BuilderSession::open(store, owner());

    let hero = session.document().section_at(0).unwrap().id.clone();
    session.select(Some(hero));
    session.set_field("heading", json!("Elopements & intimate weddings"));

    let page = session.preview(RenderMode::Editing);
    let heading = page
        .find(&|node| node.children().first() == Some(&focal_renderer::VNode::text("Elopements & intimate weddings")));
    assert!(heading.is_some());
}

#[tokio::test]
async fn test_drag_through_session_keeps_invariants() {
    let store = MemoryStore::new();
    let mut session = BuilderSession::open(store, owner());

    session.drag_start(3);
    session.drag_over(1);
    session.drag_over(0);
    session.drag_drop();

    let kinds: Vec<SectionKind> = session
        .document()
        .sections_ordered()
        .map(|s| s.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Contact,
            SectionKind::Hero,
            SectionKind::Gallery,
            SectionKind::About,
        ]
    );

    let mut orders: Vec<usize> = session
        .document()
        .sections_ordered()
        .map(|s| s.order)
        .collect();
    orders.sort_unstable();
    assert_eq!(orders, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_publish_compiles_the_final_page() {
    let store = MemoryStore::new();
    let mut session = BuilderSession::open(store, owner());

    let published = session.publish().await.unwrap();
    assert!(published.html.contains("Ada Marsh — Photography"));
    assert!(published.html.contains("id=\"section-hero\""));
    assert!(!published.html.contains("data-section-id"));
    assert_eq!(session.document_id(), Some(&published.id));
}

#[tokio::test]
async fn test_file_store_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let mut session = BuilderSession::open(store, owner());
        session.apply(Mutation::AddSection {
            kind: SectionKind::Testimonials,
        });
        session.save().await.unwrap()
    };

    let store = JsonFileStore::open(dir.path()).await.unwrap();
    let session = BuilderSession::open_existing(store, owner(), id)
        .await
        .unwrap();
    assert_eq!(session.document().len(), 5);
}

#[tokio::test]
async fn test_delete_allows_resaving_under_new_id() {
    let store = SharedStore(Arc::new(MemoryStore::new()));
    let mut session = BuilderSession::open(store.clone(), owner());

    let first = session.save().await.unwrap();
    session.delete().await.unwrap();
    assert!(matches!(
        store.load(&first).await,
        Err(StoreError::NotFound(_))
    ));

    let second = session.save().await.unwrap();
    assert_ne!(first, second);
    assert!(store.load(&second).await.is_ok());
}
