//! # Builder Session
//!
//! The top-level orchestrator: owns the one live document, wires the
//! editor, the reorder engine and the preview renderer together, and
//! awaits the persistence collaborator on save and publish.
//!
//! ## Lifecycle
//!
//! ```text
//! Open → Edit → Preview → Save/Publish
//!   ↓      ↓       ↓          ↓
//! Store  Mutations VDOM     Store (+ HTML)
//! ```
//!
//! While a save is in flight the document stays fully editable; there is
//! no lock and no conflict detection. Whatever state the document held at
//! the moment `save` was invoked is what persists (last-write-wins). A
//! failed save surfaces its error and leaves the in-memory document
//! untouched, so editing continues where the user left off.

use crate::store::{PortfolioId, PortfolioStore, StoreError};
use focal_editor::{
    set_field, set_global_field, set_theme_preset, set_visibility, DragState, EditorPanel,
    Mutation, ReorderEngine,
};
use focal_model::{OwnerProfile, PortfolioDocument, SectionId, ThemePreset};
use focal_renderer::{
    compile_html, render, HtmlOptions, PageMeta, RenderMode, RenderOptions, RenderedPage,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// The published artifact: the persisted id plus the compiled page.
#[derive(Debug, Clone)]
pub struct PublishedPage {
    pub id: PortfolioId,
    pub html: String,
}

/// One professional's editing session over one portfolio document.
pub struct BuilderSession<S: PortfolioStore> {
    store: S,
    owner: OwnerProfile,
    document: PortfolioDocument,
    document_id: Option<PortfolioId>,
    selection: Option<SectionId>,
    reorder: ReorderEngine,
}

impl<S: PortfolioStore> BuilderSession<S> {
    /// Start a fresh session with the default section set (hero, gallery,
    /// about, contact).
    pub fn open(store: S, owner: OwnerProfile) -> Self {
        let document = PortfolioDocument::starter(owner.id.clone());
        info!(owner = %owner.id, "opened new builder session");
        Self {
            store,
            owner,
            document,
            document_id: None,
            selection: None,
            reorder: ReorderEngine::new(),
        }
    }

    /// Resume editing a persisted document.
    pub async fn open_existing(
        store: S,
        owner: OwnerProfile,
        id: PortfolioId,
    ) -> Result<Self, StoreError> {
        let document = store.load(&id).await?;
        info!(owner = %owner.id, id = %id, "resumed builder session");
        Ok(Self {
            store,
            owner,
            document,
            document_id: Some(id),
            selection: None,
            reorder: ReorderEngine::new(),
        })
    }

    pub fn document(&self) -> &PortfolioDocument {
        &self.document
    }

    pub fn document_id(&self) -> Option<&PortfolioId> {
        self.document_id.as_ref()
    }

    pub fn owner(&self) -> &OwnerProfile {
        &self.owner
    }

    // ── editing ──

    /// Apply one semantic mutation. A newly added section becomes the
    /// selection; a removed selection is dropped.
    pub fn apply(&mut self, mutation: Mutation) -> Option<SectionId> {
        debug!(?mutation, "applying mutation");
        let added = mutation.apply(&mut self.document);

        if let Some(id) = &added {
            self.selection = Some(id.clone());
        }
        if let Some(selected) = &self.selection {
            if self.document.section(selected).is_none() {
                self.selection = None;
            }
        }
        added
    }

    pub fn select(&mut self, id: Option<SectionId>) {
        self.selection = id;
    }

    pub fn selection(&self) -> Option<&SectionId> {
        self.selection.as_ref()
    }

    /// Editing surface for the current selection; `None` disables the
    /// panel gracefully when nothing (or something vanished) is selected.
    pub fn editor_panel(&self) -> Option<EditorPanel> {
        let selected = self.selection.as_ref()?;
        EditorPanel::for_section(&self.document, selected)
    }

    /// Write one config field of the selected section. No-op without a
    /// selection.
    pub fn set_field(&mut self, key: &str, value: Value) {
        if let Some(selected) = self.selection.clone() {
            set_field(&mut self.document, &selected, key, value);
        }
    }

    pub fn set_visibility(&mut self, id: &SectionId, visible: bool) {
        set_visibility(&mut self.document, id, visible);
    }

    pub fn set_global_field(&mut self, key: &str, value: Value) -> bool {
        set_global_field(&mut self.document, key, value)
    }

    pub fn set_theme_preset(&mut self, preset: ThemePreset) {
        set_theme_preset(&mut self.document, preset);
    }

    // ── drag reorder ──

    pub fn drag_start(&mut self, order: usize) {
        self.reorder.drag_start(order);
    }

    pub fn drag_over(&mut self, candidate: usize) {
        self.reorder.drag_over(&mut self.document, candidate);
    }

    pub fn drag_drop(&mut self) {
        self.reorder.drop_section();
    }

    pub fn drag_cancel(&mut self) {
        self.reorder.cancel();
    }

    pub fn drag_state(&self) -> DragState {
        self.reorder.state()
    }

    // ── preview & persistence ──

    /// Render the current document. Editing mode carries the selection so
    /// the preview can highlight it.
    pub fn preview(&self, mode: RenderMode) -> RenderedPage {
        let options = match mode {
            RenderMode::Editing => RenderOptions::editing().with_selected(self.selection.clone()),
            RenderMode::Publishing => RenderOptions::publishing(),
        };
        render(&self.document, &self.owner, &options)
    }

    /// Persist the current in-memory state: create on first save, then
    /// overwrite. On failure the document is untouched and still editable.
    pub async fn save(&mut self) -> Result<PortfolioId, StoreError> {
        match &self.document_id {
            Some(id) => {
                if let Err(err) = self.store.update(id, &self.document).await {
                    warn!(id = %id, error = %err, "save failed");
                    return Err(err);
                }
                info!(id = %id, sections = self.document.len(), "saved portfolio");
                Ok(id.clone())
            }
            None => {
                let id = self.store.save(&self.document).await?;
                info!(id = %id, sections = self.document.len(), "saved new portfolio");
                self.document_id = Some(id.clone());
                Ok(id)
            }
        }
    }

    /// Save, then compile the final page.
    pub async fn publish(&mut self) -> Result<PublishedPage, StoreError> {
        let id = self.save().await?;

        let page = self.preview(RenderMode::Publishing);
        let meta = PageMeta {
            title: format!("{} — Photography", self.owner.name),
            description: if self.owner.headline.is_empty() {
                self.owner.bio.clone()
            } else {
                self.owner.headline.clone()
            },
        };
        let html = compile_html(&page, &meta, HtmlOptions::default());
        info!(id = %id, bytes = html.len(), "published portfolio");

        Ok(PublishedPage { id, html })
    }

    /// Explicitly delete the persisted document. The in-memory document
    /// survives and can be saved again under a new id.
    pub async fn delete(&mut self) -> Result<(), StoreError> {
        if let Some(id) = self.document_id.take() {
            self.store.delete(&id).await?;
            info!(id = %id, "deleted portfolio");
        }
        Ok(())
    }
}
