//! # Portfolio Document
//!
//! The aggregate root: an arena of section instances keyed by id plus an
//! order index, the global settings, and the selected theme preset. The
//! builder session owns exactly one of these and hands out references to
//! the editor, the reorder engine and the preview renderer; the document
//! is never duplicated.
//!
//! Every mutating method is total over well-formed input: operations on an
//! unknown id are permissive no-ops, and each method re-establishes the
//! ordering invariant (orders form a contiguous `0..N-1` permutation)
//! before returning.

use crate::config::SectionConfig;
use crate::section::{ConfigMap, SectionId, SectionInstance, SectionKind};
use crate::settings::GlobalSettings;
use crate::theme::ThemePreset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partial update applied to one section: new config keys are added,
/// existing keys overwritten, everything else left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    pub visible: Option<bool>,
    pub config: Option<ConfigMap>,
}

impl SectionPatch {
    pub fn visibility(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            config: None,
        }
    }

    pub fn config(config: ConfigMap) -> Self {
        Self {
            visible: None,
            config: Some(config),
        }
    }
}

/// The full portfolio page definition, persisted as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DocumentRepr", into = "DocumentRepr")]
pub struct PortfolioDocument {
    owner_id: String,
    theme_preset: ThemePreset,
    global_settings: GlobalSettings,
    /// Arena: id → instance. Positions live in `order`.
    arena: HashMap<SectionId, SectionInstance>,
    /// Order index: `order[i]` is the id of the section at position `i`.
    order: Vec<SectionId>,
    /// Id allocation serial, bumped past collisions on reload.
    next_serial: u32,
}

impl PortfolioDocument {
    /// An empty document. Legal; it renders nothing.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            theme_preset: ThemePreset::default(),
            global_settings: GlobalSettings::default(),
            arena: HashMap::new(),
            order: Vec::new(),
            next_serial: 0,
        }
    }

    /// The document a professional starts from when first opening the
    /// builder: hero, gallery, about, contact.
    pub fn starter(owner_id: impl Into<String>) -> Self {
        let mut doc = Self::new(owner_id);
        doc.add_section(SectionKind::Hero);
        doc.add_section(SectionKind::Gallery);
        doc.add_section(SectionKind::About);
        doc.add_section(SectionKind::Contact);
        doc
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn theme_preset(&self) -> ThemePreset {
        self.theme_preset
    }

    pub fn set_theme_preset(&mut self, preset: ThemePreset) {
        self.theme_preset = preset;
    }

    pub fn global_settings(&self) -> &GlobalSettings {
        &self.global_settings
    }

    pub fn set_global_settings(&mut self, settings: GlobalSettings) {
        self.global_settings = settings;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn section(&self, id: &SectionId) -> Option<&SectionInstance> {
        self.arena.get(id)
    }

    pub fn section_at(&self, order: usize) -> Option<&SectionInstance> {
        self.order.get(order).and_then(|id| self.arena.get(id))
    }

    /// All sections, ascending by order, visibility ignored.
    pub fn sections_ordered(&self) -> impl Iterator<Item = &SectionInstance> + '_ {
        self.order.iter().filter_map(|id| self.arena.get(id))
    }

    /// The only view the preview renderer reads: visible sections,
    /// ascending by order. Lazy and restartable.
    pub fn visible_ordered(&self) -> impl Iterator<Item = &SectionInstance> + '_ {
        self.sections_ordered().filter(|section| section.visible)
    }

    /// Append a new section with the kind's default configuration.
    /// Never fails.
    pub fn add_section(&mut self, kind: SectionKind) -> &SectionInstance {
        let id = self.allocate_id();
        let instance = SectionInstance {
            id: id.clone(),
            kind,
            order: self.order.len(),
            visible: true,
            config: SectionConfig::default_for(kind).to_map(),
        };

        self.order.push(id.clone());
        self.arena.entry(id).or_insert(instance)
    }

    /// Remove a section and renumber the rest to close the gap. Unknown
    /// ids are a no-op.
    pub fn remove_section(&mut self, id: &SectionId) {
        if self.arena.remove(id).is_none() {
            return;
        }
        self.order.retain(|existing| existing != id);
        self.renumber();
    }

    /// Shallow-merge a patch into one section. Unknown ids are a no-op;
    /// writes are permissive.
    pub fn update_section(&mut self, id: &SectionId, patch: SectionPatch) {
        let Some(section) = self.arena.get_mut(id) else {
            return;
        };

        if let Some(visible) = patch.visible {
            section.visible = visible;
        }
        if let Some(config) = patch.config {
            for (key, value) in config {
                section.config.insert(key, value);
            }
        }
    }

    /// Relocate the section at `from` to position `to` with splice
    /// semantics: everything between the two positions shifts by one slot.
    /// Out-of-range `from` is a no-op; `to` clamps to the valid range.
    pub fn move_section(&mut self, from: usize, to: usize) {
        if from >= self.order.len() {
            return;
        }
        let to = to.min(self.order.len() - 1);
        if from == to {
            return;
        }

        let id = self.order.remove(from);
        self.order.insert(to, id);
        self.renumber();
    }

    /// Re-derive each instance's `order` field from the order index.
    fn renumber(&mut self) {
        for (position, id) in self.order.iter().enumerate() {
            if let Some(section) = self.arena.get_mut(id) {
                section.order = position;
            }
        }
    }

    fn allocate_id(&mut self) -> SectionId {
        loop {
            let id = SectionId::derive(&self.owner_id, self.next_serial);
            self.next_serial = self.next_serial.wrapping_add(1);
            if !self.arena.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Equality compares the persisted shape: owner, theme, settings, and the
/// ordered section list. The id-allocation serial is bookkeeping, not
/// document content.
impl PartialEq for PortfolioDocument {
    fn eq(&self, other: &Self) -> bool {
        self.owner_id == other.owner_id
            && self.theme_preset == other.theme_preset
            && self.global_settings == other.global_settings
            && self.order.len() == other.order.len()
            && self.sections_ordered().eq(other.sections_ordered())
    }
}

/// Serialized shape of a document: sections as an array carrying their
/// `order` fields. This is the JSON that crosses the persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRepr {
    owner_id: String,
    #[serde(default)]
    theme_preset: ThemePreset,
    #[serde(default)]
    global_settings: GlobalSettings,
    #[serde(default)]
    sections: Vec<SectionInstance>,
}

impl From<PortfolioDocument> for DocumentRepr {
    fn from(doc: PortfolioDocument) -> Self {
        let sections = doc.sections_ordered().cloned().collect();
        DocumentRepr {
            owner_id: doc.owner_id,
            theme_preset: doc.theme_preset,
            global_settings: doc.global_settings,
            sections,
        }
    }
}

impl From<DocumentRepr> for PortfolioDocument {
    fn from(repr: DocumentRepr) -> Self {
        let mut sections = repr.sections;
        // Stored order values win over array position; normalize to a
        // contiguous permutation on the way in.
        sections.sort_by_key(|section| section.order);

        let mut doc = PortfolioDocument::new(repr.owner_id);
        doc.theme_preset = repr.theme_preset;
        doc.global_settings = repr.global_settings;

        for mut section in sections {
            if doc.arena.contains_key(&section.id) {
                continue;
            }
            section.order = doc.order.len();
            doc.order.push(section.id.clone());
            doc.arena.insert(section.id.clone(), section);
        }
        doc.next_serial = doc.order.len() as u32;

        doc
    }
}
