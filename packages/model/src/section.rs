//! Section identity and instances.
//!
//! A section is one self-contained, typed content block of a composed
//! portfolio page. Its `kind` is fixed at creation (changing kind means
//! delete + add), its configuration is an open JSON map whose legal keys
//! are determined by the kind (see [`crate::SectionConfig`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Open key-value configuration storage for one section.
///
/// Unknown keys are preserved but not guaranteed to be rendered.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Opaque unique identifier for a section, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Self {
        SectionId(value.into())
    }

    /// Derive an id from the owning document and a per-document serial.
    ///
    /// CRC32 over the owner id keeps ids short and stable; the serial
    /// guarantees uniqueness within one document.
    pub fn derive(owner_id: &str, serial: u32) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(owner_id.as_bytes());
        hasher.update(&serial.to_le_bytes());
        SectionId(format!("sec-{:08x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed enumeration of section types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Gallery,
    About,
    Services,
    Packages,
    Testimonials,
    Reviews,
    Contact,
}

impl SectionKind {
    /// Every kind, in catalog order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Gallery,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Packages,
        SectionKind::Testimonials,
        SectionKind::Reviews,
        SectionKind::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Gallery => "gallery",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Packages => "packages",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Reviews => "reviews",
            SectionKind::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content block of a portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
    pub id: SectionId,

    /// Immutable after creation.
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Render position. Unique and contiguous `0..N-1` within a document
    /// after any mutation completes.
    pub order: usize,

    /// Hidden sections are excluded from rendered output but retained in
    /// the document, so hiding is reversible.
    pub visible: bool,

    #[serde(default)]
    pub config: ConfigMap,
}
