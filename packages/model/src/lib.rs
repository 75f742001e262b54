//! # Focal Model
//!
//! Core data model for Focal portfolio pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: document aggregate + theme resolver  │
//! │  - PortfolioDocument (arena + order index)  │
//! │  - Typed section configuration schemas      │
//! │  - Theme preset → resolved token cascade    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations, reorder, field bindings  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: registry → VDOM → HTML            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: preview output and editor
//!    panels are derived views, recomputed on every read.
//! 2. **Permissive writes, defaulted reads**: section configuration is
//!    stored as an open JSON map; typed views apply per-field defaults
//!    when reading, and writes never fail.
//! 3. **Ordering is an invariant**: after any mutation completes, section
//!    orders form a contiguous `0..N-1` permutation.

mod config;
mod document;
mod profile;
mod section;
mod settings;
mod theme;

pub use config::{
    AboutConfig, ContactConfig, GalleryColumns, GalleryConfig, GalleryImage, GalleryLayout,
    GallerySpacing, HeroConfig, PackageTier, PackagesConfig, ReviewsConfig, SectionConfig,
    ServiceItem, ServicesConfig, TestimonialEntry, TestimonialsConfig, TextAlignment,
};
pub use document::{PortfolioDocument, SectionPatch};
pub use profile::{MediaRef, OwnerProfile, OwnerReview};
pub use section::{ConfigMap, SectionId, SectionInstance, SectionKind};
pub use settings::{ButtonStyle, GlobalSettings, SpacingScale, Typography};
pub use theme::{ResolvedTheme, ThemePreset};
