//! # Focal Workspace
//!
//! Builder session orchestration and persistence for Focal portfolios.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ workspace: BuilderSession                   │
//! │  - owns the live PortfolioDocument          │
//! │  - routes mutations, selection, drags       │
//! │  - awaits the store on save/publish         │
//! └─────────────────────────────────────────────┘
//!        ↓ reads              ↓ persists
//! ┌──────────────┐   ┌────────────────────────┐
//! │ renderer     │   │ PortfolioStore          │
//! │ (preview)    │   │  - MemoryStore          │
//! └──────────────┘   │  - JsonFileStore        │
//!                    └────────────────────────┘
//! ```
//!
//! Mutations are synchronous and atomic with respect to the document; the
//! store is the only asynchronous boundary. Saves are last-write-wins.

mod builder;
mod file_store;
mod store;

pub use builder::{BuilderSession, PublishedPage};
pub use file_store::JsonFileStore;
pub use store::{MemoryStore, PortfolioId, PortfolioStore, StoreError};

// Re-export the pieces a host embedding the builder needs.
pub use focal_editor::{DragState, EditorPanel, Mutation};
pub use focal_model::{OwnerProfile, PortfolioDocument, SectionId, SectionKind, ThemePreset};
pub use focal_renderer::{RenderMode, RenderedPage};
