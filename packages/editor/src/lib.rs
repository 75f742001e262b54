//! # Focal Editor
//!
//! Editing layer over the portfolio document model.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each [`Mutation`] represents a semantic
//!    operation, not a raw state diff, and is serializable as such.
//! 2. **Total**: mutations never fail. Operations naming an unknown
//!    section are permissive no-ops; the builder is a single-operator
//!    tool, so strict validation buys nothing here.
//! 3. **Write-through**: field edits land on the document immediately;
//!    there is no staged draft and no "apply" step. The live preview
//!    re-reads the document on every render, so edits show up without an
//!    explicit refresh.
//!
//! ## Mutation Semantics
//!
//! ### MoveSection
//! - Splice-and-reinsert: the moved section is lifted out and re-inserted,
//!   shifting everything between the two positions by one slot.
//! - Orders are renumbered to a contiguous `0..N-1` before returning.
//!
//! ### UpdateSection
//! - Shallow merge into the stored config map: new keys added, existing
//!   keys overwritten, untouched keys preserved.
//! - Visibility flips are part of the same operation and are reversible:
//!   hidden sections stay in the document.

mod fields;
mod mutations;
mod reorder;

pub use fields::{
    fields_for, global_fields, set_field, set_global_field, set_theme_preset, set_visibility,
    theme_preset_options, EditorPanel, FieldBinding, FieldDescriptor, FieldKind,
};
pub use mutations::Mutation;
pub use reorder::{DragState, ReorderEngine};
