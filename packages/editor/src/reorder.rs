//! Drag-driven section reordering.
//!
//! The drag interaction is an explicit state machine rather than ad hoc
//! index juggling, so the shift-based move semantics are a contract the
//! tests can pin down. During a drag the document itself tracks the live
//! position; there is no separate preview position to reconcile on drop.
//!
//! ```text
//! Idle ──drag_start──▶ Dragging(source)
//! Dragging ──drag_over(c)──▶ Hovering(source=c)   [moves the model]
//! Hovering ──drag_over(c')─▶ Hovering(source=c')  [moves the model]
//! Hovering/Dragging ──drop/cancel──▶ Idle          [no further mutation]
//! ```

use focal_model::PortfolioDocument;
use serde::{Deserialize, Serialize};

/// Where the drag interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    #[default]
    Idle,
    /// A drag has started; nothing hovered yet.
    Dragging { source: usize },
    /// The pointer is over another row. `source` is the dragged section's
    /// current (live) position in the document.
    Hovering { source: usize, candidate: usize },
}

/// State machine driving drag interactions against one document.
///
/// Nothing here can fail: this is a purely local UI interaction, and every
/// write goes through the document's total `move_section`.
#[derive(Debug, Clone, Default)]
pub struct ReorderEngine {
    state: DragState,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Begin dragging the section currently at `source`. Starting a new
    /// drag while one is active re-anchors rather than nesting.
    pub fn drag_start(&mut self, source: usize) {
        self.state = DragState::Dragging { source };
    }

    /// The pointer passed over the row at `candidate`. Immediately writes
    /// the move through to the document and re-anchors the source to the
    /// new live position. Hovering the dragged section itself is a no-op
    /// transition.
    pub fn drag_over(&mut self, doc: &mut PortfolioDocument, candidate: usize) {
        let source = match self.state {
            DragState::Idle => return,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => source,
        };

        if candidate == source {
            self.state = DragState::Hovering { source, candidate };
            return;
        }

        doc.move_section(source, candidate);
        self.state = DragState::Hovering {
            source: candidate,
            candidate,
        };
    }

    /// Drop: the model already holds the final order from the last hover
    /// transition, so this only resets the machine.
    pub fn drop_section(&mut self) {
        self.state = DragState::Idle;
    }

    /// Cancel behaves like drop: the model is the single source of truth
    /// during the drag, and the last hover already committed.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
