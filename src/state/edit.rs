//! Per-list edit mode state machine.
//!
//! A list is either `Viewing` or `Editing` exactly one record. Starting
//! an edit on another record replaces the current one, so the
//! single-editor rule holds by construction.

use crate::models::task::TaskId;

/// Edit mode of the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No record is being edited.
    #[default]
    Viewing,
    /// One record is open for editing with an unsaved draft.
    Editing {
        /// Record under edit.
        id: TaskId,
        /// Current, uncommitted text.
        draft: String,
    },
}

impl EditState {
    /// Identifier of the record being edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<TaskId> {
        match self {
            Self::Viewing => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }

    /// Draft text of the record being edited, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Viewing => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Whether `id` is the record currently being edited.
    #[must_use]
    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing_id() == Some(id)
    }
}
