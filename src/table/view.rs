//! # Table View Model
//!
//! A plain description of what the table should show for the current state:
//! which rows are on screen, which boxes are checked, which row shows input
//! fields instead of text, and whether bulk delete is available. The terminal
//! renderer only reads this; it never looks at the store directly.

use super::editor::{EditField, RowEditor};
use super::state::AdminTable;
use crate::member::{Member, MemberId};
use std::collections::BTreeSet;

/// The per-row action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCells {
    Text {
        name: String,
        email: String,
        role: String,
    },
    /// Input fields pre-filled from the edit buffer.
    Input {
        name: String,
        email: String,
        role: String,
        focus: EditField,
    },
}

impl RowCells {
    pub fn values(&self) -> [&str; 3] {
        match self {
            RowCells::Text { name, email, role } | RowCells::Input { name, email, role, .. } => {
                [name.as_str(), email.as_str(), role.as_str()]
            }
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, RowCells::Input { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: MemberId,
    pub checked: bool,
    pub cells: RowCells,
    pub action: RowAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    /// Size of the active set (search results or everything).
    pub active_len: usize,
    pub total_len: usize,
    pub header_checked: bool,
    pub bulk_delete_enabled: bool,
}

impl TableView {
    pub fn from_table(table: &AdminTable) -> Self {
        let selection = table.selection();
        let rows = render_rows(&table.visible(), &selection, table.editor());
        Self {
            rows,
            page: table.page(),
            total_pages: table.total_pages(),
            active_len: table.active_len(),
            total_len: table.store().len(),
            header_checked: table.store().all_selected(),
            bulk_delete_enabled: !selection.is_empty(),
        }
    }
}

/// Build the rows for the visible members.
pub fn render_rows(
    visible: &[&Member],
    selection: &BTreeSet<MemberId>,
    editor: &RowEditor,
) -> Vec<RowView> {
    visible
        .iter()
        .map(|member| {
            let editing = match (editor.target(), editor.buffer()) {
                (Some(id), Some(buffer)) if id == member.id => Some(buffer),
                _ => None,
            };
            let (cells, action) = match editing {
                Some(buffer) => (
                    RowCells::Input {
                        name: buffer.field(EditField::Name).to_string(),
                        email: buffer.field(EditField::Email).to_string(),
                        role: buffer.field(EditField::Role).to_string(),
                        focus: buffer.focus,
                    },
                    RowAction::Save,
                ),
                None => (
                    RowCells::Text {
                        name: member.name.clone(),
                        email: member.email.clone(),
                        role: member.role.clone(),
                    },
                    RowAction::Edit,
                ),
            };
            RowView {
                id: member.id,
                checked: selection.contains(&member.id),
                cells,
                action,
            }
        })
        .collect()
}
