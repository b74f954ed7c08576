//! # Row Editor
//!
//! At most one member is open for inline editing. Its three editable fields
//! are copied into an [`EditBuffer`] when editing starts; keystrokes change
//! the buffer only, and the store sees the values when the edit is saved.
//!
//! ```text
//!            begin(id)                   save
//!   Idle ───────────────▶ Editing(id) ──────────▶ Idle
//!                          │    ▲
//!                          └────┘ begin(other): previous buffer dropped
//! ```

use crate::member::{Member, MemberId};

/// The editable columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Name => EditField::Email,
            EditField::Email => EditField::Role,
            EditField::Role => EditField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            EditField::Name => EditField::Role,
            EditField::Email => EditField::Name,
            EditField::Role => EditField::Email,
        }
    }
}

/// Scratch copy of a member's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub name: String,
    pub email: String,
    pub role: String,
    pub focus: EditField,
}

impl EditBuffer {
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
            focus: EditField::Name,
        }
    }

    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Email => &self.email,
            EditField::Role => &self.role,
        }
    }

    pub fn field_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Name => &mut self.name,
            EditField::Email => &mut self.email,
            EditField::Role => &mut self.role,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.field_mut(self.focus).push(c);
    }

    pub fn pop_char(&mut self) {
        self.field_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowEditor {
    #[default]
    Idle,
    Editing {
        id: MemberId,
        buffer: EditBuffer,
    },
}

impl RowEditor {
    pub fn target(&self) -> Option<MemberId> {
        match self {
            RowEditor::Idle => None,
            RowEditor::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowEditor::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            RowEditor::Idle => None,
            RowEditor::Editing { buffer, .. } => Some(buffer),
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match self {
            RowEditor::Idle => None,
            RowEditor::Editing { buffer, .. } => Some(buffer),
        }
    }

    /// Open `member` for editing, dropping whatever was open before.
    pub fn begin(&mut self, member: &Member) {
        if let Some(previous) = self.target() {
            if previous != member.id {
                tracing::debug!(previous, next = member.id, "discarding unsaved edit");
            }
        }
        *self = RowEditor::Editing {
            id: member.id,
            buffer: EditBuffer::from_member(member),
        };
    }

    /// Close the editor, handing back what was being edited.
    pub fn finish(&mut self) -> Option<(MemberId, EditBuffer)> {
        match std::mem::take(self) {
            RowEditor::Idle => None,
            RowEditor::Editing { id, buffer } => Some((id, buffer)),
        }
    }

    /// Close the editor without keeping the buffer.
    pub fn discard(&mut self) {
        *self = RowEditor::Idle;
    }
}
