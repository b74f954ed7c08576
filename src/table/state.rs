//! # Admin Table State
//!
//! [`AdminTable`] owns the member store, the search query, the page index and
//! the row editor. Every user action goes through [`AdminTable::dispatch`],
//! which applies it and then re-establishes the table's invariants:
//!
//! - the page index is within `1..=total_pages` of the active set,
//! - the row being edited still exists,
//! - any selection change closes the editor without saving.

use super::editor::{EditBuffer, RowEditor};
use super::pagination::{self, PAGE_SIZE};
use super::search::Query;
use super::store::MemberStore;
use crate::member::{Member, MemberId};
use std::collections::BTreeSet;

/// A discrete user action on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetQuery(String),
    GoToPage(usize),
    FirstPage,
    LastPage,
    NextPage,
    PreviousPage,
    ToggleAll(bool),
    ToggleOne { id: MemberId, checked: bool },
    BeginEdit(MemberId),
    Save,
    Delete(MemberId),
    DeleteSelected,
}

impl Action {
    fn is_selection(&self) -> bool {
        matches!(self, Action::ToggleAll(_) | Action::ToggleOne { .. })
    }
}

/// What a dispatched action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (out-of-range page, unknown id, nothing to save).
    Ignored,
    Applied,
    Saved(MemberId),
    Deleted(usize),
}

#[derive(Debug, Clone)]
pub struct AdminTable {
    store: MemberStore,
    query: Query,
    page: usize,
    page_size: usize,
    editor: RowEditor,
}

impl Default for AdminTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminTable {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            store: MemberStore::new(),
            query: Query::default(),
            page: 1,
            page_size: page_size.max(1),
            editor: RowEditor::Idle,
        }
    }

    /// Replace the whole record set, as done once after the initial fetch.
    pub fn load(&mut self, members: Vec<Member>) {
        self.store.load(members);
        tracing::info!(count = self.store.len(), "member table loaded");
        self.settle();
    }

    pub fn store(&self) -> &MemberStore {
        &self.store
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn editor(&self) -> &RowEditor {
        &self.editor
    }

    /// The open edit buffer, if a row is being edited.
    pub fn edit_buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        self.editor.buffer_mut()
    }

    pub fn selection(&self) -> BTreeSet<MemberId> {
        self.store.selection()
    }

    /// The members governing pagination: search results, or everything when
    /// no query is active. Recomputed on every call.
    pub fn active_set(&self) -> Vec<&Member> {
        self.query.filter(self.store.members())
    }

    pub fn active_len(&self) -> usize {
        if self.query.is_empty() {
            self.store.len()
        } else {
            self.active_set().len()
        }
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.active_len(), self.page_size)
    }

    /// The members on the current page.
    pub fn visible(&self) -> Vec<&Member> {
        let active = self.active_set();
        pagination::visible_slice(&active, self.page, self.page_size).to_vec()
    }

    /// Apply one user action and restore the table invariants.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        tracing::trace!(?action, "dispatch");

        if action.is_selection() && self.editor.is_editing() {
            self.editor.discard();
        }

        let outcome = match action {
            Action::SetQuery(text) => {
                if text == self.query.text() {
                    Outcome::Ignored
                } else {
                    self.query = Query::new(text);
                    self.page = 1;
                    Outcome::Applied
                }
            }
            Action::GoToPage(page) => self.go_to_page(page),
            Action::FirstPage => self.go_to_page(1),
            Action::LastPage => self.go_to_page(self.total_pages()),
            Action::NextPage => self.go_to_page(self.page + 1),
            Action::PreviousPage => self.go_to_page(self.page.saturating_sub(1)),
            Action::ToggleAll(checked) => {
                self.store.set_all_selected(checked);
                Outcome::Applied
            }
            Action::ToggleOne { id, checked } => {
                if self.store.set_selected(id, checked) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Action::BeginEdit(id) => match self.store.get(id) {
                Some(member) => {
                    self.editor.begin(member);
                    Outcome::Applied
                }
                None => Outcome::Ignored,
            },
            Action::Save => match self.editor.finish() {
                Some((id, buffer)) => {
                    if self
                        .store
                        .update(id, &buffer.name, &buffer.email, &buffer.role)
                    {
                        tracing::info!(id, "member saved");
                        Outcome::Saved(id)
                    } else {
                        Outcome::Ignored
                    }
                }
                None => Outcome::Ignored,
            },
            Action::Delete(id) => {
                if self.store.remove(id) {
                    tracing::info!(id, "member deleted");
                    Outcome::Deleted(1)
                } else {
                    Outcome::Ignored
                }
            }
            Action::DeleteSelected => {
                let selected = self.store.selection();
                match self.store.remove_many(&selected) {
                    0 => Outcome::Ignored,
                    removed => {
                        tracing::info!(removed, "selected members deleted");
                        Outcome::Deleted(removed)
                    }
                }
            }
        };

        self.settle();
        outcome
    }

    fn go_to_page(&mut self, page: usize) -> Outcome {
        if page != self.page && pagination::is_valid_page(page, self.active_len(), self.page_size)
        {
            self.page = page;
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }

    fn settle(&mut self) {
        if let Some(id) = self.editor.target() {
            if !self.store.contains(id) {
                self.editor.discard();
            }
        }
        self.page = pagination::clamp_page(self.page, self.active_len(), self.page_size);
    }
}
