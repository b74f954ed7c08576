use crate::member::{Member, MemberId};
use crate::table::{Action, AdminTable, Outcome, TableView};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    pub table: AdminTable,
    /// Row cursor within the visible page.
    pub cursor: usize,
    pub loading: bool,
    pub search_mode: bool,
    pub show_info: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub status: Option<StatusMessage>,
    /// Set when the theme changed and the config file should be rewritten.
    pub pending_config_save: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            table: AdminTable::new(),
            cursor: 0,
            loading: true,
            search_mode: false,
            show_info: false,
            should_quit: false,
            theme,
            status: None,
            pending_config_save: false,
        }
    }

    pub fn load_members(&mut self, members: Vec<Member>) {
        self.table.load(members);
        self.loading = false;
        self.clamp_cursor();
    }

    /// The initial fetch failed: stop showing the loading marker and keep the
    /// table empty.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn view(&self) -> TableView {
        TableView::from_table(&self.table)
    }

    pub fn visible_len(&self) -> usize {
        self.table.visible().len()
    }

    pub fn cursor_member_id(&self) -> Option<MemberId> {
        self.table.visible().get(self.cursor).map(|m| m.id)
    }

    /// True while the cursor sits on the row open in the editor; keys then go
    /// to the edit buffer.
    pub fn is_editing_cursor_row(&self) -> bool {
        match (self.table.editor().target(), self.cursor_member_id()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        }
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    pub fn next(&mut self) {
        let count = self.visible_len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.visible_len();
        if count > 0 {
            if self.cursor > 0 {
                self.cursor -= 1;
            } else {
                self.cursor = count - 1;
            }
        }
    }

    pub fn next_page(&mut self) {
        self.apply_page(Action::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.apply_page(Action::PreviousPage);
    }

    pub fn first_page(&mut self) {
        self.apply_page(Action::FirstPage);
    }

    pub fn last_page(&mut self) {
        self.apply_page(Action::LastPage);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.apply_page(Action::GoToPage(page));
    }

    fn apply_page(&mut self, action: Action) {
        if self.dispatch(action) == Outcome::Applied {
            self.cursor = 0;
        }
    }

    pub fn toggle_current(&mut self) {
        let Some(id) = self.cursor_member_id() else {
            return;
        };
        let checked = !self
            .table
            .store()
            .get(id)
            .is_some_and(|m| m.selected);
        self.dispatch(Action::ToggleOne { id, checked });
    }

    pub fn toggle_all(&mut self) {
        let checked = !self.table.store().all_selected();
        self.dispatch(Action::ToggleAll(checked));
    }

    /// Open the cursor row for editing, or save it if it is already open.
    pub fn edit_or_save(&mut self) {
        if self.is_editing_cursor_row() {
            self.dispatch(Action::Save);
        } else if let Some(id) = self.cursor_member_id() {
            self.dispatch(Action::BeginEdit(id));
        }
    }

    pub fn delete_current(&mut self) {
        if let Some(id) = self.cursor_member_id() {
            self.dispatch(Action::Delete(id));
        }
    }

    pub fn delete_selected(&mut self) {
        self.dispatch(Action::DeleteSelected);
    }

    pub fn edit_push_char(&mut self, c: char) {
        if let Some(buffer) = self.table.edit_buffer_mut() {
            buffer.push_char(c);
        }
    }

    pub fn edit_pop_char(&mut self) {
        if let Some(buffer) = self.table.edit_buffer_mut() {
            buffer.pop_char();
        }
    }

    pub fn edit_focus_next(&mut self) {
        if let Some(buffer) = self.table.edit_buffer_mut() {
            buffer.focus_next();
        }
    }

    pub fn edit_focus_previous(&mut self) {
        if let Some(buffer) = self.table.edit_buffer_mut() {
            buffer.focus_previous();
        }
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    /// Leave the search box keeping the query.
    pub fn confirm_search(&mut self) {
        self.search_mode = false;
    }

    /// Leave the search box and clear the query.
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
        self.set_query(String::new());
    }

    pub fn search_push_char(&mut self, c: char) {
        let mut query = self.table.query().text().to_string();
        query.push(c);
        self.set_query(query);
    }

    pub fn search_pop_char(&mut self) {
        let mut query = self.table.query().text().to_string();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    fn set_query(&mut self, query: String) {
        if self.dispatch(Action::SetQuery(query)) == Outcome::Applied {
            self.cursor = 0;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        self.pending_config_save = true;
        self.set_status(format!("Theme: {}", self.theme.name), StatusKind::Info);
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// Run an action on the table, report it on the status line and keep the
    /// cursor on a visible row. Any other applied action clears the status.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.table.dispatch(action);
        match outcome {
            Outcome::Saved(id) => self.set_status(format!("Saved member {id}"), StatusKind::Success),
            Outcome::Deleted(1) => self.set_status("Deleted 1 member", StatusKind::Warning),
            Outcome::Deleted(n) => self.set_status(format!("Deleted {n} members"), StatusKind::Warning),
            Outcome::Applied => self.status = None,
            Outcome::Ignored => {}
        }
        self.clamp_cursor();
        outcome
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }
}
