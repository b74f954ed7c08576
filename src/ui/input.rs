//! # Key Handling
//!
//! Maps terminal key events onto [`App`] operations. Modes are checked in
//! priority order: info modal, search box, the row being edited, then the
//! table itself.

use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.show_info {
        if matches!(key.code, KeyCode::Char('i' | '?') | KeyCode::Esc) {
            app.toggle_info();
        }
        return;
    }

    if app.search_mode {
        handle_search_key(app, key);
    } else if app.is_editing_cursor_row() {
        handle_edit_key(app, key);
    } else {
        handle_table_key(app, key);
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_search_mode(),
        KeyCode::Enter => app.confirm_search(),
        KeyCode::Backspace => app.search_pop_char(),
        KeyCode::Down => app.next(),
        KeyCode::Up => app.previous(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_push_char(c);
        }
        _ => {}
    }
}

// Esc is unbound: an open edit only ends through save or a checkbox action.
fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.edit_or_save(),
        KeyCode::Tab => app.edit_focus_next(),
        KeyCode::BackTab => app.edit_focus_previous(),
        KeyCode::Backspace => app.edit_pop_char(),
        KeyCode::Down => app.next(),
        KeyCode::Up => app.previous(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_push_char(c);
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Char('l') | KeyCode::Right => app.next_page(),
        KeyCode::Char('h') | KeyCode::Left => app.previous_page(),
        KeyCode::Char('g') | KeyCode::Home => app.first_page(),
        KeyCode::Char('G') | KeyCode::End => app.last_page(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(page) = c.to_digit(10) {
                app.go_to_page(page as usize);
            }
        }
        KeyCode::Char(' ') => app.toggle_current(),
        KeyCode::Char('a') => app.toggle_all(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_or_save(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_current(),
        KeyCode::Char('D') => app.delete_selected(),
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('i' | '?') => app.toggle_info(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Member;
    use crate::ui::theme::Theme;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn test_app() -> App {
        let mut app = App::new(Theme::default_theme().clone());
        app.load_members(vec![
            Member::new(1, "Alice", "a@x.com", "admin"),
            Member::new(2, "Bob", "b@x.com", "member"),
        ]);
        app
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_chars_are_not_typed_into_search() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert!(app.search_mode);
        assert_eq!(app.table.query().text(), "");

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.table.query().text(), "b");
    }

    #[test]
    fn test_q_is_typed_while_editing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(
            app.table.editor().buffer().map(|b| b.name.as_str()),
            Some("Aliceq")
        );
    }

    #[test]
    fn test_esc_does_not_close_editor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.table.editor().is_editing());
    }

    #[test]
    fn test_info_modal_swallows_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_info);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.table.store().len(), 2);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_info);
    }
}
