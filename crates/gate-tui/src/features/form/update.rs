//! Login form reducer.
//!
//! Handles keystrokes, submission, and lookup results. Functions here only
//! touch `FormState`; turning an action into effects is the top-level
//! reducer's job because it owns the task sequence.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gate_core::users::User;

use super::state::{Focus, FormState};
use super::text_field::TextField;

/// What a key press asks the app to do beyond editing the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    CancelLookup,
    Quit,
}

/// Handles a key press on the form.
pub fn handle_key(form: &mut FormState, key: KeyEvent) -> FormAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => FormAction::Quit,
        KeyCode::Esc => {
            if form.loading {
                FormAction::CancelLookup
            } else {
                FormAction::Quit
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            FormAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.prev();
            FormAction::None
        }
        KeyCode::Enter => match form.focus {
            Focus::Username => {
                form.focus = Focus::Password;
                FormAction::None
            }
            Focus::Password | Focus::Submit => FormAction::Submit,
        },
        KeyCode::Char(' ') if form.focus == Focus::Submit => FormAction::Submit,
        _ => {
            if let Some(field) = form.focused_field_mut() {
                edit_field(field, key.code, ctrl, alt);
            }
            FormAction::None
        }
    }
}

fn edit_field(field: &mut TextField, code: KeyCode, ctrl: bool, alt: bool) {
    match code {
        KeyCode::Char('u') if ctrl => field.clear(),
        KeyCode::Char('a') if ctrl => field.move_home(),
        KeyCode::Char('e') if ctrl => field.move_end(),
        KeyCode::Char(ch) if !ctrl && !alt => field.insert_char(ch),
        KeyCode::Backspace => field.delete_prev(),
        KeyCode::Delete => field.delete_next(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

/// Inserts pasted text into the focused field.
pub fn handle_paste(form: &mut FormState, text: &str) {
    if let Some(field) = form.focused_field_mut() {
        field.insert_str(text);
    }
}

/// Marks the form as loading if submission is allowed.
///
/// Returns false (and changes nothing) when a field is empty or a lookup
/// is already in flight.
pub fn begin_submit(form: &mut FormState) -> bool {
    if !form.can_submit() || form.loading {
        return false;
    }
    form.loading = true;
    form.error = false;
    true
}

/// Applies the outcome of a lookup.
pub fn handle_lookup_result(form: &mut FormState, result: Result<User, String>) {
    form.loading = false;
    match result {
        Ok(user) => {
            form.error = false;
            form.user = Some(user);
        }
        Err(_) => form.error = true,
    }
}

/// Drops the pending lookup without touching the error or user.
pub fn cancel_lookup(form: &mut FormState) {
    form.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut FormState, text: &str) {
        for ch in text.chars() {
            handle_key(form, key(KeyCode::Char(ch)));
        }
    }

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.username.insert_str("test");
        form.password.insert_str("test");
        form
    }

    #[test]
    fn test_typing_updates_username() {
        let mut form = FormState::new();
        type_text(&mut form, "test");
        assert_eq!(form.username.value(), "test");
        assert_eq!(form.password.value(), "");
    }

    #[test]
    fn test_typing_updates_password_after_tab() {
        let mut form = FormState::new();
        handle_key(&mut form, key(KeyCode::Tab));
        type_text(&mut form, "test");
        assert_eq!(form.password.value(), "test");
        assert_eq!(form.username.value(), "");
    }

    #[test]
    fn test_enter_on_username_moves_to_password() {
        let mut form = FormState::new();
        let action = handle_key(&mut form, key(KeyCode::Enter));
        assert_eq!(action, FormAction::None);
        assert_eq!(form.focus, Focus::Password);
    }

    #[test]
    fn test_enter_on_password_submits() {
        let mut form = filled();
        form.focus = Focus::Password;
        assert_eq!(handle_key(&mut form, key(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn test_space_on_button_submits_but_not_in_field() {
        let mut form = filled();
        form.focus = Focus::Submit;
        assert_eq!(
            handle_key(&mut form, key(KeyCode::Char(' '))),
            FormAction::Submit
        );

        form.focus = Focus::Username;
        assert_eq!(
            handle_key(&mut form, key(KeyCode::Char(' '))),
            FormAction::None
        );
        assert_eq!(form.username.value(), "test ");
    }

    #[test]
    fn test_typing_on_button_is_ignored() {
        let mut form = FormState::new();
        form.focus = Focus::Submit;
        type_text(&mut form, "abc");
        assert!(form.username.is_empty());
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_ctrl_u_clears_focused_field() {
        let mut form = filled();
        handle_key(
            &mut form,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert!(form.username.is_empty());
        assert_eq!(form.password.value(), "test");
    }

    #[test]
    fn test_esc_quits_when_idle_and_cancels_when_loading() {
        let mut form = filled();
        assert_eq!(handle_key(&mut form, key(KeyCode::Esc)), FormAction::Quit);

        form.loading = true;
        assert_eq!(
            handle_key(&mut form, key(KeyCode::Esc)),
            FormAction::CancelLookup
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut form = filled();
        form.loading = true;
        let action = handle_key(
            &mut form,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(action, FormAction::Quit);
        assert_eq!(form.username.value(), "test");
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut form = FormState::new();
        form.focus = Focus::Password;
        handle_paste(&mut form, "hunter2\n");
        assert_eq!(form.password.value(), "hunter2");
    }

    #[test]
    fn test_begin_submit_requires_both_fields() {
        let mut form = FormState::new();
        form.username.insert_str("test");
        assert!(!begin_submit(&mut form));
        assert!(!form.loading);
    }

    #[test]
    fn test_begin_submit_sets_loading_and_clears_error() {
        let mut form = filled();
        form.error = true;
        assert!(begin_submit(&mut form));
        assert!(form.loading);
        assert!(!form.error);
    }

    #[test]
    fn test_begin_submit_is_noop_while_loading() {
        let mut form = filled();
        assert!(begin_submit(&mut form));
        assert!(!begin_submit(&mut form));
        assert!(form.loading);
    }

    #[test]
    fn test_lookup_success_stores_user() {
        let mut form = filled();
        begin_submit(&mut form);
        let user = User {
            id: 1,
            name: "John".to_string(),
        };
        handle_lookup_result(&mut form, Ok(user.clone()));
        assert!(!form.loading);
        assert!(!form.error);
        assert_eq!(form.user, Some(user));
    }

    #[test]
    fn test_lookup_failure_sets_error_and_keeps_previous_user() {
        let mut form = filled();
        let user = User {
            id: 1,
            name: "John".to_string(),
        };
        form.user = Some(user.clone());
        begin_submit(&mut form);
        handle_lookup_result(&mut form, Err("connection refused".to_string()));
        assert!(!form.loading);
        assert!(form.error);
        assert_eq!(form.user, Some(user));
    }

    #[test]
    fn test_cancel_lookup_clears_loading_only() {
        let mut form = filled();
        begin_submit(&mut form);
        cancel_lookup(&mut form);
        assert!(!form.loading);
        assert!(!form.error);
        assert!(form.user.is_none());
    }
}
