use crossterm::event::KeyCode;
use eventflow_core::DialogForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Route a key into a dialog form. Enter confirms only once every required
/// field is filled; until then it is swallowed, mirroring a disabled submit
/// button.
pub fn handle_form_input(form: &mut DialogForm, key_code: KeyCode) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if form.is_submittable() {
                DialogAction::Confirm
            } else {
                DialogAction::None
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            DialogAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            DialogAction::None
        }
        KeyCode::Char(c) => {
            form.focused_mut().insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            form.focused_mut().backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            form.focused_mut().delete();
            DialogAction::None
        }
        KeyCode::Left => {
            form.focused_mut().move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            form.focused_mut().move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            form.focused_mut().move_home();
            DialogAction::None
        }
        KeyCode::End => {
            form.focused_mut().move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}
