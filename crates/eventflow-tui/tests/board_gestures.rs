use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use eventflow_core::DialogForm;
use eventflow_domain::{BoardState, ColumnKind, PendingDialog};
use eventflow_tui::{App, AppMode};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn seeded_app() -> App {
    // Column order: standard, bank, person, execute.
    App::new(BoardState::seeded())
}

#[test]
fn grab_bank_task_and_drop_on_person_clones_it() {
    let mut app = seeded_app();
    let before = app.board.tasks().len();

    press(&mut app, KeyCode::Right); // bank column
    press(&mut app, KeyCode::Char(' ')); // grab first bank task
    assert!(app.grab.is_some());

    press(&mut app, KeyCode::Right); // person column
    press(&mut app, KeyCode::Char(' ')); // drop

    assert!(app.grab.is_none());
    assert_eq!(app.board.tasks().len(), before + 1);
    assert_eq!(app.board.tasks_in(ColumnKind::Bank).len(), 2);
    assert_eq!(app.board.tasks_in(ColumnKind::Person).len(), 3);
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn drop_on_execute_opens_dialog_and_esc_rolls_back() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right); // person column
    let id = app.task_under_cursor().unwrap().id;

    press(&mut app, KeyCode::Char(' ')); // grab
    press(&mut app, KeyCode::Right); // execute column (empty)
    press(&mut app, KeyCode::Char(' ')); // drop

    assert_eq!(app.mode, AppMode::ExecuteTask);
    assert!(matches!(app.board.pending(), PendingDialog::Executing { .. }));
    assert_eq!(app.board.task(id).unwrap().column_id, ColumnKind::Execute);

    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.board.pending(), &PendingDialog::Idle);
    assert_eq!(app.board.task(id).unwrap().column_id, ColumnKind::Person);
}

#[test]
fn drop_on_execute_then_confirm_commits_edited_name() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    let id = app.task_under_cursor().unwrap().id;

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.mode, AppMode::ExecuteTask);

    type_text(&mut app, " now"); // append to the seeded name
    press(&mut app, KeyCode::Enter);

    let task = app.board.task(id).unwrap();
    assert_eq!(task.column_id, ColumnKind::Execute);
    assert!(task.name.ends_with(" now"));
    assert_eq!(app.board.pending(), &PendingDialog::Idle);
}

#[test]
fn standard_to_bank_walks_through_transform_dialog() {
    let mut app = seeded_app();
    let source_id = app.task_under_cursor().unwrap().id;
    let source_before = app.board.task(source_id).unwrap().clone();

    press(&mut app, KeyCode::Char(' ')); // grab standard task
    press(&mut app, KeyCode::Right); // bank column
    press(&mut app, KeyCode::Char(' ')); // drop

    assert_eq!(app.mode, AppMode::TransformPick);
    press(&mut app, KeyCode::Char('j')); // pick second category
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, AppMode::TransformEdit);

    // The form is seeded from the source, so name is already non-empty.
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.board.task(source_id), Some(&source_before));
    assert_eq!(app.board.tasks_in(ColumnKind::Bank).len(), 3);
}

#[test]
fn transform_pick_esc_cancels_without_changes() {
    let mut app = seeded_app();
    let before = app.board.tasks().to_vec();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.mode, AppMode::TransformPick);

    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.board.pending(), &PendingDialog::Idle);
    assert_eq!(app.board.tasks(), &before[..]);
}

#[test]
fn esc_cancels_a_grab_without_dropping() {
    let mut app = seeded_app();
    let before = app.board.tasks().to_vec();

    press(&mut app, KeyCode::Char(' '));
    assert!(app.grab.is_some());
    press(&mut app, KeyCode::Esc);
    assert!(app.grab.is_none());
    assert_eq!(app.board.tasks(), &before[..]);
}

#[test]
fn add_dialog_requires_a_name_before_submitting() {
    let mut app = App::new(BoardState::new());

    press(&mut app, KeyCode::Char('a')); // cursor starts on standard
    assert_eq!(app.mode, AppMode::AddTask);

    press(&mut app, KeyCode::Enter); // refused: name empty
    assert_eq!(app.mode, AppMode::AddTask);
    assert!(app.board.tasks().is_empty());

    type_text(&mut app, "New event");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Normal);
    let standard = app.board.tasks_in(ColumnKind::Standard);
    assert_eq!(standard.len(), 1);
    assert_eq!(standard[0].name, "New event");
}

#[test]
fn add_is_only_offered_on_the_standard_column() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Right); // bank
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn merge_dialog_needs_two_selections() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right); // person column
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.mode, AppMode::MergeTasks);

    press(&mut app, KeyCode::Char(' ')); // pick first
    press(&mut app, KeyCode::Enter); // refused: only one picked
    assert_eq!(app.mode, AppMode::MergeTasks);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' ')); // pick second
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Normal);
    let person = app.board.tasks_in(ColumnKind::Person);
    assert_eq!(person.len(), 3);
    let merged = person.last().unwrap();
    assert_eq!(merged.source_tasks.as_ref().unwrap().len(), 2);
    assert_eq!(merged.table_name, "merged");
}

#[test]
fn delete_removes_task_under_cursor() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Right); // bank, 2 tasks
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.board.tasks_in(ColumnKind::Bank).len(), 1);
}

#[test]
fn grab_column_and_drop_reorders_columns() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('c')); // grab standard column
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' ')); // drop over bank

    let kinds: Vec<ColumnKind> = app.board.columns().iter().map(|c| c.kind).collect();
    assert_eq!(kinds[0], ColumnKind::Bank);
    assert_eq!(kinds[1], ColumnKind::Standard);
}

#[test]
fn export_writes_task_snapshot_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let path_str = path.to_str().unwrap().to_string();

    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.mode, AppMode::ExportBoard);
    app.form = DialogForm::seeded(&[("File name", true)], &[&path_str]);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Normal);
    assert!(app.status.as_deref().unwrap().starts_with("Exported"));
    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), app.board.tasks().len());
}
