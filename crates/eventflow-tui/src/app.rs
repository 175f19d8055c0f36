use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use eventflow_core::{DialogForm, FlowResult, MultiSelect};
use eventflow_domain::{BoardState, ColumnKind, PendingDialog, Task, TaskDraft, TaskId};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::cursor::BoardCursor;
use crate::dialog::{handle_form_input, DialogAction};
use crate::events::{Event, EventHandler};
use crate::ui;

/// Field layout shared by the add, transform, and execute dialogs. Only the
/// task name is required; the rest are free-form opaque strings.
pub const TASK_FIELDS: [(&str, bool); 5] = [
    ("Name", true),
    ("Description", false),
    ("Table", false),
    ("URL", false),
    ("Params", false),
];

/// Transform categories offered by the standard -> bank dialog. Picking one
/// is a precondition for submission; the pick is not stored on the task.
pub const TRANSFORM_CATEGORIES: [&str; 3] = ["Phone update", "Email update", "Address update"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    AddTask,
    /// First phase of the transform dialog: choose a category.
    TransformPick,
    /// Second phase: edit the derived task's fields.
    TransformEdit,
    ExecuteTask,
    MergeTasks,
    ExportBoard,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub board: BoardState,
    pub cursor: BoardCursor,
    /// Raw payload id of the grabbed task or column, while a drag gesture
    /// is in flight. The host processes one gesture at a time.
    pub grab: Option<String>,
    pub form: DialogForm,
    pub merge_select: MultiSelect,
    pub category_cursor: usize,
    pub transform_category: Option<usize>,
    pub status: Option<String>,
}

impl App {
    pub fn new(board: BoardState) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            board,
            cursor: BoardCursor::new(),
            grab: None,
            form: DialogForm::default(),
            merge_select: MultiSelect::new(),
            category_cursor: 0,
            transform_category: None,
            status: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Per-column task counts in display order, for cursor clamping.
    pub fn task_counts(&self) -> Vec<usize> {
        self.board
            .columns()
            .iter()
            .map(|c| self.board.tasks_in(c.kind).len())
            .collect()
    }

    pub fn column_kind_at(&self, index: usize) -> Option<ColumnKind> {
        self.board.columns().get(index).map(|c| c.kind)
    }

    pub fn task_under_cursor(&self) -> Option<&Task> {
        let kind = self.column_kind_at(self.cursor.column)?;
        self.board.tasks_in(kind).get(self.cursor.row).copied()
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::KeyCode;

        self.status = None;

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key.code),
            AppMode::AddTask => match handle_form_input(&mut self.form, key.code) {
                DialogAction::Confirm => {
                    let draft = self.draft_from_form();
                    self.board.add_task(draft, ColumnKind::Standard);
                    self.close_dialog();
                }
                DialogAction::Cancel => self.close_dialog(),
                DialogAction::None => {}
            },
            AppMode::TransformPick => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    if self.category_cursor + 1 < TRANSFORM_CATEGORIES.len() {
                        self.category_cursor += 1;
                    }
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.category_cursor = self.category_cursor.saturating_sub(1);
                }
                KeyCode::Enter => {
                    self.transform_category = Some(self.category_cursor);
                    self.mode = AppMode::TransformEdit;
                }
                KeyCode::Esc => {
                    self.board.cancel_transform();
                    self.close_dialog();
                }
                _ => {}
            },
            AppMode::TransformEdit => match handle_form_input(&mut self.form, key.code) {
                DialogAction::Confirm => {
                    let draft = self.draft_from_form();
                    self.board.confirm_transform(draft);
                    self.close_dialog();
                }
                DialogAction::Cancel => {
                    self.board.cancel_transform();
                    self.close_dialog();
                }
                DialogAction::None => {}
            },
            AppMode::ExecuteTask => match handle_form_input(&mut self.form, key.code) {
                DialogAction::Confirm => {
                    let draft = self.draft_from_form();
                    self.board.confirm_execute(draft);
                    self.close_dialog();
                }
                DialogAction::Cancel => {
                    self.board.cancel_execute();
                    self.close_dialog();
                }
                DialogAction::None => {}
            },
            AppMode::MergeTasks => self.handle_merge_key(key.code),
            AppMode::ExportBoard => match handle_form_input(&mut self.form, key.code) {
                DialogAction::Confirm => {
                    let path = self.form.value(0).to_string();
                    self.status = Some(match self.export_to(&path) {
                        Ok(()) => format!("Exported to {path}"),
                        Err(e) => format!("Export failed: {e}"),
                    });
                    self.close_dialog_keep_status();
                }
                DialogAction::Cancel => self.close_dialog(),
                DialogAction::None => {}
            },
        }
    }

    fn handle_normal_key(&mut self, code: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;
        let counts = self.task_counts();

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('h') | KeyCode::Left => self.cursor.left(&counts),
            KeyCode::Char('l') | KeyCode::Right => self.cursor.right(&counts),
            KeyCode::Char('j') | KeyCode::Down => self.cursor.down(&counts),
            KeyCode::Char('k') | KeyCode::Up => self.cursor.up(),
            KeyCode::Char(' ') | KeyCode::Enter => self.grab_or_drop(),
            KeyCode::Char('c') => self.grab_column(),
            KeyCode::Esc => {
                if self.grab.take().is_some() {
                    self.board.drag_cancel();
                }
            }
            KeyCode::Char('a') => {
                if self.column_kind_at(self.cursor.column) == Some(ColumnKind::Standard) {
                    self.form = DialogForm::new(&TASK_FIELDS);
                    self.mode = AppMode::AddTask;
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.task_under_cursor().map(|t| t.id) {
                    self.board.delete_task(id);
                    self.clamp_cursor();
                }
            }
            KeyCode::Char('m') => {
                if self.column_kind_at(self.cursor.column) == Some(ColumnKind::Person) {
                    self.merge_select.clear();
                    self.mode = AppMode::MergeTasks;
                }
            }
            KeyCode::Char('x') => {
                let default_name = format!(
                    "eventflow-{}.json",
                    chrono::Utc::now().format("%Y%m%d-%H%M%S")
                );
                self.form = DialogForm::seeded(&[("File name", true)], &[&default_name]);
                self.mode = AppMode::ExportBoard;
            }
            _ => {}
        }
    }

    fn handle_merge_key(&mut self, code: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;
        let person_count = self.board.tasks_in(ColumnKind::Person).len();

        match code {
            KeyCode::Char('j') | KeyCode::Down => self.merge_select.next(person_count),
            KeyCode::Char('k') | KeyCode::Up => self.merge_select.prev(),
            KeyCode::Char(' ') => self.merge_select.toggle_current(),
            KeyCode::Enter => {
                // Submission stays disabled below two selections.
                if self.merge_select.meets_minimum(2) {
                    self.submit_merge();
                    self.close_dialog();
                }
            }
            KeyCode::Esc => self.close_dialog(),
            _ => {}
        }
    }

    fn submit_merge(&mut self) {
        let person: Vec<&Task> = self.board.tasks_in(ColumnKind::Person);
        let picked: Vec<&Task> = self
            .merge_select
            .picked()
            .iter()
            .filter_map(|&i| person.get(i).copied())
            .collect();
        let ids: Vec<TaskId> = picked.iter().map(|t| t.id).collect();

        let draft = TaskDraft::new(
            picked
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(" + "),
            "Merged from multiple tasks",
            "merged",
            "/api/merged",
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
        );
        self.board.merge_tasks(&ids, draft);
    }

    fn grab_or_drop(&mut self) {
        if let Some(grabbed) = self.grab.take() {
            let over = self.drop_target_raw(&grabbed);
            self.board.drag_end(&grabbed, over.as_deref());
            self.sync_after_drop();
        } else if let Some(id) = self.task_under_cursor().map(|t| t.id) {
            let raw = id.to_string();
            self.board.drag_start(&raw);
            self.grab = Some(raw);
        }
    }

    fn grab_column(&mut self) {
        if self.grab.is_none() {
            if let Some(kind) = self.column_kind_at(self.cursor.column) {
                let raw = kind.as_str().to_string();
                self.board.drag_start(&raw);
                self.grab = Some(raw);
            }
        }
    }

    /// What the grabbed payload is released over: the task under the cursor,
    /// or the cursor's column when its slot is empty. A grabbed column always
    /// targets the cursor's column.
    fn drop_target_raw(&self, grabbed: &str) -> Option<String> {
        let column = self.column_kind_at(self.cursor.column)?;
        if ColumnKind::parse(grabbed).is_some() {
            return Some(column.as_str().to_string());
        }
        match self.task_under_cursor() {
            Some(task) => Some(task.id.to_string()),
            None => Some(column.as_str().to_string()),
        }
    }

    /// A drop may have parked a dialog in the board's pending state; open
    /// the matching dialog seeded from the pending task.
    fn sync_after_drop(&mut self) {
        match self.board.pending().clone() {
            PendingDialog::Transforming { source } => {
                self.form = seeded_task_form(&source);
                self.category_cursor = 0;
                self.transform_category = None;
                self.mode = AppMode::TransformPick;
            }
            PendingDialog::Executing { task, .. } => {
                if let Some(task) = self.board.task(task) {
                    self.form = seeded_task_form(task);
                    self.mode = AppMode::ExecuteTask;
                }
            }
            PendingDialog::Idle => {}
        }
        self.clamp_cursor();
    }

    fn draft_from_form(&self) -> TaskDraft {
        TaskDraft::new(
            self.form.value(0).trim(),
            self.form.value(1),
            self.form.value(2),
            self.form.value(3),
            self.form.value(4),
        )
    }

    fn export_to(&self, path: &str) -> FlowResult<()> {
        let json = self.board.snapshot_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn close_dialog(&mut self) {
        self.status = None;
        self.close_dialog_keep_status();
    }

    fn close_dialog_keep_status(&mut self) {
        self.mode = AppMode::Normal;
        self.form = DialogForm::default();
        self.merge_select.clear();
        self.transform_category = None;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let counts = self.task_counts();
        self.cursor.clamp(&counts);
    }

    pub async fn run(&mut self) -> FlowResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Resize) | Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn seeded_task_form(task: &Task) -> DialogForm {
    DialogForm::seeded(
        &TASK_FIELDS,
        &[
            &task.name,
            &task.description,
            &task.table_name,
            &task.url,
            &task.params,
        ],
    )
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
