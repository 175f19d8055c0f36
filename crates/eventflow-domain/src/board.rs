//! The board controller: exclusive owner of the column and task lists.
//!
//! The task list is a single flat ordered sequence shared by all columns;
//! column membership is a filter over it, not separate storage. Global list
//! index is the authoritative ordering signal, which can produce visually
//! surprising results when columns are interleaved (see DESIGN.md).

use eventflow_core::{FlowError, FlowResult};
use uuid::Uuid;

use crate::column::{Column, ColumnKind};
use crate::drag::DragData;
use crate::reorder::reorder;
use crate::rules::{self, TransitionAction};
use crate::seed;
use crate::task::{Task, TaskDraft, TaskId};

/// Which dialog, if any, the board is waiting on.
///
/// This is the pending-dialog state machine: the only way out of a non-idle
/// state is one of the `confirm_*`/`cancel_*` resolutions, each of which
/// resets to `Idle`, so stale rollback targets cannot leak into the next
/// gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PendingDialog {
    #[default]
    Idle,
    /// A standard -> bank drop suspended behind the transform dialog. The
    /// source is a snapshot used to seed the dialog; the original task is
    /// never touched.
    Transforming { source: Task },
    /// A person -> execute drop already applied optimistically. `rollback`
    /// is the column the task occupied when the drag began.
    Executing { task: TaskId, rollback: ColumnKind },
}

/// One in-flight drag gesture, recorded at `drag_start`.
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Task { id: TaskId, origin: ColumnKind },
    Column(ColumnKind),
}

#[derive(Debug, Clone)]
pub struct BoardState {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    pending: PendingDialog,
    gesture: Option<Gesture>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            columns: Column::defaults(),
            tasks: Vec::new(),
            pending: PendingDialog::Idle,
            gesture: None,
        }
    }

    pub fn seeded() -> Self {
        let mut board = Self::new();
        board.tasks = seed::sample_tasks();
        board
    }

    // Read-only views. No collaborator writes to these collections directly.

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending(&self) -> &PendingDialog {
        &self.pending
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks belonging to one column, in global-list order.
    pub fn tasks_in(&self, kind: ColumnKind) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.column_id == kind).collect()
    }

    fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    // -- Direct operations -----------------------------------------------

    /// Append a new task with a fresh unique id.
    pub fn add_task(&mut self, draft: TaskDraft, column: ColumnKind) -> TaskId {
        let task = Task::new(column, draft);
        let id = task.id;
        tracing::debug!(%id, %column, name = %task.name, "add task");
        self.push_task(task);
        id
    }

    /// Remove a task by id. Deleting an unknown id is an idempotent no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            tracing::debug!(%id, "delete ignored: no such task");
        }
    }

    /// Merge at least two tasks into one new `person` task carrying value
    /// snapshots of its sources. Sources stay untouched in their columns.
    ///
    /// Refused (returns `None`) rather than raised when fewer than two ids
    /// are given or any id no longer resolves.
    pub fn merge_tasks(&mut self, ids: &[TaskId], draft: TaskDraft) -> Option<TaskId> {
        if ids.len() < 2 {
            tracing::debug!(count = ids.len(), "merge refused: need at least 2 tasks");
            return None;
        }
        let snapshots: Option<Vec<Task>> =
            ids.iter().map(|&id| self.task(id).cloned()).collect();
        let Some(snapshots) = snapshots else {
            tracing::debug!("merge refused: stale task id");
            return None;
        };

        let task = Task::merged(ColumnKind::Person, draft, snapshots);
        let id = task.id;
        tracing::debug!(%id, sources = ids.len(), "merge tasks");
        self.push_task(task);
        Some(id)
    }

    // -- Drag gesture ----------------------------------------------------

    /// Resolve an opaque drag payload id against the board. `None` means the
    /// payload carries no draggable data; callers short-circuit on it.
    pub fn classify(&self, raw: &str) -> Option<DragData> {
        if let Ok(id) = raw.parse::<Uuid>() {
            return self.task(id).cloned().map(DragData::Task);
        }
        let kind = ColumnKind::parse(raw)?;
        self.columns
            .iter()
            .find(|c| c.kind == kind)
            .cloned()
            .map(DragData::Column)
    }

    /// Begin a gesture, remembering the task's origin column for an exact
    /// rollback if the drop turns into an execute dialog.
    pub fn drag_start(&mut self, raw: &str) {
        if self.pending != PendingDialog::Idle {
            tracing::debug!("drag start ignored: dialog pending");
            return;
        }
        self.gesture = match self.classify(raw) {
            Some(DragData::Task(task)) => Some(Gesture::Task {
                id: task.id,
                origin: task.column_id,
            }),
            Some(DragData::Column(column)) => Some(Gesture::Column(column.kind)),
            None => None,
        };
    }

    /// Live reorder while a task is dragged over another task. Column
    /// membership is not touched here; that is decided at drop time.
    pub fn drag_over(&mut self, active_raw: &str, over_raw: &str) {
        if self.pending != PendingDialog::Idle || active_raw == over_raw {
            return;
        }
        let (Some(DragData::Task(active)), Some(DragData::Task(over))) =
            (self.classify(active_raw), self.classify(over_raw))
        else {
            return;
        };
        if let (Some(a), Some(o)) = (self.index_of(active.id), self.index_of(over.id)) {
            self.tasks = reorder(&self.tasks, a, o);
        }
    }

    /// Complete a gesture. Consults the transition rule table and either
    /// mutates the lists in place or parks a dialog in `pending`.
    pub fn drag_end(&mut self, active_raw: &str, over_raw: Option<&str>) {
        let gesture = self.gesture.take();

        if self.pending != PendingDialog::Idle {
            tracing::debug!("drop ignored: dialog pending");
            return;
        }

        let Some(over_raw) = over_raw else {
            return; // released outside any drop target
        };
        if active_raw == over_raw {
            return;
        }
        let (Some(active), Some(over)) = (self.classify(active_raw), self.classify(over_raw))
        else {
            // Stale or foreign payload: ignore rather than corrupt the board.
            tracing::debug!(active_raw, over_raw, "drop ignored: unresolvable payload");
            return;
        };

        match rules::resolve(&active, &over) {
            TransitionAction::None => {}
            TransitionAction::ReorderColumns => {
                self.reorder_columns(active.column_kind(), over.column_kind());
            }
            TransitionAction::MoveTask => {
                if let DragData::Task(task) = active {
                    self.move_task(task.id, &over);
                }
            }
            TransitionAction::OpenTransform => {
                if let DragData::Task(source) = active {
                    tracing::debug!(id = %source.id, "suspend drop: transform dialog");
                    self.pending = PendingDialog::Transforming { source };
                }
            }
            TransitionAction::CloneTask => {
                if let DragData::Task(source) = active {
                    let copy = source.clone_into(ColumnKind::Person);
                    tracing::debug!(from = %source.id, to = %copy.id, "clone into person");
                    self.push_task(copy);
                }
            }
            TransitionAction::OpenExecute => {
                if let DragData::Task(task) = active {
                    self.begin_execute(task, gesture);
                }
            }
        }
    }

    /// A cancelled gesture is equivalent to "no transition occurred".
    pub fn drag_cancel(&mut self) {
        if self.gesture.take().is_some() {
            tracing::debug!("drag cancelled");
        }
    }

    fn reorder_columns(&mut self, from: ColumnKind, to: ColumnKind) {
        let a = self.columns.iter().position(|c| c.kind == from);
        let b = self.columns.iter().position(|c| c.kind == to);
        if let (Some(a), Some(b)) = (a, b) {
            self.columns = reorder(&self.columns, a, b);
        }
    }

    fn move_task(&mut self, id: TaskId, over: &DragData) {
        let Some(a_idx) = self.index_of(id) else {
            return;
        };
        match over {
            DragData::Column(column) => {
                // Dropping on a column adopts it but keeps the task at its
                // pre-existing slot in the flat list (see DESIGN.md).
                self.tasks[a_idx].column_id = column.kind;
            }
            DragData::Task(target) => {
                let Some(o_idx) = self.index_of(target.id) else {
                    return;
                };
                if self.tasks[a_idx].column_id != self.tasks[o_idx].column_id {
                    // Cross-column: adopt the target's column and land
                    // immediately before its former position.
                    self.tasks[a_idx].column_id = self.tasks[o_idx].column_id;
                    self.tasks = reorder(&self.tasks, a_idx, o_idx.saturating_sub(1));
                } else {
                    self.tasks = reorder(&self.tasks, a_idx, o_idx);
                }
            }
        }
    }

    fn begin_execute(&mut self, task: Task, gesture: Option<Gesture>) {
        // The rollback target is the column held at drag start; if the
        // gesture record is missing (stale closure), fall back to the
        // column the task is in right now.
        let rollback = match gesture {
            Some(Gesture::Task { id, origin }) if id == task.id => origin,
            _ => task.column_id,
        };
        if let Some(live) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            live.column_id = ColumnKind::Execute;
            tracing::debug!(id = %task.id, %rollback, "optimistic move into execute");
            self.pending = PendingDialog::Executing {
                task: task.id,
                rollback,
            };
        }
    }

    // -- Dialog resolution -----------------------------------------------

    /// Confirm the transform dialog: derive a new bank task from the edited
    /// payload. The standard source stays where it is.
    pub fn confirm_transform(&mut self, draft: TaskDraft) -> Option<TaskId> {
        match std::mem::take(&mut self.pending) {
            PendingDialog::Transforming { source } => {
                let task = Task::new(ColumnKind::Bank, draft);
                let id = task.id;
                tracing::debug!(from = %source.id, to = %id, "transform confirmed");
                self.push_task(task);
                Some(id)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Cancel the transform dialog: no change at all.
    pub fn cancel_transform(&mut self) {
        if matches!(self.pending, PendingDialog::Transforming { .. }) {
            self.pending = PendingDialog::Idle;
        }
    }

    /// Confirm the execute dialog, committing the (possibly edited) fields.
    /// The task already sits in `execute` from the optimistic move.
    pub fn confirm_execute(&mut self, edited: TaskDraft) {
        match std::mem::take(&mut self.pending) {
            PendingDialog::Executing { task, .. } => {
                if let Some(live) = self.tasks.iter_mut().find(|t| t.id == task) {
                    live.apply_edit(edited);
                    tracing::debug!(id = %task, "execute confirmed");
                }
            }
            other => self.pending = other,
        }
    }

    /// Cancel the execute dialog, restoring the pre-drag column exactly.
    pub fn cancel_execute(&mut self) {
        match std::mem::take(&mut self.pending) {
            PendingDialog::Executing { task, rollback } => {
                if let Some(live) = self.tasks.iter_mut().find(|t| t.id == task) {
                    live.column_id = rollback;
                    tracing::debug!(id = %task, %rollback, "execute cancelled, rolled back");
                }
            }
            other => self.pending = other,
        }
    }

    // -- Export ----------------------------------------------------------

    /// Serialize the task list for the export affordance. The board itself
    /// never reads this back; session state stays in memory.
    pub fn snapshot_json(&self) -> FlowResult<String> {
        serde_json::to_string_pretty(&self.tasks)
            .map_err(|e| FlowError::Serialization(e.to_string()))
    }

    fn push_task(&mut self, task: Task) {
        debug_assert!(
            !self.tasks.iter().any(|t| t.id == task.id),
            "task id collision"
        );
        self.tasks.push(task);
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
