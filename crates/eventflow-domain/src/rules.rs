//! The transition rule table: what a completed drop does.
//!
//! The whole board's conditional behavior hangs off one lookup keyed by the
//! source and destination columns, so adding a column or a rule is a table
//! edit here rather than a hunt through the rendering code.

use crate::column::ColumnKind;
use crate::drag::DragData;

/// Action the board takes when a drag gesture completes over a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    /// Nothing to do.
    None,
    /// A column dropped over another column: reorder the column list.
    ReorderColumns,
    /// Plain task move/reorder through the reorder engine.
    MoveTask,
    /// standard -> bank: suspend the move and open the transform dialog.
    /// Confirming derives a new bank task; the standard source is untouched.
    OpenTransform,
    /// bank -> person: clone immediately under a fresh id, no dialog.
    CloneTask,
    /// person -> execute: move optimistically and open the execute dialog,
    /// rolling back to the pre-drag column on cancel.
    OpenExecute,
}

/// Resolve the action for a drop. Callers have already ruled out
/// `active == over` (that is always a no-op) and unresolvable payloads.
pub fn resolve(active: &DragData, over: &DragData) -> TransitionAction {
    match active {
        DragData::Column(_) => {
            if over.is_column() {
                TransitionAction::ReorderColumns
            } else {
                // A column released over a task card lands nowhere.
                TransitionAction::None
            }
        }
        DragData::Task(task) => resolve_task_drop(task.column_id, over.column_kind()),
    }
}

fn resolve_task_drop(from: ColumnKind, to: ColumnKind) -> TransitionAction {
    use ColumnKind::*;
    match (from, to) {
        (Standard, Bank) => TransitionAction::OpenTransform,
        (Bank, Person) => TransitionAction::CloneTask,
        (Person, Execute) => TransitionAction::OpenExecute,
        _ => TransitionAction::MoveTask,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use crate::task::{Task, TaskDraft};

    fn task_in(kind: ColumnKind) -> DragData {
        DragData::Task(Task::new(kind, TaskDraft::default()))
    }

    fn column(kind: ColumnKind) -> DragData {
        DragData::Column(Column::new(kind, kind.default_title()))
    }

    #[test]
    fn test_standard_to_bank_opens_transform() {
        let active = task_in(ColumnKind::Standard);
        assert_eq!(
            resolve(&active, &task_in(ColumnKind::Bank)),
            TransitionAction::OpenTransform
        );
        assert_eq!(
            resolve(&active, &column(ColumnKind::Bank)),
            TransitionAction::OpenTransform
        );
    }

    #[test]
    fn test_bank_to_person_clones() {
        let active = task_in(ColumnKind::Bank);
        assert_eq!(
            resolve(&active, &task_in(ColumnKind::Person)),
            TransitionAction::CloneTask
        );
        assert_eq!(
            resolve(&active, &column(ColumnKind::Person)),
            TransitionAction::CloneTask
        );
    }

    #[test]
    fn test_person_to_execute_opens_execute() {
        let active = task_in(ColumnKind::Person);
        assert_eq!(
            resolve(&active, &column(ColumnKind::Execute)),
            TransitionAction::OpenExecute
        );
    }

    #[test]
    fn test_unlisted_pairs_fall_through_to_move() {
        use ColumnKind::*;
        let special = [(Standard, Bank), (Bank, Person), (Person, Execute)];
        for from in ColumnKind::ALL {
            for to in ColumnKind::ALL {
                if special.contains(&(from, to)) {
                    continue;
                }
                assert_eq!(
                    resolve(&task_in(from), &column(to)),
                    TransitionAction::MoveTask,
                    "expected plain move for {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_reverse_direction_is_a_plain_move() {
        // The special rules are directional; dragging backwards reorders.
        assert_eq!(
            resolve(&task_in(ColumnKind::Bank), &column(ColumnKind::Standard)),
            TransitionAction::MoveTask
        );
        assert_eq!(
            resolve(&task_in(ColumnKind::Execute), &column(ColumnKind::Person)),
            TransitionAction::MoveTask
        );
    }

    #[test]
    fn test_column_over_column_reorders() {
        assert_eq!(
            resolve(&column(ColumnKind::Standard), &column(ColumnKind::Execute)),
            TransitionAction::ReorderColumns
        );
    }

    #[test]
    fn test_column_over_task_does_nothing() {
        assert_eq!(
            resolve(&column(ColumnKind::Bank), &task_in(ColumnKind::Person)),
            TransitionAction::None
        );
    }
}
