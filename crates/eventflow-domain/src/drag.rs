use crate::column::{Column, ColumnKind};
use crate::task::Task;

/// What a drag payload turned out to carry once classified against the
/// board: either a task card or a column header.
///
/// Classification itself lives on [`crate::BoardState::classify`], since an
/// opaque payload id can only be resolved against the live board. A payload
/// that matches neither is reported as `None` there — a normal outcome, not
/// an error — and every consumer short-circuits on it.
#[derive(Debug, Clone, PartialEq)]
pub enum DragData {
    Task(Task),
    Column(Column),
}

impl DragData {
    /// The column this payload belongs to: the task's own column, or the
    /// column itself.
    pub fn column_kind(&self) -> ColumnKind {
        match self {
            DragData::Task(task) => task.column_id,
            DragData::Column(column) => column.kind,
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, DragData::Column(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;

    #[test]
    fn test_column_kind_of_task_payload() {
        let task = Task::new(ColumnKind::Bank, TaskDraft::default());
        let data = DragData::Task(task);
        assert_eq!(data.column_kind(), ColumnKind::Bank);
        assert!(!data.is_column());
    }

    #[test]
    fn test_column_kind_of_column_payload() {
        let data = DragData::Column(Column::new(ColumnKind::Person, "Personal Events"));
        assert_eq!(data.column_kind(), ColumnKind::Person);
        assert!(data.is_column());
    }
}
