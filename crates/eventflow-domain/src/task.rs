use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnKind;

pub type TaskId = Uuid;

/// The editable fields collected by the add, transform, and execute dialogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub table_name: String,
    pub url: String,
    pub params: String,
}

impl TaskDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        table_name: impl Into<String>,
        url: impl Into<String>,
        params: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            table_name: table_name.into(),
            url: url.into(),
            params: params.into(),
        }
    }
}

/// A business-event task on the board.
///
/// `url` and `params` are opaque strings; nothing in this codebase ever
/// dispatches them over a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnKind,
    pub name: String,
    pub description: String,
    pub table_name: String,
    pub url: String,
    pub params: String,
    /// Value snapshots of the tasks this one was merged from, in pick order.
    /// Present only on tasks created by a merge, and never empty then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tasks: Option<Vec<Task>>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(column_id: ColumnKind, draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            column_id,
            name: draft.name,
            description: draft.description,
            table_name: draft.table_name,
            url: draft.url,
            params: draft.params,
            source_tasks: None,
            created_at: Utc::now(),
        }
    }

    /// Build a merged task carrying full snapshots of its sources.
    pub fn merged(column_id: ColumnKind, draft: TaskDraft, sources: Vec<Task>) -> Self {
        let mut task = Task::new(column_id, draft);
        task.source_tasks = Some(sources);
        task
    }

    /// Shallow copy into another column under a fresh id. The clone shares
    /// field values with the source but is an independent task from then on.
    pub fn clone_into(&self, column_id: ColumnKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            column_id,
            created_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Commit edited dialog fields in place. Identity and column are
    /// untouched; those are owned by the board's transition logic.
    pub fn apply_edit(&mut self, edited: TaskDraft) {
        self.name = edited.name;
        self.description = edited.description;
        self.table_name = edited.table_name;
        self.url = edited.url;
        self.params = edited.params;
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            table_name: self.table_name.clone(),
            url: self.url.clone(),
            params: self.params.clone(),
        }
    }
}
