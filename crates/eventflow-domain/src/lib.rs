pub mod board;
pub mod column;
pub mod drag;
pub mod reorder;
pub mod rules;
pub mod seed;
pub mod task;

pub use board::{BoardState, PendingDialog};
pub use column::{Column, ColumnKind};
pub use drag::DragData;
pub use reorder::reorder;
pub use rules::TransitionAction;
pub use task::{Task, TaskDraft, TaskId};
