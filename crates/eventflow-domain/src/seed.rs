//! Sample business-event tasks loaded on first launch.

use crate::column::ColumnKind;
use crate::task::{Task, TaskDraft};

pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(
            ColumnKind::Standard,
            TaskDraft::new(
                "Customer attribute change",
                "Update basic customer attributes",
                "customer",
                "/api/customer/update",
                "customerId, attributes",
            ),
        ),
        Task::new(
            ColumnKind::Bank,
            TaskDraft::new(
                "Customer attribute change - phone update",
                "Update the customer's phone on file",
                "bank_account",
                "/api/bank/phone/update",
                "accountId, phone",
            ),
        ),
        Task::new(
            ColumnKind::Bank,
            TaskDraft::new(
                "Customer attribute change - email update",
                "Update the customer's email on file",
                "bank_account",
                "/api/bank/email/update",
                "accountId, email",
            ),
        ),
        Task::new(
            ColumnKind::Person,
            TaskDraft::new(
                "Personal info update",
                "Update basic personal information",
                "person",
                "/api/person/update",
                "personId, info",
            ),
        ),
        Task::new(
            ColumnKind::Person,
            TaskDraft::new(
                "Contact change",
                "Update contact information",
                "contact",
                "/api/person/contact/update",
                "personId, contactInfo",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tasks_have_unique_ids() {
        let tasks = sample_tasks();
        for (i, a) in tasks.iter().enumerate() {
            for b in &tasks[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_sample_tasks_never_start_in_execute() {
        assert!(sample_tasks()
            .iter()
            .all(|t| t.column_id != ColumnKind::Execute));
    }
}
