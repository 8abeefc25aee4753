//! Offboarding task checklist for a case.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{OffboardError, OffboardResult};
use crate::ids::IdGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffboardingTask {
    pub id: String,
    pub title: String,
    pub department: String,
    pub priority: Priority,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    pub status: TaskStatus,
}

/// Fields collected by the "Add Task" modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTaskForm {
    pub title: String,
    pub department: String,
    pub priority: Priority,
    pub assigned_to: String,
    pub due_date: Option<NaiveDate>,
}

impl AddTaskForm {
    fn validate(&self) -> OffboardResult<NaiveDate> {
        if self.title.trim().is_empty() {
            return Err(OffboardError::missing_field("title"));
        }
        if self.department.trim().is_empty() {
            return Err(OffboardError::missing_field("department"));
        }
        if self.assigned_to.trim().is_empty() {
            return Err(OffboardError::missing_field("assigned_to"));
        }
        self.due_date.ok_or_else(|| OffboardError::missing_field("due_date"))
    }
}

/// Tasks tab state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<OffboardingTask>,
    /// The open "Add Task" modal, if any
    modal: Option<AddTaskForm>,
    status_filter: Option<TaskStatus>,
    ids: IdGenerator,
}

impl TaskBoard {
    pub fn new(tasks: Vec<OffboardingTask>) -> Self {
        let ids = IdGenerator::after("TASK", tasks.iter().map(|t| t.id.as_str()));
        TaskBoard {
            tasks,
            modal: None,
            status_filter: None,
            ids,
        }
    }

    pub fn all(&self) -> &[OffboardingTask] {
        &self.tasks
    }

    /// Restrict the visible list to one status; `None` shows all.
    pub fn set_status_filter(&mut self, status: Option<TaskStatus>) {
        self.status_filter = status;
    }

    pub fn visible(&self) -> Vec<&OffboardingTask> {
        self.tasks
            .iter()
            .filter(|t| self.status_filter.map_or(true, |s| t.status == s))
            .collect()
    }

    /// Count of tasks in a given status
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Percentage of completed tasks, rounded down
    pub fn progress_percent(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        (self.count(TaskStatus::Completed) * 100 / self.tasks.len()) as u8
    }

    /// Open the modal with a blank form. An already open modal keeps its contents.
    pub fn open_add_modal(&mut self) -> &mut AddTaskForm {
        self.modal.get_or_insert_with(AddTaskForm::default)
    }

    pub fn modal(&self) -> Option<&AddTaskForm> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut AddTaskForm> {
        self.modal.as_mut()
    }

    pub fn cancel_add(&mut self) {
        self.modal = None;
    }

    /// Validate the modal, append a Pending task, and only then close the modal.
    ///
    /// On a validation failure the modal stays open with its contents intact.
    pub fn confirm_add(&mut self) -> OffboardResult<&OffboardingTask> {
        let form = self
            .modal
            .as_ref()
            .ok_or_else(|| OffboardError::invalid_transition("task list", "confirm without an open modal"))?;
        let due_date = form.validate()?;

        let task = OffboardingTask {
            id: self.ids.next_id(),
            title: form.title.trim().to_string(),
            department: form.department.trim().to_string(),
            priority: form.priority,
            assigned_to: form.assigned_to.trim().to_string(),
            due_date,
            completed_date: None,
            status: TaskStatus::Pending,
        };
        tracing::info!(task = %task.id, title = %task.title, "task added");
        self.tasks.push(task);
        self.modal = None;
        Ok(&self.tasks[self.tasks.len() - 1])
    }
}

pub(crate) fn seed_tasks(last_day: NaiveDate) -> Vec<OffboardingTask> {
    let before = |days: i64| last_day - chrono::Duration::days(days);
    let task = |id: &str, title: &str, dept: &str, priority, who: &str, due: NaiveDate, status, done: Option<NaiveDate>| {
        OffboardingTask {
            id: id.to_string(),
            title: title.to_string(),
            department: dept.to_string(),
            priority,
            assigned_to: who.to_string(),
            due_date: due,
            completed_date: done,
            status,
        }
    };
    vec![
        task("TASK-1", "Submit resignation acknowledgement", "HR", Priority::High, "Olivia Martinez",
            before(28), TaskStatus::Completed, Some(before(29))),
        task("TASK-2", "Knowledge transfer sessions", "Engineering", Priority::High, "David Chen",
            before(7), TaskStatus::InProgress, None),
        task("TASK-3", "Return laptop and accessories", "IT", Priority::Medium, "IT Helpdesk",
            last_day, TaskStatus::Pending, None),
        task("TASK-4", "Revoke building access badge", "Facilities", Priority::Medium, "Security Desk",
            last_day, TaskStatus::Pending, None),
        task("TASK-5", "Final payroll settlement", "Finance", Priority::High, "Payroll Team",
            before(-14), TaskStatus::Pending, None),
        task("TASK-6", "Benefits termination notice", "HR", Priority::Low, "Benefits Team",
            before(14), TaskStatus::Completed, Some(before(15))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> TaskBoard {
        TaskBoard::new(seed_tasks(NaiveDate::from_ymd_opt(2026, 11, 30).unwrap()))
    }

    fn filled_form(board: &mut TaskBoard) {
        let form = board.open_add_modal();
        form.title = "Close expense account".to_string();
        form.department = "Finance".to_string();
        form.priority = Priority::Low;
        form.assigned_to = "Finance Ops".to_string();
        form.due_date = NaiveDate::from_ymd_opt(2026, 12, 5);
    }

    #[test]
    fn test_add_task_appends_to_visible_list() {
        let mut board = board();
        let before = board.visible().len();
        filled_form(&mut board);
        let task = board.confirm_add().unwrap().clone();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.id, "TASK-7");
        assert_eq!(board.visible().len(), before + 1);
        assert_eq!(board.visible().last().unwrap().title, "Close expense account");
        assert!(board.modal().is_none());
    }

    #[test]
    fn test_empty_title_keeps_modal_open() {
        let mut board = board();
        filled_form(&mut board);
        board.modal_mut().unwrap().title = "   ".to_string();
        assert_eq!(board.confirm_add().unwrap_err(), OffboardError::missing_field("title"));
        assert!(board.modal().is_some());
        assert_eq!(board.all().len(), 6);
    }

    #[test]
    fn test_confirm_without_modal() {
        let mut board = board();
        assert_eq!(board.confirm_add().unwrap_err().error_code(), "INVALID_TRANSITION");
    }

    #[test]
    fn test_cancel_discards_form() {
        let mut board = board();
        filled_form(&mut board);
        board.cancel_add();
        assert!(board.modal().is_none());
        assert_eq!(board.open_add_modal(), &mut AddTaskForm::default());
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut board = board();
        for _ in 0..3 {
            filled_form(&mut board);
            board.confirm_add().unwrap();
        }
        let mut ids: Vec<_> = board.all().iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_status_filter_and_progress() {
        let mut board = board();
        board.set_status_filter(Some(TaskStatus::Completed));
        assert_eq!(board.visible().len(), 2);
        assert_eq!(board.progress_percent(), 33);
        board.set_status_filter(None);
        assert_eq!(board.visible().len(), 6);
    }
}
