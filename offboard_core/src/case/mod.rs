//! # Case Detail
//!
//! Per-employee offboarding case view. Five tabs, each owning independent
//! local state:
//!
//! - [`tasks`] - checklist with an "Add Task" modal
//! - [`comments`] - append/delete comment thread
//! - [`documents`] - search, category filter, export selection, upload, delete
//! - [`timeline`] - read-only events filtered by status
//! - [`access`] - per-system revoke switches
//!
//! Nothing here is shared with the offboarding wizard, and nothing survives
//! dropping the `CaseDetail`.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use offboard_core::case::{CaseDetail, CaseTab};
//! use offboard_core::directory::Directory;
//! use offboard_core::settings::Settings;
//!
//! let directory = Directory::seeded();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let mut case = CaseDetail::open(&directory, "EMP002", &Settings::default(), today).unwrap();
//! case.tabs.select(CaseTab::Documents).unwrap();
//! case.documents.set_search("asset");
//! assert_eq!(case.documents.filtered().len(), 1);
//! ```

pub mod access;
pub mod comments;
pub mod documents;
pub mod reviews;
pub mod tasks;
pub mod timeline;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::directory::Directory;
use crate::employee::Employee;
use crate::errors::OffboardResult;
use crate::settings::Settings;
use crate::tabs::TabSet;

pub use access::SystemAccessState;
pub use comments::{CaseComment, CommentThread};
pub use documents::{CaseDocument, DocumentLibrary, ExportSummary, LocalFile};
pub use reviews::{PerformanceReview, ReviewHistory};
pub use tasks::{AddTaskForm, OffboardingTask, Priority, TaskBoard, TaskStatus};
pub use timeline::{EventStatus, Timeline, TimelineEvent, TimelineFilter};

/// Tabs of the case detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseTab {
    Tasks,
    Comments,
    Documents,
    Timeline,
    Access,
}

impl CaseTab {
    pub const ALL: [CaseTab; 5] = [
        CaseTab::Tasks,
        CaseTab::Comments,
        CaseTab::Documents,
        CaseTab::Timeline,
        CaseTab::Access,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CaseTab::Tasks => "Tasks",
            CaseTab::Comments => "Comments",
            CaseTab::Documents => "Documents",
            CaseTab::Timeline => "Timeline",
            CaseTab::Access => "Access & Security",
        }
    }
}

/// Aggregated per-employee case state.
#[derive(Debug, Clone)]
pub struct CaseDetail {
    pub case_id: Uuid,
    pub employee: Employee,
    /// Scheduled last day, or 30 days out when none is on file
    pub last_working_day: NaiveDate,
    pub tabs: TabSet<CaseTab>,
    pub tasks: TaskBoard,
    pub comments: CommentThread,
    pub documents: DocumentLibrary,
    pub timeline: Timeline,
    pub access: SystemAccessState,
}

impl CaseDetail {
    /// Build the case view for an employee, seeding every tab.
    pub fn for_employee(employee: &Employee, settings: &Settings, today: NaiveDate) -> OffboardResult<Self> {
        let last_working_day = employee
            .last_working_day
            .unwrap_or(today + Duration::days(30));
        let opened = (today - Duration::days(15)).and_hms_opt(9, 0, 0).unwrap_or_default();

        let tabs = TabSet::new(CaseTab::ALL.map(|t| (t, t.label())))?;

        tracing::debug!(employee = %employee.id, "case detail opened");
        Ok(CaseDetail {
            case_id: Uuid::new_v4(),
            employee: employee.clone(),
            last_working_day,
            tabs,
            tasks: TaskBoard::new(tasks::seed_tasks(last_working_day)),
            comments: CommentThread::new(
                comments::seed_comments(opened),
                settings.comment_author.clone(),
                settings.comment_role.clone(),
            ),
            documents: DocumentLibrary::new(documents::seed_documents(today), settings.comment_author.clone()),
            timeline: Timeline::new(timeline::seed_events(opened)),
            access: SystemAccessState::default(),
        })
    }

    /// Look the employee up and build the case view (`/view-details/:id`).
    pub fn open(directory: &Directory, employee_id: &str, settings: &Settings, today: NaiveDate) -> OffboardResult<Self> {
        let employee = directory.lookup(employee_id)?;
        CaseDetail::for_employee(employee, settings, today)
    }

    /// Days remaining until the last working day (negative once passed).
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.last_working_day - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_open_unknown_employee() {
        let err = CaseDetail::open(&Directory::seeded(), "EMP404", &Settings::default(), today()).unwrap_err();
        assert_eq!(err.error_code(), "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_last_working_day_from_record_or_default() {
        let directory = Directory::seeded();
        let settings = Settings::default();
        let james = CaseDetail::open(&directory, "EMP002", &settings, today()).unwrap();
        assert_eq!(james.last_working_day, NaiveDate::from_ymd_opt(2026, 11, 28).unwrap());
        assert_eq!(james.days_remaining(today()), 43);

        let sarah = CaseDetail::open(&directory, "EMP001", &settings, today()).unwrap();
        assert_eq!(sarah.days_remaining(today()), 30);
    }

    #[test]
    fn test_tabs_are_independent() {
        let directory = Directory::seeded();
        let mut case = CaseDetail::open(&directory, "EMP001", &Settings::default(), today()).unwrap();
        case.documents.set_search("letter");
        case.timeline.filter = TimelineFilter::CompletedOnly;
        case.tabs.select(CaseTab::Access).unwrap();

        assert_eq!(case.tasks.visible().len(), case.tasks.all().len());
        assert_eq!(case.documents.filtered().len(), 1);
        assert_eq!(case.tabs.selected_label(), "Access & Security");
    }

    #[test]
    fn test_comment_author_from_settings() {
        let settings = Settings {
            comment_author: "Admin".to_string(),
            ..Settings::default()
        };
        let mut case = CaseDetail::open(&Directory::seeded(), "EMP003", &settings, today()).unwrap();
        let at = today().and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(case.comments.add("Checked in", at).unwrap().author, "Admin");
    }
}
