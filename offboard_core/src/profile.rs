//! Employee profile view (`/manage-profile/:id`).
//!
//! Shares the tab container with the case detail view and owns the
//! performance review history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::reviews::{seed_reviews, ReviewHistory};
use crate::directory::Directory;
use crate::employee::Employee;
use crate::errors::OffboardResult;
use crate::tabs::TabSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileTab {
    Personal,
    Employment,
    Performance,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Personal, ProfileTab::Employment, ProfileTab::Performance];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Personal => "Personal Info",
            ProfileTab::Employment => "Employment",
            ProfileTab::Performance => "Performance",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeProfile {
    pub employee: Employee,
    pub tabs: TabSet<ProfileTab>,
    pub reviews: ReviewHistory,
}

impl EmployeeProfile {
    pub fn open(directory: &Directory, employee_id: &str) -> OffboardResult<Self> {
        let employee = directory.lookup(employee_id)?.clone();
        let manager = employee.manager.clone().unwrap_or_else(|| "HR".to_string());
        let reviews = ReviewHistory::new(seed_reviews(&manager, employee.joining_date));
        Ok(EmployeeProfile {
            tabs: TabSet::new(ProfileTab::ALL.map(|t| (t, t.label())))?,
            employee,
            reviews,
        })
    }

    /// Whole years of service as of `today`.
    pub fn tenure_years(&self, today: NaiveDate) -> u32 {
        today.years_since(self.employee.joining_date).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_profile() {
        let mut profile = EmployeeProfile::open(&Directory::seeded(), "EMP001").unwrap();
        assert_eq!(profile.tabs.selected(), ProfileTab::Personal);
        profile.tabs.select(ProfileTab::Performance).unwrap();
        assert_eq!(profile.reviews.all().len(), 3);
        assert_eq!(profile.reviews.all()[0].reviewer, "David Chen");
    }

    #[test]
    fn test_tenure() {
        let profile = EmployeeProfile::open(&Directory::seeded(), "EMP001").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(profile.tenure_years(today), 7);
    }

    #[test]
    fn test_unknown_profile() {
        assert!(EmployeeProfile::open(&Directory::seeded(), "nobody").is_err());
    }
}
