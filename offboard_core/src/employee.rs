//! # Employee Records
//!
//! Immutable reference data for the offboarding workflows. The directory is a
//! fixed seed list loaded once per process; nothing here is ever mutated.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Employment status shown in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    OnNotice,
    Offboarding,
    Offboarded,
}

impl EmployeeStatus {
    /// All statuses in display order
    pub const ALL: [EmployeeStatus; 4] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnNotice,
        EmployeeStatus::Offboarding,
        EmployeeStatus::Offboarded,
    ];

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnNotice => "On Notice",
            EmployeeStatus::Offboarding => "Offboarding",
            EmployeeStatus::Offboarded => "Offboarded",
        }
    }

    /// Parse a label or variant name, ignoring case and spaces.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        EmployeeStatus::ALL.into_iter().find(|status| {
            let name: String = status
                .display_name()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            name.eq_ignore_ascii_case(&wanted)
        })
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Directory id, e.g. "EMP001"
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Job title; doubles as the "position" tag in the directory filter
    pub role: String,
    pub department: String,
    pub email: String,
    pub status: EmployeeStatus,
    pub joining_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Set once a departure has been scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_working_day: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_reason: Option<String>,
}

impl Employee {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter initials used for avatars
    pub fn initials(&self) -> String {
        initials_of(&self.full_name())
    }

    /// Concatenation of the identity fields matched by directory search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.full_name(),
            self.email,
            self.role,
            self.status.display_name(),
            self.department,
            self.id
        )
    }
}

/// Initials of up to the first two words of a name, uppercased.
///
/// # Example
/// ```
/// use offboard_core::employee::initials_of;
/// assert_eq!(initials_of("Sarah Mitchell"), "SM");
/// assert_eq!(initials_of("You"), "Y");
/// ```
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed literals below are all valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    first: &str,
    last: &str,
    role: &str,
    department: &str,
    status: EmployeeStatus,
    joined: NaiveDate,
    location: &str,
    manager: &str,
) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
        status,
        joining_date: joined,
        phone: Some(format!("+1 (555) 01{}", &id[id.len() - 2..])),
        location: Some(location.to_string()),
        manager: Some(manager.to_string()),
        last_working_day: None,
        exit_reason: None,
    }
}

/// The fixed employee dataset.
pub static EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    let mut list = vec![
        seed("EMP001", "Sarah", "Mitchell", "Senior Software Engineer", "Engineering",
            EmployeeStatus::Active, date(2019, 3, 15), "San Francisco, CA", "David Chen"),
        seed("EMP002", "James", "Rodriguez", "Product Manager", "Product",
            EmployeeStatus::OnNotice, date(2020, 7, 1), "New York, NY", "Linda Park"),
        seed("EMP003", "Emily", "Watson", "UX Designer", "Design",
            EmployeeStatus::Active, date(2021, 1, 11), "Austin, TX", "Mark Allen"),
        seed("EMP004", "Michael", "Brown", "Sales Executive", "Sales",
            EmployeeStatus::Offboarding, date(2018, 9, 24), "Chicago, IL", "Karen White"),
        seed("EMP005", "Priya", "Sharma", "Data Analyst", "Finance",
            EmployeeStatus::Active, date(2022, 4, 4), "Seattle, WA", "Tom Hughes"),
        seed("EMP006", "Daniel", "Kim", "Senior Software Engineer", "Engineering",
            EmployeeStatus::Offboarded, date(2017, 11, 6), "San Francisco, CA", "David Chen"),
        seed("EMP007", "Olivia", "Martinez", "HR Specialist", "Human Resources",
            EmployeeStatus::Active, date(2020, 2, 17), "Denver, CO", "Rachel Green"),
        seed("EMP008", "Robert", "Taylor", "DevOps Engineer", "Engineering",
            EmployeeStatus::OnNotice, date(2019, 8, 19), "Remote", "David Chen"),
    ];

    list[1].last_working_day = Some(date(2026, 11, 28));
    list[1].exit_reason = Some("Relocating abroad".to_string());
    list[3].last_working_day = Some(date(2026, 10, 31));
    list[3].exit_reason = Some("Accepted an offer elsewhere".to_string());
    list[5].last_working_day = Some(date(2026, 6, 30));
    list[5].exit_reason = Some("Retirement".to_string());
    list[7].last_working_day = Some(date(2026, 12, 12));
    list
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let ids: HashSet<_> = EMPLOYEES.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), EMPLOYEES.len());
    }

    #[test]
    fn test_first_employee() {
        let sarah = &EMPLOYEES[0];
        assert_eq!(sarah.id, "EMP001");
        assert_eq!(sarah.full_name(), "Sarah Mitchell");
        assert_eq!(sarah.initials(), "SM");
        assert_eq!(sarah.email, "sarah.mitchell@company.com");
        assert_eq!(sarah.phone.as_deref(), Some("+1 (555) 0101"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(EmployeeStatus::parse("on notice"), Some(EmployeeStatus::OnNotice));
        assert_eq!(EmployeeStatus::parse("OnNotice"), Some(EmployeeStatus::OnNotice));
        assert_eq!(EmployeeStatus::parse("ACTIVE"), Some(EmployeeStatus::Active));
        assert_eq!(EmployeeStatus::parse("retired"), None);
    }

    #[test]
    fn test_search_text_contains_identity_fields() {
        let text = EMPLOYEES[0].search_text();
        for part in ["Sarah Mitchell", "sarah.mitchell@company.com", "Engineering", "Active", "EMP001"] {
            assert!(text.contains(part), "missing {part}");
        }
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let json = serde_json::to_string(&EMPLOYEES[0]).unwrap();
        assert!(!json.contains("exit_reason"));
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EMPLOYEES[0]);
    }
}
