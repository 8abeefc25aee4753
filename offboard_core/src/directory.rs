//! # Employee Directory
//!
//! Pure filtered views over the fixed employee list. The three filters
//! (free-text search, position, status) compose with logical AND; the render
//! mode is independent state and never touches the filters.
//!
//! ## Example
//!
//! ```rust
//! use offboard_core::directory::{Directory, DirectoryFilter};
//!
//! let directory = Directory::seeded();
//! let filter = DirectoryFilter::default().search("engineer");
//! let hits = directory.filter(&filter);
//! assert!(hits.iter().all(|e| e.search_text().to_lowercase().contains("engineer")));
//! ```

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmployeeStatus, EMPLOYEES};
use crate::errors::{OffboardError, OffboardResult};

/// How the filtered result set is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }
}

/// Filter state for the directory and the wizard's employee picker.
///
/// `None` for position or status means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryFilter {
    pub query: String,
    pub position: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl DirectoryFilter {
    /// Set the free-text query
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to one position (role); `None` clears the restriction
    pub fn filter_by_position(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }

    /// Restrict to one status; `None` clears the restriction
    pub fn filter_by_status(mut self, status: Option<EmployeeStatus>) -> Self {
        self.status = status;
        self
    }

    /// Whether an employee passes all three filters.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_query(employee) && self.matches_position(employee) && self.matches_status(employee)
    }

    fn matches_query(&self, employee: &Employee) -> bool {
        let query = self.query.as_str();
        query.is_empty()
            || employee
                .search_text()
                .to_lowercase()
                .contains(&query.to_lowercase())
    }

    fn matches_position(&self, employee: &Employee) -> bool {
        match &self.position {
            Some(position) => employee.role.eq_ignore_ascii_case(position),
            None => true,
        }
    }

    fn matches_status(&self, employee: &Employee) -> bool {
        self.status.map_or(true, |status| employee.status == status)
    }
}

/// Read-only employee directory.
#[derive(Debug, Clone)]
pub struct Directory {
    employees: Vec<Employee>,
    pub view_mode: ViewMode,
}

impl Directory {
    /// Directory over the built-in dataset
    pub fn seeded() -> Self {
        Directory::new(EMPLOYEES.clone())
    }

    /// Directory over an arbitrary list
    pub fn new(employees: Vec<Employee>) -> Self {
        Directory {
            employees,
            view_mode: ViewMode::default(),
        }
    }

    /// All employees in seed order
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Look up an employee by id.
    pub fn lookup(&self, id: &str) -> OffboardResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| OffboardError::employee_not_found(id))
    }

    /// Employees passing the filter, in seed order.
    pub fn filter(&self, filter: &DirectoryFilter) -> Vec<&Employee> {
        self.employees.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Distinct positions, sorted, for the position picker.
    pub fn positions(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.employees.iter().map(|e| e.role.as_str()).collect();
        roles.sort_unstable();
        roles.dedup();
        roles
    }

    /// Flip between table and card rendering.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}

impl Default for Directory {
    fn default() -> Self {
        Directory::seeded()
    }
}
