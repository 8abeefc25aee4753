//! # Offboarding Wizard
//!
//! Three-step linear flow that initiates an offboarding case:
//!
//! ```text
//! SelectEmployee ──► CaptureDetails ──► Review ──► Submitted
//!        ▲                 │               │
//!        └──── back ───────┴──── back ─────┘
//! ```
//!
//! The wizard owns one explicit [`WizardState`]; each step is a view over a
//! slice of it. Entering a step through its route without the data the step
//! needs produces [`StepView::Guard`], which offers a way back to step 1.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use offboard_core::wizard::{OffboardingWizard, WizardStep};
//!
//! let mut wizard = OffboardingWizard::seeded();
//! wizard.select("EMP001").unwrap();
//! wizard.next().unwrap();
//! wizard.details_mut().unwrap().last_working_day = NaiveDate::from_ymd_opt(2026, 11, 30);
//! wizard.next().unwrap();
//! let submission = wizard.submit().unwrap();
//! assert_eq!(submission.receipt.employee_id, "EMP001");
//! assert_eq!(wizard.step(), WizardStep::Submitted);
//! ```

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::directory::{Directory, DirectoryFilter};
use crate::employee::Employee;
use crate::errors::{OffboardError, OffboardResult};
use crate::navigation::Redirect;
use crate::router::Route;

/// Tasks shown on the review step. The list is the same for every exit type.
pub const AUTOMATED_TASKS: [&str; 6] = [
    "Revoke system access on the last working day",
    "Schedule exit interview",
    "Collect company assets (laptop, badge, keys)",
    "Process final payroll and benefits",
    "Notify reporting manager and IT",
    "Archive employee records",
];

/// Kind of departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExitType {
    #[default]
    Resignation,
    Termination,
    Retirement,
    Layoff,
    EndOfContract,
}

impl ExitType {
    pub const ALL: [ExitType; 5] = [
        ExitType::Resignation,
        ExitType::Termination,
        ExitType::Retirement,
        ExitType::Layoff,
        ExitType::EndOfContract,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ExitType::Resignation => "Resignation",
            ExitType::Termination => "Termination",
            ExitType::Retirement => "Retirement",
            ExitType::Layoff => "Layoff",
            ExitType::EndOfContract => "End of Contract",
        }
    }
}

impl std::fmt::Display for ExitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Notice period served by the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoticePeriod {
    Immediate,
    OneWeek,
    #[default]
    TwoWeeks,
    OneMonth,
    TwoMonths,
    ThreeMonths,
}

impl NoticePeriod {
    pub const ALL: [NoticePeriod; 6] = [
        NoticePeriod::Immediate,
        NoticePeriod::OneWeek,
        NoticePeriod::TwoWeeks,
        NoticePeriod::OneMonth,
        NoticePeriod::TwoMonths,
        NoticePeriod::ThreeMonths,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NoticePeriod::Immediate => "Immediate",
            NoticePeriod::OneWeek => "1 Week",
            NoticePeriod::TwoWeeks => "2 Weeks",
            NoticePeriod::OneMonth => "1 Month",
            NoticePeriod::TwoMonths => "2 Months",
            NoticePeriod::ThreeMonths => "3 Months",
        }
    }
}

impl std::fmt::Display for NoticePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Form fields captured on step 2.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDetails {
    pub exit_type: ExitType,
    /// Required before continuing to review
    pub last_working_day: Option<NaiveDate>,
    pub effective_date: Option<NaiveDate>,
    pub reason: String,
    pub notice_period: NoticePeriod,
    pub eligible_for_rehire: bool,
    pub urgent_processing: bool,
}

/// The accumulated wizard record shown on the review step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitData {
    pub employee: Employee,
    pub exit_type: ExitType,
    pub last_working_day: NaiveDate,
    pub effective_date: Option<NaiveDate>,
    pub reason: String,
    pub notice_period: NoticePeriod,
    pub eligible_for_rehire: bool,
    pub urgent_processing: bool,
}

impl ExitData {
    /// Combine the selected employee with the captured details.
    ///
    /// Fails with `MissingField` when no last working day was entered.
    pub fn assemble(employee: &Employee, details: &ExitDetails) -> OffboardResult<Self> {
        let last_working_day = details
            .last_working_day
            .ok_or_else(|| OffboardError::missing_field("last_working_day"))?;

        Ok(ExitData {
            employee: employee.clone(),
            exit_type: details.exit_type,
            last_working_day,
            effective_date: details.effective_date,
            reason: details.reason.trim().to_string(),
            notice_period: details.notice_period,
            eligible_for_rehire: details.eligible_for_rehire,
            urgent_processing: details.urgent_processing,
        })
    }

    /// Rebuild the record carried as JSON route state into the review step.
    ///
    /// An absent payload means the step was reached without going through
    /// step 2 and yields `MissingNavigationState`.
    pub fn from_route_payload(payload: Option<&str>) -> OffboardResult<Self> {
        let json = payload
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| OffboardError::missing_state(WizardStep::Review.name()))?;
        let data: ExitData = serde_json::from_str(json)?;
        Ok(data)
    }

    /// JSON route state for [`ExitData::from_route_payload`].
    pub fn to_route_payload(&self) -> OffboardResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    SelectEmployee,
    CaptureDetails,
    Review,
    Submitted,
}

impl WizardStep {
    /// Route that renders this step (Submitted stays on the review route)
    pub fn route(&self) -> Route {
        match self {
            WizardStep::SelectEmployee => Route::NewOffboarding,
            WizardStep::CaptureDetails => Route::ExitDetails,
            WizardStep::Review | WizardStep::Submitted => Route::Review,
        }
    }

    /// 1-based step number for the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectEmployee => 1,
            WizardStep::CaptureDetails => 2,
            WizardStep::Review | WizardStep::Submitted => 3,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            WizardStep::SelectEmployee => "select-employee",
            WizardStep::CaptureDetails => "exit-details",
            WizardStep::Review => "review",
            WizardStep::Submitted => "submitted",
        }
    }
}

/// Everything the wizard has accumulated so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub selected: Option<Employee>,
    pub details: ExitDetails,
    /// Set when step 2 is completed
    pub exit_data: Option<ExitData>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub case_id: Uuid,
    pub employee_id: String,
    pub employee_name: String,
    pub exit_type: ExitType,
    pub last_working_day: NaiveDate,
    pub urgent: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Receipt plus the redirect back to the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub receipt: SubmissionReceipt,
    pub redirect: Redirect,
}

/// What the current step renders.
#[derive(Debug, Clone, PartialEq)]
pub enum StepView<'a> {
    SelectEmployee {
        employees: Vec<&'a Employee>,
        selected: Option<&'a Employee>,
        can_continue: bool,
    },
    CaptureDetails {
        employee: &'a Employee,
        details: &'a ExitDetails,
    },
    Review {
        data: &'a ExitData,
        automated_tasks: &'static [&'static str],
    },
    Submitted {
        message: String,
    },
    /// Step entered without its carried-over data
    Guard {
        step: WizardStep,
        message: &'static str,
        return_to: Route,
    },
}

/// Controller for the offboarding wizard.
#[derive(Debug, Clone)]
pub struct OffboardingWizard {
    directory: Directory,
    /// Employee picker filter on step 1
    pub filter: DirectoryFilter,
    state: WizardState,
    step: WizardStep,
    guarded: bool,
    redirect_delay: Duration,
}

impl OffboardingWizard {
    /// Create a wizard over a directory.
    pub fn new(directory: Directory, redirect_delay: Duration) -> Self {
        OffboardingWizard {
            directory,
            filter: DirectoryFilter::default(),
            state: WizardState::default(),
            step: WizardStep::SelectEmployee,
            guarded: false,
            redirect_delay,
        }
    }

    /// Wizard over the built-in directory with the default redirect delay
    pub fn seeded() -> Self {
        OffboardingWizard::new(Directory::seeded(), Duration::from_millis(2000))
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Select an employee on step 1, replacing any prior selection.
    pub fn select(&mut self, employee_id: &str) -> OffboardResult<&Employee> {
        self.require_step(WizardStep::SelectEmployee, "select an employee")?;
        let employee = self.directory.lookup(employee_id)?.clone();
        tracing::debug!(employee = %employee.id, "wizard selection");

        // A different employee invalidates anything captured for the old one.
        if self.state.selected.as_ref().map(|e| &e.id) != Some(&employee.id) {
            self.state.details = ExitDetails::default();
            self.state.exit_data = None;
        }
        let selected: &Employee = self.state.selected.insert(employee);
        Ok(selected)
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        if self.step == WizardStep::SelectEmployee {
            self.state.selected = None;
        }
    }

    /// Mutable access to the step-2 form.
    ///
    /// Any previously assembled review record is dropped; step 3 stays
    /// guarded until `next()` assembles it again.
    pub fn details_mut(&mut self) -> OffboardResult<&mut ExitDetails> {
        self.require_step(WizardStep::CaptureDetails, "edit exit details")?;
        self.state.exit_data = None;
        Ok(&mut self.state.details)
    }

    /// Whether the Continue/Submit action is enabled on the current step.
    pub fn can_continue(&self) -> bool {
        if self.guarded {
            return false;
        }
        match self.step {
            WizardStep::SelectEmployee => self.state.selected.is_some(),
            WizardStep::CaptureDetails => self.state.details.last_working_day.is_some(),
            WizardStep::Review => self.state.exit_data.is_some(),
            WizardStep::Submitted => false,
        }
    }

    /// Advance to the next step.
    pub fn next(&mut self) -> OffboardResult<WizardStep> {
        if self.guarded {
            return Err(OffboardError::missing_state(self.step.name()));
        }
        match self.step {
            WizardStep::SelectEmployee => {
                if self.state.selected.is_none() {
                    return Err(OffboardError::missing_field("employee"));
                }
                self.step = WizardStep::CaptureDetails;
            }
            WizardStep::CaptureDetails => {
                let employee = self
                    .state
                    .selected
                    .as_ref()
                    .ok_or_else(|| OffboardError::missing_state(self.step.name()))?;
                let data = ExitData::assemble(employee, &self.state.details)?;
                self.state.exit_data = Some(data);
                self.step = WizardStep::Review;
            }
            WizardStep::Review => {
                return Err(OffboardError::invalid_transition("review", "continue (use submit)"));
            }
            WizardStep::Submitted => {
                return Err(OffboardError::invalid_transition("submitted", "continue"));
            }
        }
        tracing::info!(step = self.step.name(), "wizard advanced");
        Ok(self.step)
    }

    /// Go back one step, keeping the accumulated state.
    pub fn back(&mut self) -> OffboardResult<WizardStep> {
        self.step = match self.step {
            WizardStep::SelectEmployee => {
                return Err(OffboardError::invalid_transition("select-employee", "go back"));
            }
            WizardStep::CaptureDetails => WizardStep::SelectEmployee,
            WizardStep::Review => WizardStep::CaptureDetails,
            WizardStep::Submitted => {
                return Err(OffboardError::invalid_transition("submitted", "go back"));
            }
        };
        self.guarded = false;
        Ok(self.step)
    }

    /// Submit the reviewed record.
    ///
    /// Nothing is persisted; the wizard state is discarded and the caller gets
    /// a receipt plus a redirect to the directory after the configured delay.
    pub fn submit(&mut self) -> OffboardResult<Submission> {
        self.require_step(WizardStep::Review, "submit")?;
        let data = self
            .state
            .exit_data
            .take()
            .ok_or_else(|| OffboardError::missing_state(WizardStep::Review.name()))?;

        let receipt = SubmissionReceipt {
            case_id: Uuid::new_v4(),
            employee_id: data.employee.id.clone(),
            employee_name: data.employee.full_name(),
            exit_type: data.exit_type,
            last_working_day: data.last_working_day,
            urgent: data.urgent_processing,
            submitted_at: Utc::now(),
        };
        tracing::info!(
            case_id = %receipt.case_id,
            employee = %receipt.employee_id,
            exit_type = %receipt.exit_type,
            "offboarding submitted"
        );

        self.state = WizardState::default();
        self.step = WizardStep::Submitted;
        Ok(Submission {
            receipt,
            redirect: Redirect::new(Route::Directory, self.redirect_delay),
        })
    }

    /// Throw away everything and start over at step 1.
    pub fn abandon(&mut self) {
        tracing::debug!(step = self.step.name(), "wizard abandoned");
        self.state = WizardState::default();
        self.filter = DirectoryFilter::default();
        self.step = WizardStep::SelectEmployee;
        self.guarded = false;
    }

    /// Mount the step behind `route`, as when the user navigates or deep-links.
    ///
    /// Steps 2 and 3 only render their form when the state they depend on is
    /// present; otherwise the view is a guard. Non-wizard routes are rejected.
    pub fn enter(&mut self, route: &Route) -> OffboardResult<StepView<'_>> {
        let (step, satisfied) = match route {
            Route::NewOffboarding => (WizardStep::SelectEmployee, true),
            Route::ExitDetails => (WizardStep::CaptureDetails, self.state.selected.is_some()),
            Route::Review => (WizardStep::Review, self.state.exit_data.is_some()),
            other => {
                return Err(OffboardError::invalid_transition(
                    self.step.name(),
                    format!("enter {other}"),
                ))
            }
        };
        if !satisfied {
            tracing::warn!(step = step.name(), "wizard step entered without carried state");
        }
        self.step = step;
        self.guarded = !satisfied;
        Ok(self.view())
    }

    /// Render the current step.
    pub fn view(&self) -> StepView<'_> {
        if self.guarded {
            return StepView::Guard {
                step: self.step,
                message: "No employee data found. Please start the offboarding process again.",
                return_to: Route::NewOffboarding,
            };
        }
        match self.step {
            WizardStep::SelectEmployee => StepView::SelectEmployee {
                employees: self.directory.filter(&self.filter),
                selected: self.state.selected.as_ref(),
                can_continue: self.can_continue(),
            },
            WizardStep::CaptureDetails => match &self.state.selected {
                Some(employee) => StepView::CaptureDetails {
                    employee,
                    details: &self.state.details,
                },
                None => StepView::Guard {
                    step: self.step,
                    message: "No employee selected. Please go back and select an employee.",
                    return_to: Route::NewOffboarding,
                },
            },
            WizardStep::Review => match &self.state.exit_data {
                Some(data) => StepView::Review {
                    data,
                    automated_tasks: &AUTOMATED_TASKS,
                },
                None => StepView::Guard {
                    step: self.step,
                    message: "No exit details found. Please start the offboarding process again.",
                    return_to: Route::NewOffboarding,
                },
            },
            WizardStep::Submitted => StepView::Submitted {
                message: "Offboarding process initiated successfully".to_string(),
            },
        }
    }

    fn require_step(&self, expected: WizardStep, action: &str) -> OffboardResult<()> {
        if self.guarded {
            return Err(OffboardError::missing_state(self.step.name()));
        }
        if self.step != expected {
            return Err(OffboardError::invalid_transition(self.step.name(), action));
        }
        Ok(())
    }
}

impl Default for OffboardingWizard {
    fn default() -> Self {
        OffboardingWizard::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2026, 11, d)
    }

    fn at_review() -> OffboardingWizard {
        let mut wizard = OffboardingWizard::seeded();
        wizard.select("EMP002").unwrap();
        wizard.next().unwrap();
        let details = wizard.details_mut().unwrap();
        details.exit_type = ExitType::Retirement;
        details.last_working_day = day(20);
        details.reason = "  Moving on  ".to_string();
        details.urgent_processing = true;
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn test_edits_after_back_require_reassembly() {
        let mut wizard = at_review();
        wizard.back().unwrap();
        wizard.details_mut().unwrap().last_working_day = NaiveDate::from_ymd_opt(2026, 12, 24);

        let view = wizard.enter(&Route::Review).unwrap();
        assert!(matches!(view, StepView::Guard { step: WizardStep::Review, .. }));
        assert!(wizard.submit().is_err());

        wizard.enter(&Route::ExitDetails).unwrap();
        assert_eq!(wizard.next().unwrap(), WizardStep::Review);
        let submission = wizard.submit().unwrap();
        assert_eq!(submission.receipt.last_working_day, NaiveDate::from_ymd_opt(2026, 12, 24).unwrap());
    }

    #[test]
    fn test_route_payload_absent_is_missing_state() {
        let err = ExitData::from_route_payload(None).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_NAVIGATION_STATE");
        assert!(ExitData::from_route_payload(Some("  ")).is_err());
    }

    #[test]
    fn test_route_payload_carries_review_record() {
        let wizard = at_review();
        let data = wizard.state().exit_data.clone().unwrap();
        let payload = data.to_route_payload().unwrap();
        assert_eq!(ExitData::from_route_payload(Some(&payload)).unwrap(), data);

        let err = ExitData::from_route_payload(Some("{\"employee\": 1}")).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_continue_disabled_until_selection() {
        let mut wizard = OffboardingWizard::seeded();
        assert!(!wizard.can_continue());
        assert_eq!(wizard.next().unwrap_err(), OffboardError::missing_field("employee"));

        wizard.select("EMP001").unwrap();
        assert!(wizard.can_continue());
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.select("EMP001").unwrap();
        wizard.select("EMP003").unwrap();
        assert_eq!(wizard.state().selected.as_ref().unwrap().id, "EMP003");
    }

    #[test]
    fn test_step_two_header_shows_selected_name() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.select("EMP001").unwrap();
        wizard.next().unwrap();
        match wizard.view() {
            StepView::CaptureDetails { employee, .. } => {
                assert_eq!(employee.full_name(), "Sarah Mitchell")
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_last_working_day_required() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.select("EMP001").unwrap();
        wizard.next().unwrap();
        assert!(!wizard.can_continue());
        assert_eq!(
            wizard.next().unwrap_err(),
            OffboardError::missing_field("last_working_day")
        );
        wizard.details_mut().unwrap().last_working_day = day(30);
        assert_eq!(wizard.next().unwrap(), WizardStep::Review);
    }

    #[test]
    fn test_review_view_lists_constant_tasks() {
        let wizard = at_review();
        match wizard.view() {
            StepView::Review { data, automated_tasks } => {
                assert_eq!(data.exit_type, ExitType::Retirement);
                assert_eq!(data.reason, "Moving on");
                assert_eq!(automated_tasks.len(), AUTOMATED_TASKS.len());
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_back_keeps_state() {
        let mut wizard = at_review();
        assert_eq!(wizard.back().unwrap(), WizardStep::CaptureDetails);
        assert_eq!(wizard.state().details.last_working_day, day(20));
        assert_eq!(wizard.back().unwrap(), WizardStep::SelectEmployee);
        assert_eq!(wizard.state().selected.as_ref().unwrap().id, "EMP002");
    }

    #[test]
    fn test_reselecting_other_employee_resets_details() {
        let mut wizard = at_review();
        wizard.back().unwrap();
        wizard.back().unwrap();
        wizard.select("EMP005").unwrap();
        assert_eq!(wizard.state().details, ExitDetails::default());
        assert!(wizard.state().exit_data.is_none());
    }

    #[test]
    fn test_submit_discards_state_and_redirects_home() {
        let mut wizard = at_review();
        let submission = wizard.submit().unwrap();
        assert_eq!(submission.receipt.employee_id, "EMP002");
        assert!(submission.receipt.urgent);
        assert_eq!(submission.redirect.to, Route::Directory);
        assert_eq!(submission.redirect.after, Duration::from_millis(2000));
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert_eq!(wizard.state(), &WizardState::default());
        assert!(matches!(wizard.view(), StepView::Submitted { .. }));
        assert!(wizard.submit().is_err());
    }

    #[test]
    fn test_deep_link_to_step_two_shows_guard() {
        let mut wizard = OffboardingWizard::seeded();
        let view = wizard.enter(&Route::ExitDetails).unwrap();
        assert!(matches!(view, StepView::Guard { return_to: Route::NewOffboarding, .. }));
        assert!(!wizard.can_continue());
        assert!(wizard.details_mut().is_err());
    }

    #[test]
    fn test_deep_link_to_review_shows_guard() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.select("EMP001").unwrap();
        let view = wizard.enter(&Route::Review).unwrap();
        assert!(matches!(view, StepView::Guard { step: WizardStep::Review, .. }));
        assert_eq!(
            wizard.submit().unwrap_err().error_code(),
            "MISSING_NAVIGATION_STATE"
        );
    }

    #[test]
    fn test_guard_recovers_via_step_one() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.enter(&Route::Review).unwrap();
        let view = wizard.enter(&Route::NewOffboarding).unwrap();
        assert!(matches!(view, StepView::SelectEmployee { can_continue: false, .. }));
    }

    #[test]
    fn test_enter_with_state_renders_form() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.select("EMP001").unwrap();
        let view = wizard.enter(&Route::ExitDetails).unwrap();
        assert!(matches!(view, StepView::CaptureDetails { .. }));
    }

    #[test]
    fn test_abandon_resets_everything() {
        let mut wizard = at_review();
        wizard.abandon();
        assert_eq!(wizard.step(), WizardStep::SelectEmployee);
        assert!(wizard.state().selected.is_none());
    }

    #[test]
    fn test_picker_filter_applies() {
        let mut wizard = OffboardingWizard::seeded();
        wizard.filter = DirectoryFilter::default().search("mitchell");
        match wizard.view() {
            StepView::SelectEmployee { employees, .. } => {
                assert_eq!(employees.len(), 1);
                assert_eq!(employees[0].id, "EMP001");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_exit_type_serialization() {
        let json = serde_json::to_string(&ExitType::EndOfContract).unwrap();
        assert_eq!(json, "\"EndOfContract\"");
        assert_eq!(ExitType::EndOfContract.to_string(), "End of Contract");
    }
}
