//! # Session
//!
//! Ties the route table to the view controllers. Mounting a route builds the
//! state that view needs; leaving a view drops its state, so navigating away
//! and back always starts fresh. The wizard keeps its state only while the
//! user moves between wizard routes.

use std::time::Duration;

use chrono::NaiveDate;

use crate::case::CaseDetail;
use crate::directory::{Directory, DirectoryFilter, ViewMode};
use crate::employee::Employee;
use crate::errors::OffboardResult;
use crate::exit_interview::{ExitInterviewFlow, InterviewStep};
use crate::navigation::Navigator;
use crate::profile::EmployeeProfile;
use crate::router::Route;
use crate::settings::Settings;
use crate::wizard::{OffboardingWizard, StepView, Submission};

/// What the mounted route renders.
#[derive(Debug)]
pub enum Screen<'a> {
    Directory {
        employees: Vec<&'a Employee>,
        view_mode: ViewMode,
    },
    Wizard(StepView<'a>),
    ExitInterview(&'a ExitInterviewFlow),
    CaseDetail(&'a CaseDetail),
    Profile(&'a EmployeeProfile),
    /// Route entered without the state it depends on
    Guard {
        message: &'static str,
        return_to: Route,
    },
    NotFound(String),
}

/// One user's in-memory application session.
#[derive(Debug)]
pub struct Session {
    pub settings: Settings,
    pub directory: Directory,
    pub filter: DirectoryFilter,
    pub wizard: OffboardingWizard,
    pub interview: ExitInterviewFlow,
    pub case: Option<CaseDetail>,
    pub profile: Option<EmployeeProfile>,
    navigator: Navigator,
    today: NaiveDate,
}

impl Session {
    pub fn new(settings: Settings, today: NaiveDate) -> Self {
        let mut directory = Directory::seeded();
        directory.view_mode = settings.default_view_mode;
        let wizard = OffboardingWizard::new(directory.clone(), settings.redirect_delay());
        Session {
            settings,
            directory,
            filter: DirectoryFilter::default(),
            wizard,
            interview: ExitInterviewFlow::new(),
            case: None,
            profile: None,
            navigator: Navigator::default(),
            today,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Navigate to a path and mount its view.
    pub fn navigate(&mut self, path: &str) -> OffboardResult<()> {
        let route = Route::parse(path);
        self.mount(route)
    }

    /// Mount a route, dropping state owned by the view being left.
    ///
    /// Lookups that can fail run first; on error the mounted view and its
    /// state are left untouched.
    pub fn mount(&mut self, route: Route) -> OffboardResult<()> {
        let (case, profile) = match &route {
            Route::ViewDetails(id) => (Some(CaseDetail::open(&self.directory, id, &self.settings, self.today)?), None),
            Route::ManageProfile(id) => (None, Some(EmployeeProfile::open(&self.directory, id)?)),
            _ => (None, None),
        };

        let previous = self.navigator.current().clone();
        if previous.is_wizard_step() && !route.is_wizard_step() {
            self.wizard.abandon();
        }
        if matches!(previous, Route::ExitInterview | Route::ExitInterviewForm)
            && !matches!(route, Route::ExitInterview | Route::ExitInterviewForm)
        {
            self.interview = ExitInterviewFlow::new();
        }
        self.case = case;
        self.profile = profile;

        match &route {
            Route::NewOffboarding | Route::ExitDetails | Route::Review => {
                self.wizard.enter(&route)?;
            }
            Route::ExitInterview if *self.interview.step() == InterviewStep::Submitted => {
                self.interview = ExitInterviewFlow::new();
            }
            _ => {}
        }

        self.navigator.go(route);
        Ok(())
    }

    /// Submit the wizard and schedule the return to the directory.
    pub fn submit_wizard(&mut self) -> OffboardResult<Submission> {
        let submission = self.wizard.submit()?;
        self.navigator.schedule(submission.redirect.clone());
        Ok(submission)
    }

    /// Submit the exit interview and go home immediately.
    pub fn submit_interview(&mut self) -> OffboardResult<()> {
        let redirect = self.interview.submit()?;
        self.mount(redirect.to)
    }

    /// Let time pass; mounts the redirect target if it fired.
    pub fn tick(&mut self, elapsed: Duration) -> OffboardResult<Option<Route>> {
        match self.navigator.advance(elapsed) {
            Some(route) => {
                // The navigator has already moved, so release the wizard here.
                self.wizard.abandon();
                self.mount(route.clone())?;
                Ok(Some(route))
            }
            None => Ok(None),
        }
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.navigator.has_pending()
    }

    /// Render the mounted route.
    pub fn screen(&self) -> Screen<'_> {
        match self.navigator.current() {
            Route::Directory => Screen::Directory {
                employees: self.directory.filter(&self.filter),
                view_mode: self.directory.view_mode,
            },
            Route::NewOffboarding | Route::ExitDetails | Route::Review => Screen::Wizard(self.wizard.view()),
            Route::ExitInterview => Screen::ExitInterview(&self.interview),
            Route::ExitInterviewForm => match self.interview.step() {
                InterviewStep::Feedback => Screen::ExitInterview(&self.interview),
                _ => Screen::Guard {
                    message: "Interview details are missing. Please set up the exit interview first.",
                    return_to: Route::ExitInterview,
                },
            },
            Route::ViewDetails(_) => match &self.case {
                Some(case) => Screen::CaseDetail(case),
                None => Screen::NotFound(self.navigator.current().path()),
            },
            Route::ManageProfile(_) => match &self.profile {
                Some(profile) => Screen::Profile(profile),
                None => Screen::NotFound(self.navigator.current().path()),
            },
            Route::NotFound(path) => Screen::NotFound(path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Settings::default(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    #[test]
    fn test_starts_on_directory() {
        let session = session();
        match session.screen() {
            Screen::Directory { employees, view_mode } => {
                assert_eq!(employees.len(), 8);
                assert_eq!(view_mode, ViewMode::Table);
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_case_state_resets_on_revisit() {
        let mut session = session();
        session.navigate("/view-details/EMP001").unwrap();
        session.case.as_mut().unwrap().access.toggle("VPN").unwrap();
        session.navigate("/").unwrap();
        assert!(session.case.is_none());
        session.navigate("/view-details/EMP001").unwrap();
        assert!(!session.case.as_ref().unwrap().access.is_revoked("VPN").unwrap());
    }

    #[test]
    fn test_unknown_route_renders_not_found() {
        let mut session = session();
        session.navigate("/payroll").unwrap();
        assert!(matches!(session.screen(), Screen::NotFound(path) if path == "/payroll"));
    }

    #[test]
    fn test_interview_form_without_setup_is_guarded() {
        let mut session = session();
        session.navigate("/exit-interview-form").unwrap();
        assert!(matches!(
            session.screen(),
            Screen::Guard { return_to: Route::ExitInterview, .. }
        ));
    }

    #[test]
    fn test_leaving_wizard_abandons_it() {
        let mut session = session();
        session.navigate("/new-offboarding").unwrap();
        session.wizard.select("EMP001").unwrap();
        session.navigate("/exit-interview").unwrap();
        session.navigate("/new-offboarding-exit-details").unwrap();
        assert!(matches!(session.screen(), Screen::Wizard(StepView::Guard { .. })));
    }
}
