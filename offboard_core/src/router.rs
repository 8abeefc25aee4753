//! Route table for the application's views.
//!
//! Paths are matched after stripping any query string, fragment and trailing
//! slash. Anything unrecognised resolves to [`Route::NotFound`].

use serde::{Deserialize, Serialize};

/// A resolved application route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "param")]
pub enum Route {
    /// `/` - employee directory
    Directory,
    /// `/new-offboarding` - wizard step 1
    NewOffboarding,
    /// `/new-offboarding-exit-details` - wizard step 2
    ExitDetails,
    /// `/new-offboarding-review` - wizard step 3
    Review,
    /// `/exit-interview` - interview setup
    ExitInterview,
    /// `/exit-interview-form` - interview feedback form
    ExitInterviewForm,
    /// `/manage-profile/:id`
    ManageProfile(String),
    /// `/view-details/:id`
    ViewDetails(String),
    /// Catch-all
    NotFound(String),
}

impl Route {
    /// Resolve a path.
    ///
    /// # Example
    /// ```
    /// use offboard_core::router::Route;
    ///
    /// assert_eq!(Route::parse("/"), Route::Directory);
    /// assert_eq!(Route::parse("/view-details/EMP001"), Route::ViewDetails("EMP001".into()));
    /// assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".into()));
    /// ```
    pub fn parse(path: &str) -> Route {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Directory,
            ["new-offboarding"] => Route::NewOffboarding,
            ["new-offboarding-exit-details"] => Route::ExitDetails,
            ["new-offboarding-review"] => Route::Review,
            ["exit-interview"] => Route::ExitInterview,
            ["exit-interview-form"] => Route::ExitInterviewForm,
            ["manage-profile", id] => Route::ManageProfile((*id).to_string()),
            ["view-details", id] => Route::ViewDetails((*id).to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Directory => "/".to_string(),
            Route::NewOffboarding => "/new-offboarding".to_string(),
            Route::ExitDetails => "/new-offboarding-exit-details".to_string(),
            Route::Review => "/new-offboarding-review".to_string(),
            Route::ExitInterview => "/exit-interview".to_string(),
            Route::ExitInterviewForm => "/exit-interview-form".to_string(),
            Route::ManageProfile(id) => format!("/manage-profile/{id}"),
            Route::ViewDetails(id) => format!("/view-details/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether this route is one of the wizard steps.
    pub fn is_wizard_step(&self) -> bool {
        matches!(self, Route::NewOffboarding | Route::ExitDetails | Route::Review)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
