//! # Exit Interview
//!
//! Two-step flow, independent of the offboarding wizard:
//! `Setup` (date, interviewer, mode) then `Feedback` (six 1–5 ratings,
//! free-text questions, decision factors). Submitting is terminal and keeps
//! nothing; saving a draft hands back a snapshot and stays on the form.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{OffboardError, OffboardResult};
use crate::navigation::Redirect;
use crate::router::Route;

/// How the interview is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InterviewMode {
    #[default]
    InPerson,
    Video,
    Phone,
}

impl InterviewMode {
    pub const ALL: [InterviewMode; 3] = [InterviewMode::InPerson, InterviewMode::Video, InterviewMode::Phone];

    pub fn display_name(&self) -> &'static str {
        match self {
            InterviewMode::InPerson => "In Person",
            InterviewMode::Video => "Video Call",
            InterviewMode::Phone => "Phone Call",
        }
    }
}

/// Interview scheduling details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSetup {
    pub date: Option<NaiveDate>,
    pub interviewer: String,
    pub mode: InterviewMode,
}

impl InterviewSetup {
    /// Date and interviewer are required to start the feedback form.
    pub fn validate(&self) -> OffboardResult<()> {
        if self.date.is_none() {
            return Err(OffboardError::missing_field("date"));
        }
        if self.interviewer.trim().is_empty() {
            return Err(OffboardError::missing_field("interviewer"));
        }
        Ok(())
    }
}

/// The six rated aspects of employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingCategory {
    WorkEnvironment,
    Management,
    Compensation,
    CareerGrowth,
    WorkLifeBalance,
    TeamCollaboration,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 6] = [
        RatingCategory::WorkEnvironment,
        RatingCategory::Management,
        RatingCategory::Compensation,
        RatingCategory::CareerGrowth,
        RatingCategory::WorkLifeBalance,
        RatingCategory::TeamCollaboration,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RatingCategory::WorkEnvironment => "Work Environment",
            RatingCategory::Management => "Management & Leadership",
            RatingCategory::Compensation => "Compensation & Benefits",
            RatingCategory::CareerGrowth => "Career Growth Opportunities",
            RatingCategory::WorkLifeBalance => "Work-Life Balance",
            RatingCategory::TeamCollaboration => "Team Collaboration",
        }
    }
}

/// A 1–5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw value.
    pub fn new(value: u8) -> OffboardResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(OffboardError::invalid_input(
                "rating",
                value.to_string(),
                "Rating must be between 1 and 5",
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Verbal label for the scale.
    ///
    /// # Example
    /// ```
    /// use offboard_core::exit_interview::Rating;
    /// assert_eq!(Rating::default().label(), "Neutral");
    /// assert_eq!(Rating::new(5).unwrap().label(), "Excellent");
    /// ```
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Very Poor",
            2 => "Poor",
            3 => "Neutral",
            4 => "Good",
            _ => "Excellent",
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(3)
    }
}

impl TryFrom<u8> for Rating {
    type Error = OffboardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

/// Free-text questions on the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Question {
    PrimaryReason,
    LikedMost,
    Improvements,
    WouldRecommend,
    AdditionalComments,
}

impl Question {
    pub const ALL: [Question; 5] = [
        Question::PrimaryReason,
        Question::LikedMost,
        Question::Improvements,
        Question::WouldRecommend,
        Question::AdditionalComments,
    ];

    pub fn prompt(&self) -> &'static str {
        match self {
            Question::PrimaryReason => "What is the primary reason for leaving?",
            Question::LikedMost => "What did you enjoy most about working here?",
            Question::Improvements => "What could we have done better?",
            Question::WouldRecommend => "Would you recommend this company to a friend? Why?",
            Question::AdditionalComments => "Any additional comments?",
        }
    }
}

/// Factors that influenced the decision to leave (multi-select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecisionFactor {
    BetterCompensation,
    CareerAdvancement,
    WorkLifeBalance,
    ManagementIssues,
    Relocation,
    PersonalReasons,
    CompanyCulture,
    Other,
}

impl DecisionFactor {
    pub const ALL: [DecisionFactor; 8] = [
        DecisionFactor::BetterCompensation,
        DecisionFactor::CareerAdvancement,
        DecisionFactor::WorkLifeBalance,
        DecisionFactor::ManagementIssues,
        DecisionFactor::Relocation,
        DecisionFactor::PersonalReasons,
        DecisionFactor::CompanyCulture,
        DecisionFactor::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DecisionFactor::BetterCompensation => "Better compensation",
            DecisionFactor::CareerAdvancement => "Career advancement",
            DecisionFactor::WorkLifeBalance => "Work-life balance",
            DecisionFactor::ManagementIssues => "Management issues",
            DecisionFactor::Relocation => "Relocation",
            DecisionFactor::PersonalReasons => "Personal reasons",
            DecisionFactor::CompanyCulture => "Company culture",
            DecisionFactor::Other => "Other",
        }
    }
}

/// State of the feedback form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    ratings: BTreeMap<RatingCategory, Rating>,
    answers: BTreeMap<Question, String>,
    factors: BTreeSet<DecisionFactor>,
}

impl FeedbackForm {
    /// Fresh form: every category rated 3, no answers, no factors.
    pub fn new() -> Self {
        FeedbackForm {
            ratings: RatingCategory::ALL
                .into_iter()
                .map(|c| (c, Rating::default()))
                .collect(),
            answers: BTreeMap::new(),
            factors: BTreeSet::new(),
        }
    }

    pub fn rating(&self, category: RatingCategory) -> Rating {
        self.ratings.get(&category).copied().unwrap_or_default()
    }

    pub fn set_rating(&mut self, category: RatingCategory, value: u8) -> OffboardResult<Rating> {
        let rating = Rating::new(value)?;
        self.ratings.insert(category, rating);
        Ok(rating)
    }

    pub fn answer(&self, question: Question) -> &str {
        self.answers.get(&question).map(String::as_str).unwrap_or("")
    }

    pub fn set_answer(&mut self, question: Question, text: impl Into<String>) {
        self.answers.insert(question, text.into());
    }

    /// Flip a decision factor; returns whether it is now selected.
    pub fn toggle_factor(&mut self, factor: DecisionFactor) -> bool {
        if self.factors.remove(&factor) {
            false
        } else {
            self.factors.insert(factor);
            true
        }
    }

    pub fn is_selected(&self, factor: DecisionFactor) -> bool {
        self.factors.contains(&factor)
    }

    pub fn selected_factors(&self) -> impl Iterator<Item = DecisionFactor> + '_ {
        self.factors.iter().copied()
    }

    /// Mean of the six ratings.
    pub fn average_rating(&self) -> f64 {
        let total: u32 = RatingCategory::ALL
            .iter()
            .map(|c| u32::from(self.rating(*c).value()))
            .sum();
        f64::from(total) / RatingCategory::ALL.len() as f64
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        FeedbackForm::new()
    }
}

/// Snapshot returned by "Save Draft".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub setup: InterviewSetup,
    pub form: FeedbackForm,
}

/// Interview flow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStep {
    Setup,
    Feedback,
    Submitted,
}

/// Controller for the exit interview flow.
#[derive(Debug, Clone)]
pub struct ExitInterviewFlow {
    pub setup: InterviewSetup,
    form: FeedbackForm,
    step: InterviewStep,
}

impl ExitInterviewFlow {
    pub fn new() -> Self {
        ExitInterviewFlow {
            setup: InterviewSetup::default(),
            form: FeedbackForm::new(),
            step: InterviewStep::Setup,
        }
    }

    pub fn step(&self) -> &InterviewStep {
        &self.step
    }

    /// Validate the setup and open a fresh feedback form.
    pub fn start(&mut self) -> OffboardResult<&mut FeedbackForm> {
        if self.step != InterviewStep::Setup {
            return Err(OffboardError::invalid_transition(format!("{:?}", self.step), "start interview"));
        }
        self.setup.validate()?;
        tracing::debug!(interviewer = %self.setup.interviewer, "exit interview started");
        self.form = FeedbackForm::new();
        self.step = InterviewStep::Feedback;
        Ok(&mut self.form)
    }

    /// The feedback form, once started.
    pub fn form(&self) -> OffboardResult<&FeedbackForm> {
        self.require_feedback("view feedback")?;
        Ok(&self.form)
    }

    pub fn form_mut(&mut self) -> OffboardResult<&mut FeedbackForm> {
        self.require_feedback("edit feedback")?;
        Ok(&mut self.form)
    }

    /// Snapshot the form without leaving it.
    pub fn save_draft(&self) -> OffboardResult<FeedbackDraft> {
        self.require_feedback("save draft")?;
        tracing::debug!("exit interview draft saved");
        Ok(FeedbackDraft {
            setup: self.setup.clone(),
            form: self.form.clone(),
        })
    }

    /// Submit the interview. No data is retained; the caller is sent home.
    pub fn submit(&mut self) -> OffboardResult<Redirect> {
        self.require_feedback("submit")?;
        tracing::info!(
            average = self.form.average_rating(),
            factors = self.form.factors.len(),
            "exit interview submitted"
        );
        self.setup = InterviewSetup::default();
        self.form = FeedbackForm::new();
        self.step = InterviewStep::Submitted;
        Ok(Redirect::new(Route::Directory, std::time::Duration::ZERO))
    }

    fn require_feedback(&self, action: &str) -> OffboardResult<()> {
        if self.step != InterviewStep::Feedback {
            return Err(OffboardError::invalid_transition(format!("{:?}", self.step), action));
        }
        Ok(())
    }
}

impl Default for ExitInterviewFlow {
    fn default() -> Self {
        ExitInterviewFlow::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> ExitInterviewFlow {
        let mut flow = ExitInterviewFlow::new();
        flow.setup.date = NaiveDate::from_ymd_opt(2026, 11, 25);
        flow.setup.interviewer = "Olivia Martinez".to_string();
        flow.start().unwrap();
        flow
    }

    #[test]
    fn test_fresh_form_is_neutral() {
        let flow = started();
        let form = flow.form().unwrap();
        for category in RatingCategory::ALL {
            assert_eq!(form.rating(category).value(), 3);
            assert_eq!(form.rating(category).label(), "Neutral");
        }
        assert_eq!(form.average_rating(), 3.0);
    }

    #[test]
    fn test_rating_labels() {
        let labels: Vec<_> = (1..=5).map(|v| Rating::new(v).unwrap().label()).collect();
        assert_eq!(labels, ["Very Poor", "Poor", "Neutral", "Good", "Excellent"]);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        let mut flow = started();
        let form = flow.form_mut().unwrap();
        assert!(form.set_rating(RatingCategory::Management, 9).is_err());
        assert_eq!(form.rating(RatingCategory::Management).value(), 3);
        form.set_rating(RatingCategory::Management, 1).unwrap();
        assert_eq!(form.rating(RatingCategory::Management).label(), "Very Poor");
        assert_eq!(form.rating(RatingCategory::Compensation).value(), 3);
    }

    #[test]
    fn test_rating_deserialization_validates() {
        assert_eq!(serde_json::from_str::<Rating>("4").unwrap().value(), 4);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn test_factor_double_toggle_is_identity() {
        let mut form = FeedbackForm::new();
        for factor in DecisionFactor::ALL {
            let before = form.is_selected(factor);
            form.toggle_factor(factor);
            form.toggle_factor(factor);
            assert_eq!(form.is_selected(factor), before);
        }
        assert!(form.toggle_factor(DecisionFactor::Relocation));
        assert!(!form.toggle_factor(DecisionFactor::Relocation));
    }

    #[test]
    fn test_setup_requires_date_and_interviewer() {
        let mut flow = ExitInterviewFlow::new();
        assert_eq!(flow.start().unwrap_err(), OffboardError::missing_field("date"));
        flow.setup.date = NaiveDate::from_ymd_opt(2026, 11, 25);
        assert_eq!(flow.start().unwrap_err(), OffboardError::missing_field("interviewer"));
        assert!(flow.form().is_err());
    }

    #[test]
    fn test_draft_keeps_form_open() {
        let mut flow = started();
        flow.form_mut().unwrap().set_answer(Question::LikedMost, "The team");
        let draft = flow.save_draft().unwrap();
        assert_eq!(draft.form.answer(Question::LikedMost), "The team");
        assert_eq!(flow.step(), &InterviewStep::Feedback);
    }

    #[test]
    fn test_submit_is_terminal_and_retains_nothing() {
        let mut flow = started();
        flow.form_mut().unwrap().toggle_factor(DecisionFactor::Other);
        let redirect = flow.submit().unwrap();
        assert_eq!(redirect.to, Route::Directory);
        assert_eq!(flow.step(), &InterviewStep::Submitted);
        assert!(flow.setup.interviewer.is_empty());
        assert!(flow.submit().is_err());
        assert!(flow.save_draft().is_err());
    }
}
