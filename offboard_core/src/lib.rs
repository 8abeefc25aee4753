//! # offboard_core - HR Offboarding Workflow Engine
//!
//! `offboard_core` holds all of the state behind the offboarding application:
//! the employee directory, the three-step offboarding wizard, the exit
//! interview flow, and the per-employee case detail tabs. Front ends render
//! the views this crate exposes and forward user actions to it.
//!
//! ## Design Philosophy
//!
//! - **In-memory**: Seed data only; nothing is persisted between runs
//! - **JSON-First**: Domain types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit State**: The wizard owns its accumulated state; steps are views
//!
//! ## Quick Start
//!
//! ```rust
//! use offboard_core::directory::{Directory, DirectoryFilter};
//!
//! let directory = Directory::seeded();
//! let active = directory.filter(&DirectoryFilter::default().search("active"));
//! assert!(!active.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`directory`] / [`employee`] - Employee records and filtered views
//! - [`wizard`] - Offboarding wizard controller
//! - [`exit_interview`] - Exit interview setup and feedback form
//! - [`case`] - Case detail tabs (tasks, comments, documents, timeline, access)
//! - [`profile`] - Employee profile with performance reviews
//! - [`certificate`] - Experience certificate generation
//! - [`router`] / [`navigation`] - Route table and delayed redirects
//! - [`session`] - Route mounting and per-view state lifetimes
//! - [`settings`] - JSON settings file
//! - [`errors`] - Structured error types

pub mod case;
pub mod certificate;
pub mod directory;
pub mod employee;
pub mod errors;
pub mod exit_interview;
pub mod ids;
pub mod logging;
pub mod navigation;
pub mod profile;
pub mod router;
pub mod session;
pub mod settings;
pub mod tabs;
pub mod wizard;

// Re-export commonly used types at crate root for convenience
pub use case::{CaseDetail, CaseTab};
pub use directory::{Directory, DirectoryFilter, ViewMode};
pub use employee::{Employee, EmployeeStatus};
pub use errors::{OffboardError, OffboardResult};
pub use exit_interview::ExitInterviewFlow;
pub use router::Route;
pub use session::{Screen, Session};
pub use settings::{load_settings, save_settings, Settings};
pub use wizard::{OffboardingWizard, StepView, WizardStep};
