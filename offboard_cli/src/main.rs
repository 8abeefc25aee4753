//! # Offboard CLI Application
//!
//! Terminal front end for the offboarding workflow: browse the directory,
//! open case details and profiles, run the offboarding wizard and exit
//! interview through prompts, and issue experience certificates.

mod flows;
mod prompt;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use offboard_core::certificate::{issue_certificate, CertificateData, DirectorySink};
use offboard_core::case::TimelineFilter;
use offboard_core::profile::{EmployeeProfile, ProfileTab};
use offboard_core::{
    load_settings, save_settings, CaseDetail, CaseTab, Directory, DirectoryFilter, EmployeeStatus, Session, ViewMode,
};

use crate::prompt::Prompter;

#[derive(Debug, Parser)]
#[command(name = "offboard", version, about = "HR offboarding workflow")]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = "offboard.json")]
    config: PathBuf,

    /// Log filter, overrides the settings file (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the employee directory
    Employees {
        /// Case-insensitive search across name, role, department, email, id and status
        #[arg(long, short)]
        search: Option<String>,
        /// Exact role title
        #[arg(long)]
        position: Option<String>,
        /// active, on-notice, offboarding or offboarded
        #[arg(long)]
        status: Option<String>,
        /// Card layout instead of the table
        #[arg(long)]
        cards: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show an employee's offboarding case
    Show {
        id: String,
        /// tasks, comments, documents, timeline or access
        #[arg(long, default_value = "tasks")]
        tab: String,
        /// Timeline filter: all, completed or in-progress
        #[arg(long)]
        events: Option<String>,
    },
    /// Show an employee's profile
    Profile {
        id: String,
        /// personal, employment or performance
        #[arg(long, default_value = "personal")]
        tab: String,
    },
    /// Run the offboarding wizard
    Offboard,
    /// Run an exit interview
    Interview,
    /// Write an experience certificate into the download directory
    Certificate {
        id: String,
        #[arg(long, default_value = "HR Manager")]
        issued_by: String,
    },
    /// Resolve a path and print its screen
    Route { path: String },
    /// Print the effective settings
    Config {
        /// Write them to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn parse_case_tab(s: &str) -> Result<CaseTab> {
    CaseTab::ALL
        .into_iter()
        .find(|t| t.label().eq_ignore_ascii_case(s) || (*t == CaseTab::Access && s.eq_ignore_ascii_case("access")))
        .ok_or_else(|| anyhow!("unknown tab '{}'", s))
}

fn parse_profile_tab(s: &str) -> Result<ProfileTab> {
    ProfileTab::ALL
        .into_iter()
        .find(|t| t.label().eq_ignore_ascii_case(s))
        .ok_or_else(|| anyhow!("unknown tab '{}'", s))
}

fn parse_timeline_filter(s: &str) -> Result<TimelineFilter> {
    match s.to_ascii_lowercase().as_str() {
        "all" => Ok(TimelineFilter::AllEvents),
        "completed" => Ok(TimelineFilter::CompletedOnly),
        "in-progress" | "inprogress" => Ok(TimelineFilter::InProgressOnly),
        other => bail!("unknown timeline filter '{}'", other),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(&cli.config).with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }
    offboard_core::logging::init(&settings.log_level);
    tracing::debug!(config = %cli.config.display(), "settings loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Employees {
            search,
            position,
            status,
            cards,
            json,
        } => {
            let status = match status.as_deref() {
                Some(s) => Some(EmployeeStatus::parse(&s.replace('-', " ")).ok_or_else(|| anyhow!("unknown status '{}'", s))?),
                None => None,
            };
            let filter = DirectoryFilter::default()
                .search(search.unwrap_or_default())
                .filter_by_position(position)
                .filter_by_status(status);

            let mut session = Session::new(settings, today());
            session.filter = filter;
            if cards {
                session.directory.view_mode = ViewMode::Card;
            }
            let employees = session.directory.filter(&session.filter);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&employees)?)?;
            } else {
                write!(out, "{}", render::employees(&employees, session.directory.view_mode))?;
            }
        }
        Command::Show { id, tab, events } => {
            let day = today();
            let mut case = CaseDetail::open(&Directory::seeded(), &id, &settings, day)?;
            case.tabs.select(parse_case_tab(&tab)?)?;
            if let Some(events) = events {
                case.timeline.filter = parse_timeline_filter(&events)?;
            }
            write!(out, "{}", render::case_header(&case, day))?;
            write!(out, "{}", render::case_tab(&case))?;
        }
        Command::Profile { id, tab } => {
            let day = today();
            let mut profile = EmployeeProfile::open(&Directory::seeded(), &id)?;
            profile.tabs.select(parse_profile_tab(&tab)?)?;
            write!(out, "{}", render::profile(&profile, day))?;
        }
        Command::Offboard => {
            drop(out);
            let mut session = Session::new(settings, today());
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            flows::run_offboarding(&mut session, &mut prompter)?;
        }
        Command::Interview => {
            drop(out);
            let mut session = Session::new(settings, today());
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            flows::run_interview(&mut session, &mut prompter)?;
        }
        Command::Certificate { id, issued_by } => {
            let day = today();
            let directory = Directory::seeded();
            let employee = directory.lookup(&id)?;
            let data = CertificateData::for_employee(employee, day, issued_by);
            let mut sink = DirectorySink::new(settings.download_dir.clone());
            let path = issue_certificate(&mut sink, &data)?;
            writeln!(out, "Certificate written to {}", path.display())?;
        }
        Command::Route { path } => {
            let day = today();
            let mut session = Session::new(settings, day);
            session.navigate(&path)?;
            writeln!(out, "{} → {:?}", path, session.route())?;
            write!(out, "{}", render::screen(&session.screen(), day))?;
        }
        Command::Config { init } => {
            if init {
                save_settings(&settings, &cli.config)?;
                tracing::info!(path = %cli.config.display(), "settings written");
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
        }
    }
    Ok(())
}

