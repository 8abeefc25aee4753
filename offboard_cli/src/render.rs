//! Plain-text rendering of core views.

use std::fmt::Write;

use chrono::NaiveDate;
use offboard_core::case::{CaseDetail, CaseTab};
use offboard_core::exit_interview::{ExitInterviewFlow, InterviewStep, Question, RatingCategory};
use offboard_core::profile::{EmployeeProfile, ProfileTab};
use offboard_core::wizard::{ExitData, StepView};
use offboard_core::{Employee, Screen, ViewMode};

const RULE: &str = "═══════════════════════════════════════";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

fn date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

pub fn employee_table(employees: &[&Employee]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<20} {:<26} {:<12} {:<12}",
        "ID", "Name", "Role", "Department", "Status"
    );
    for e in employees {
        let _ = writeln!(
            out,
            "{:<8} {:<20} {:<26} {:<12} {:<12}",
            e.id,
            e.full_name(),
            e.role,
            e.department,
            e.status.display_name()
        );
    }
    let _ = writeln!(out, "{} employee(s)", employees.len());
    out
}

pub fn employee_cards(employees: &[&Employee]) -> String {
    let mut out = String::new();
    for e in employees {
        let _ = writeln!(out, "┌ [{}] {} ({})", e.initials(), e.full_name(), e.id);
        let _ = writeln!(out, "│ {} · {}", e.role, e.department);
        let _ = writeln!(out, "│ {}", e.email);
        let _ = writeln!(out, "└ {} · joined {}", e.status.display_name(), date(e.joining_date));
    }
    let _ = writeln!(out, "{} employee(s)", employees.len());
    out
}

pub fn employees(employees: &[&Employee], mode: ViewMode) -> String {
    match mode {
        ViewMode::Table => employee_table(employees),
        ViewMode::Card => employee_cards(employees),
    }
}

fn exit_summary(out: &mut String, data: &ExitData) {
    let _ = writeln!(out, "Employee:          {} ({})", data.employee.full_name(), data.employee.id);
    let _ = writeln!(out, "Exit type:         {}", data.exit_type);
    let _ = writeln!(out, "Last working day:  {}", date(data.last_working_day));
    if let Some(effective) = data.effective_date {
        let _ = writeln!(out, "Effective date:    {}", date(effective));
    }
    let _ = writeln!(out, "Notice period:     {}", data.notice_period);
    if !data.reason.is_empty() {
        let _ = writeln!(out, "Reason:            {}", data.reason);
    }
    let yes_no = |b: bool| if b { "Yes" } else { "No" };
    let _ = writeln!(out, "Eligible rehire:   {}", yes_no(data.eligible_for_rehire));
    let _ = writeln!(out, "Urgent:            {}", yes_no(data.urgent_processing));
}

pub fn step_view(view: &StepView<'_>) -> String {
    let mut out = String::new();
    match view {
        StepView::SelectEmployee { employees, selected, .. } => {
            heading(&mut out, "Step 1 of 3 · Select Employee");
            out.push_str(&employee_table(employees));
            if let Some(e) = selected {
                let _ = writeln!(out, "Selected: {}", e.full_name());
            }
        }
        StepView::CaptureDetails { employee, details } => {
            heading(&mut out, "Step 2 of 3 · Exit Details");
            let _ = writeln!(out, "Employee: {} · {}", employee.full_name(), employee.role);
            let _ = writeln!(out, "Exit type: {}", details.exit_type);
            match details.last_working_day {
                Some(d) => {
                    let _ = writeln!(out, "Last working day: {}", date(d));
                }
                None => {
                    let _ = writeln!(out, "Last working day: (required)");
                }
            }
        }
        StepView::Review { data, automated_tasks } => {
            heading(&mut out, "Step 3 of 3 · Review & Submit");
            exit_summary(&mut out, data);
            let _ = writeln!(out);
            let _ = writeln!(out, "Automated tasks:");
            for task in automated_tasks.iter() {
                let _ = writeln!(out, "  • {}", task);
            }
        }
        StepView::Submitted { message } => {
            let _ = writeln!(out, "✓ {}", message);
        }
        StepView::Guard { message, return_to, .. } => {
            let _ = writeln!(out, "{}", message);
            let _ = writeln!(out, "Go to {}", return_to.path());
        }
    }
    out
}

pub fn case_header(case: &CaseDetail, today: NaiveDate) -> String {
    let mut out = String::new();
    let e = &case.employee;
    heading(&mut out, &format!("{} · {}", e.full_name(), e.role));
    let _ = writeln!(out, "Case:        {}", case.case_id);
    let _ = writeln!(out, "Department:  {}", e.department);
    let _ = writeln!(out, "Last day:    {} ({} days remaining)", date(case.last_working_day), case.days_remaining(today));
    let _ = writeln!(out, "Progress:    {}%", case.tasks.progress_percent());
    let tabs: Vec<String> = case
        .tabs
        .panels()
        .map(|(key, label)| {
            if key == case.tabs.selected() {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));
    out
}

pub fn case_tab(case: &CaseDetail) -> String {
    let mut out = String::new();
    match case.tabs.selected() {
        CaseTab::Tasks => {
            for t in case.tasks.visible() {
                let _ = writeln!(
                    out,
                    "{:<8} {:<36} {:<12} {:<7} {:<12} due {}",
                    t.id,
                    t.title,
                    t.department,
                    t.priority.display_name(),
                    t.status.display_name(),
                    date(t.due_date)
                );
            }
        }
        CaseTab::Comments => {
            for c in case.comments.all() {
                let _ = writeln!(out, "[{}] {} · {} · {}", c.initials, c.author, c.role, c.timestamp.format("%b %-d, %Y %H:%M"));
                let _ = writeln!(out, "    {}", c.text);
            }
            if case.comments.is_empty() {
                let _ = writeln!(out, "No comments yet.");
            }
        }
        CaseTab::Documents => {
            for d in case.documents.filtered() {
                let _ = writeln!(
                    out,
                    "{:<8} {:<34} {:<6} {:>9} {:<8} {}",
                    d.id,
                    d.name,
                    d.doc_type,
                    d.size,
                    d.category,
                    date(d.date)
                );
            }
        }
        CaseTab::Timeline => {
            for event in case.timeline.visible() {
                let _ = writeln!(
                    out,
                    "● {:<40} {:<12} {}",
                    event.title,
                    event.status.display_name(),
                    event.timestamp.format("%b %-d, %Y %H:%M")
                );
            }
        }
        CaseTab::Access => {
            for (system, revoked) in case.access.systems() {
                let state = if revoked { "Revoked" } else { "Active" };
                let _ = writeln!(out, "{:<24} {}", system, state);
            }
            let _ = writeln!(out, "{} system(s) revoked", case.access.revoked_count());
        }
    }
    out
}

pub fn profile(profile: &EmployeeProfile, today: NaiveDate) -> String {
    let mut out = String::new();
    let e = &profile.employee;
    heading(&mut out, &format!("{} · {}", e.full_name(), e.role));
    match profile.tabs.selected() {
        ProfileTab::Personal => {
            let _ = writeln!(out, "Email:     {}", e.email);
            let _ = writeln!(out, "Phone:     {}", e.phone.as_deref().unwrap_or("-"));
            let _ = writeln!(out, "Location:  {}", e.location.as_deref().unwrap_or("-"));
        }
        ProfileTab::Employment => {
            let _ = writeln!(out, "Department:  {}", e.department);
            let _ = writeln!(out, "Manager:     {}", e.manager.as_deref().unwrap_or("-"));
            let _ = writeln!(out, "Joined:      {} ({} years)", date(e.joining_date), profile.tenure_years(today));
            let _ = writeln!(out, "Status:      {}", e.status.display_name());
        }
        ProfileTab::Performance => {
            for r in profile.reviews.all() {
                let _ = writeln!(out, "{:<8} {:.1}  {} · {}", r.period, r.rating, r.reviewer, date(r.date));
                let _ = writeln!(out, "         {}", r.comments);
            }
            if let Some(avg) = profile.reviews.average_rating() {
                let _ = writeln!(out, "Average rating: {:.1}", avg);
            }
        }
    }
    out
}

pub fn interview(flow: &ExitInterviewFlow) -> String {
    let mut out = String::new();
    match (flow.step(), flow.form()) {
        (InterviewStep::Feedback, Ok(form)) => {
            heading(&mut out, "Exit Interview Feedback");
            for category in RatingCategory::ALL {
                let rating = form.rating(category);
                let _ = writeln!(out, "{:<22} {} ({})", category.display_name(), rating.value(), rating.label());
            }
            let _ = writeln!(out, "Average: {:.1}", form.average_rating());
            for question in Question::ALL {
                let answer = form.answer(question);
                if !answer.is_empty() {
                    let _ = writeln!(out, "{}\n    {}", question.prompt(), answer);
                }
            }
            let factors: Vec<&str> = form.selected_factors().map(|f| f.display_name()).collect();
            if !factors.is_empty() {
                let _ = writeln!(out, "Factors: {}", factors.join(", "));
            }
        }
        _ => {
            heading(&mut out, "Exit Interview Setup");
            let _ = writeln!(out, "Schedule the interview to open the feedback form.");
        }
    }
    out
}

pub fn screen(screen: &Screen<'_>, today: NaiveDate) -> String {
    match screen {
        Screen::Directory { employees: list, view_mode } => employees(list, *view_mode),
        Screen::Wizard(view) => step_view(view),
        Screen::ExitInterview(flow) => interview(flow),
        Screen::CaseDetail(case) => {
            let mut out = case_header(case, today);
            out.push_str(&case_tab(case));
            out
        }
        Screen::Profile(p) => profile(p, today),
        Screen::Guard { message, return_to } => format!("{}\nGo to {}\n", message, return_to.path()),
        Screen::NotFound(path) => format!("404 · No page at {}\n", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offboard_core::{Directory, DirectoryFilter, Settings};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_table_lists_every_employee() {
        let directory = Directory::seeded();
        let all = directory.filter(&DirectoryFilter::default());
        let text = employee_table(&all);
        assert!(text.contains("Sarah Mitchell"));
        assert!(text.contains("8 employee(s)"));
    }

    #[test]
    fn test_cards_show_initials() {
        let directory = Directory::seeded();
        let found = directory.filter(&DirectoryFilter::default().search("priya"));
        let text = employees(&found, ViewMode::Card);
        assert!(text.contains("[PS] Priya Sharma"));
    }

    #[test]
    fn test_case_tab_marks_selection() {
        let directory = Directory::seeded();
        let mut case = CaseDetail::open(&directory, "EMP004", &Settings::default(), today()).unwrap();
        case.tabs.select(CaseTab::Access).unwrap();
        let header = case_header(&case, today());
        assert!(header.contains("[Access & Security]"));
        assert!(case_tab(&case).contains("0 system(s) revoked"));
    }

    #[test]
    fn test_not_found_screen() {
        let text = screen(&Screen::NotFound("/payroll".to_string()), today());
        assert!(text.contains("/payroll"));
    }
}
