//! Interactive flows driving the session from prompts.

use std::io::{BufRead, Write};
use std::thread;

use anyhow::Result;
use offboard_core::exit_interview::{DecisionFactor, InterviewMode, Question, RatingCategory};
use offboard_core::wizard::{ExitType, NoticePeriod};
use offboard_core::{DirectoryFilter, OffboardError, Session};

use crate::prompt::Prompter;
use crate::render;

/// Print user-facing errors and keep going; anything else aborts.
fn report<W: Write>(out: &mut W, err: OffboardError) -> Result<()> {
    if err.is_user_facing() {
        writeln!(out, "  {}", err)?;
        Ok(())
    } else {
        Err(err.into())
    }
}

/// Walk the three wizard steps, submit, then wait out the redirect.
pub fn run_offboarding<R: BufRead, W: Write>(session: &mut Session, p: &mut Prompter<R, W>) -> Result<()> {
    session.navigate("/new-offboarding")?;

    loop {
        let query = p.text("Search employees (blank for all): ", "")?;
        session.wizard.filter = DirectoryFilter::default().search(query);
        let view = render::step_view(&session.wizard.view());
        write!(p.out(), "{}", view)?;

        let id = p.required_text("Employee ID: ")?;
        match session.wizard.select(&id) {
            Ok(employee) => {
                let name = employee.full_name();
                writeln!(p.out(), "Selected {}", name)?;
                break;
            }
            Err(e) => report(p.out(), e)?,
        }
    }
    session.wizard.next()?;
    session.navigate("/new-offboarding-exit-details")?;
    let view = render::step_view(&session.wizard.view());
    write!(p.out(), "{}", view)?;

    let exit_types: Vec<(ExitType, &str)> = ExitType::ALL.iter().map(|t| (*t, t.display_name())).collect();
    let notice_periods: Vec<(NoticePeriod, &str)> =
        NoticePeriod::ALL.iter().map(|n| (*n, n.display_name())).collect();
    let default_notice = NoticePeriod::ALL
        .iter()
        .position(|n| *n == NoticePeriod::default())
        .unwrap_or(0);

    let exit_type = p.choose("Exit type", &exit_types, 0)?;
    let last_working_day = p.date("Last working day (YYYY-MM-DD): ", true)?;
    let effective_date = p.date("Effective date (YYYY-MM-DD, optional): ", false)?;
    let reason = p.text("Reason (optional): ", "")?;
    let notice_period = p.choose("Notice period", &notice_periods, default_notice)?;
    let eligible_for_rehire = p.confirm("Eligible for rehire?", false)?;
    let urgent_processing = p.confirm("Urgent processing?", false)?;

    {
        let details = session.wizard.details_mut()?;
        details.exit_type = exit_type;
        details.last_working_day = last_working_day;
        details.effective_date = effective_date;
        details.reason = reason;
        details.notice_period = notice_period;
        details.eligible_for_rehire = eligible_for_rehire;
        details.urgent_processing = urgent_processing;
    }
    session.wizard.next()?;
    session.navigate("/new-offboarding-review")?;
    let view = render::step_view(&session.wizard.view());
    write!(p.out(), "{}", view)?;

    if !p.confirm("Submit offboarding?", true)? {
        session.navigate("/")?;
        writeln!(p.out(), "Offboarding discarded.")?;
        return Ok(());
    }

    let submission = session.submit_wizard()?;
    let view = render::step_view(&session.wizard.view());
    write!(p.out(), "{}", view)?;
    writeln!(p.out(), "Case ID: {}", submission.receipt.case_id)?;

    let delay = submission.redirect.after;
    writeln!(p.out(), "Returning to the directory in {:.1}s...", delay.as_secs_f64())?;
    thread::sleep(delay);
    if let Some(route) = session.tick(delay)? {
        tracing::debug!(%route, "redirect fired");
    }
    Ok(())
}

/// Schedule the interview, collect feedback, and submit.
pub fn run_interview<R: BufRead, W: Write>(session: &mut Session, p: &mut Prompter<R, W>) -> Result<()> {
    session.navigate("/exit-interview")?;
    let view = render::interview(&session.interview);
    write!(p.out(), "{}", view)?;

    let modes: Vec<(InterviewMode, &str)> = InterviewMode::ALL.iter().map(|m| (*m, m.display_name())).collect();
    loop {
        session.interview.setup.date = p.date("Interview date (YYYY-MM-DD): ", true)?;
        session.interview.setup.interviewer = p.required_text("Interviewer: ")?;
        session.interview.setup.mode = p.choose("Interview mode", &modes, 0)?;
        match session.interview.start() {
            Ok(_) => break,
            Err(e) => report(p.out(), e)?,
        }
    }
    session.navigate("/exit-interview-form")?;

    for category in RatingCategory::ALL {
        let value = p.number(&format!("{} (1-5) [3]: ", category.display_name()), 1, 5, 3)?;
        session.interview.form_mut()?.set_rating(category, value)?;
    }
    for question in Question::ALL {
        let answer = p.text(&format!("{}\n> ", question.prompt()), "")?;
        session.interview.form_mut()?.set_answer(question, answer);
    }

    writeln!(p.out(), "Decision factors:")?;
    for (i, factor) in DecisionFactor::ALL.iter().enumerate() {
        writeln!(p.out(), "  {}. {}", i + 1, factor.display_name())?;
    }
    let picks = p.text("Numbers, comma separated (blank for none): ", "")?;
    for pick in picks.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match pick.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| DecisionFactor::ALL.get(i)) {
            Some(factor) => {
                session.interview.form_mut()?.toggle_factor(*factor);
            }
            None => writeln!(p.out(), "  Ignoring '{}'", pick)?,
        }
    }

    let view = render::interview(&session.interview);
    write!(p.out(), "{}", view)?;

    if p.confirm("Save a draft copy as JSON?", false)? {
        let draft = session.interview.save_draft()?;
        writeln!(p.out(), "{}", serde_json::to_string_pretty(&draft)?)?;
    }
    if p.confirm("Submit feedback?", true)? {
        session.submit_interview()?;
        writeln!(p.out(), "✓ Exit interview submitted.")?;
    } else {
        session.navigate("/")?;
        writeln!(p.out(), "Exit interview discarded.")?;
    }
    Ok(())
}
