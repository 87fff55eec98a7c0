mod cli;
mod config;
mod demo;
mod error;
mod gateway;
mod gemini;
mod orchestrator;
mod ui;
mod wizard;

use anyhow::{Result, bail};
use clap::Parser;

use cli::{Cli, Command};
use config::JoyPathConfig;
use demo::DemoModel;
use gemini::{GeminiClient, GenerateContent};
use orchestrator::WizardOrchestrator;
use ui::{ModelSpinner, WizardScreen};
use wizard::{Rating, SessionRecord, Step, WizardSession};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => JoyPathConfig::load_from(path)?,
        None => JoyPathConfig::load()?,
    };
    if let Some(max_tasks) = cli.max_tasks {
        config.max_tasks = max_tasks;
    }

    match cli.command {
        Command::Run => {
            if config.api_key.is_empty() {
                bail!(
                    "no API key configured; set the GEMINI_API_KEY environment variable \
                     or api_key in joypath.toml"
                );
            }
            let client = GeminiClient::new(config.api_key.clone());
            run_wizard(WizardOrchestrator::from_config(client, &config)).await
        }
        Command::Demo => run_wizard(WizardOrchestrator::from_config(DemoModel, &config)).await,
    }
}

/// Drives one interactive session through the three steps until the user
/// declines to start over.
async fn run_wizard<C: GenerateContent>(orch: WizardOrchestrator<C>) -> Result<()> {
    let screen = WizardScreen::new();
    let mut session = WizardSession::new();

    loop {
        match session.step {
            Step::JobInput => {
                if !job_input_step(&screen, &orch, &mut session).await? {
                    return Ok(());
                }
            }
            Step::TaskRating => {
                if !task_rating_step(&screen, &orch, &mut session).await? {
                    return Ok(());
                }
            }
            Step::Report => {
                if !report_step(&screen, &mut session)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Collect job titles, then submit them. Returns `false` when the user quits.
async fn job_input_step<C: GenerateContent>(
    screen: &WizardScreen,
    orch: &WizardOrchestrator<C>,
    session: &mut WizardSession,
) -> Result<bool> {
    screen.banner(Step::JobInput);
    screen.hint("List the job titles you've held. One per line, blank line to continue, -N to remove entry N.");
    screen.jobs(&session.jobs);

    loop {
        let line = screen.prompt("›")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if session.jobs.is_empty() {
                screen.error("add at least one job title before continuing");
                continue;
            }
            break;
        }

        if let Some(n) = trimmed.strip_prefix('-').and_then(|n| n.parse::<usize>().ok()) {
            if (1..=session.jobs.len()).contains(&n) {
                let id = session.jobs[n - 1].id.clone();
                session.remove_job(&id)?;
                screen.jobs(&session.jobs);
            } else {
                screen.error("no such entry");
            }
            continue;
        }

        match session.add_job(trimmed) {
            Ok(_) => screen.jobs(&session.jobs),
            Err(e) => screen.error(&e.to_string()),
        }
    }

    let spinner = ModelSpinner::start("Generating tasks from your work history...");
    let result = orch.submit_jobs(session).await;
    spinner.clear();

    match result {
        Ok(()) => {
            screen.success(&format!("Generated {} tasks to rate", session.tasks.len()));
            Ok(true)
        }
        Err(e) => {
            screen.error(&e.to_string());
            if e.is_retryable() {
                offer_retry(screen)
            } else {
                Ok(true)
            }
        }
    }
}

/// Prompt a rating for every unrated task, then submit. Returns `false` when
/// the user quits.
async fn task_rating_step<C: GenerateContent>(
    screen: &WizardScreen,
    orch: &WizardOrchestrator<C>,
    session: &mut WizardSession,
) -> Result<bool> {
    screen.banner(Step::TaskRating);
    screen.hint("Rate how much you enjoy each task: 1 (dread it) to 5 (love it), or n if you never performed it.");

    let pending: Vec<_> = session
        .tasks
        .iter()
        .filter(|t| !session.ratings.contains_key(&t.id))
        .cloned()
        .collect();
    let total = session.tasks.len();
    let already_rated = total - pending.len();

    for (i, task) in pending.iter().enumerate() {
        screen.task(already_rated + i, total, task);
        loop {
            let line = screen.prompt("  rating ›")?;
            match Rating::parse(&line) {
                Some(rating) => {
                    session.set_rating(&task.id, rating)?;
                    screen.rated(rating);
                    break;
                }
                None => screen.error("enter a number from 1 to 5, or n for N/A"),
            }
        }
    }

    let spinner = ModelSpinner::start("Analyzing your ratings...");
    let result = orch.submit_ratings(session).await;
    spinner.clear();

    match result {
        Ok(()) => Ok(true),
        Err(e) => {
            screen.error(&e.to_string());
            if e.is_retryable() {
                offer_retry(screen)
            } else {
                Ok(true)
            }
        }
    }
}

/// Render the report and the session record, then ask whether to start over.
/// Returns `false` when the user is done.
fn report_step(screen: &WizardScreen, session: &mut WizardSession) -> Result<bool> {
    screen.banner(Step::Report);
    if let Some(report) = &session.report {
        screen.report(report);
    }
    if let Some(record) = SessionRecord::from_session(session) {
        screen.record(&record);
    }

    let line = screen.prompt("Start over with a fresh session? (y/N) ›")?;
    if line.trim().eq_ignore_ascii_case("y") {
        session.reset();
        Ok(true)
    } else {
        Ok(false)
    }
}

/// After a retry-able failure, ask whether to try again.
fn offer_retry(screen: &WizardScreen) -> Result<bool> {
    let line = screen.prompt("Try again? (Y/q) ›")?;
    Ok(!line.trim().eq_ignore_ascii_case("q"))
}
