use crate::config::JoyPathConfig;
use crate::error::WizardError;
use crate::gateway;
use crate::gemini::GenerateContent;
use crate::wizard::{Step, WizardSession};

/// Drives a wizard session through its two asynchronous transitions.
///
/// Holds the model client and per-call settings; the session itself is
/// passed in by the caller so multiple sessions can share one orchestrator.
pub struct WizardOrchestrator<C> {
    client: C,
    task_model: String,
    report_model: String,
    max_tasks: usize,
}

impl<C: GenerateContent> WizardOrchestrator<C> {
    /// Create an orchestrator with the default models and task cap.
    pub fn new(client: C) -> Self {
        Self {
            client,
            task_model: gateway::DEFAULT_TASK_MODEL.to_string(),
            report_model: gateway::DEFAULT_REPORT_MODEL.to_string(),
            max_tasks: gateway::DEFAULT_MAX_TASKS,
        }
    }

    /// Create an orchestrator with models and cap taken from configuration.
    pub fn from_config(client: C, config: &JoyPathConfig) -> Self {
        Self {
            client,
            task_model: config.task_model.clone(),
            report_model: config.report_model.clone(),
            max_tasks: config.max_tasks,
        }
    }

    /// Submit the entered jobs and generate tasks from them.
    ///
    /// Requires JOB_INPUT with at least one job. While a call is already in
    /// flight this is a no-op: no second request is issued and the session
    /// is untouched. On success the session advances to TASK_RATING; on any
    /// gateway failure it stays in JOB_INPUT exactly as it was.
    pub async fn submit_jobs(&self, session: &mut WizardSession) -> Result<(), WizardError> {
        if session.is_loading {
            return Ok(());
        }
        if session.step != Step::JobInput {
            return Err(WizardError::Validation(format!(
                "jobs can only be submitted from JOB_INPUT, not {}",
                session.step
            )));
        }
        if session.jobs.is_empty() {
            return Err(WizardError::Validation(
                "add at least one job title before continuing".into(),
            ));
        }

        session.is_loading = true;
        let result =
            gateway::generate_tasks(&self.client, &self.task_model, &session.jobs, self.max_tasks)
                .await;
        session.is_loading = false;

        session.apply_tasks(result?);
        Ok(())
    }

    /// Submit the completed ratings and generate the career report.
    ///
    /// Requires TASK_RATING with every task rated (N/A counts as rated); the
    /// precondition is checked before any network activity. On success the
    /// session advances to REPORT; on failure it stays in TASK_RATING with
    /// its ratings intact.
    pub async fn submit_ratings(&self, session: &mut WizardSession) -> Result<(), WizardError> {
        if session.is_loading {
            return Ok(());
        }
        if session.step != Step::TaskRating {
            return Err(WizardError::Validation(format!(
                "ratings can only be submitted from TASK_RATING, not {}",
                session.step
            )));
        }
        if !session.all_tasks_rated() {
            let missing = session.tasks.len() - session.rated_count();
            return Err(WizardError::Validation(format!(
                "{missing} task(s) still need a rating"
            )));
        }

        let ratings = session.task_ratings();
        session.is_loading = true;
        let result = gateway::generate_report(&self.client, &self.report_model, &ratings).await;
        session.is_loading = false;

        session.apply_report(result?);
        Ok(())
    }
}
