use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WizardError;

use super::types::{CareerReport, Job, Rating, Task, TaskRating};

/// The three steps of the wizard.
///
/// Each session flows through: JOB_INPUT → TASK_RATING → REPORT.
/// There are no backward transitions; `reset` is the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    JobInput,
    TaskRating,
    Report,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::JobInput => write!(f, "JOB_INPUT"),
            Step::TaskRating => write!(f, "TASK_RATING"),
            Step::Report => write!(f, "REPORT"),
        }
    }
}

impl Step {
    /// 1-based position for the step indicator.
    pub fn position(&self) -> usize {
        match self {
            Step::JobInput => 1,
            Step::TaskRating => 2,
            Step::Report => 3,
        }
    }
}

/// One user's run through the three-step flow.
///
/// Holds the current step and all accumulated data. Lives only in memory;
/// multiple sessions can coexist since nothing here is global.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub id: String,
    pub step: Step,
    pub jobs: Vec<Job>,
    pub tasks: Vec<Task>,
    pub ratings: HashMap<String, Rating>,
    pub report: Option<CareerReport>,
    pub is_loading: bool,
    pub created_at: DateTime<Utc>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            step: Step::JobInput,
            jobs: Vec::new(),
            tasks: Vec::new(),
            ratings: HashMap::new(),
            report: None,
            is_loading: false,
            created_at: Utc::now(),
        }
    }

    /// Add a job title. Only permitted in JOB_INPUT; blank titles (after
    /// trimming) are rejected. Duplicate titles are allowed.
    pub fn add_job(&mut self, title: &str) -> Result<&Job, WizardError> {
        if self.step != Step::JobInput {
            return Err(WizardError::Validation(
                "jobs can only be edited before tasks are generated".into(),
            ));
        }
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(WizardError::Validation(
                "job title must not be empty".into(),
            ));
        }
        self.jobs.push(Job::new(trimmed.to_string()));
        Ok(self.jobs.last().expect("job was just pushed"))
    }

    /// Remove a job by id. Only permitted in JOB_INPUT; removing an id that
    /// is not present is a no-op.
    pub fn remove_job(&mut self, id: &str) -> Result<(), WizardError> {
        if self.step != Step::JobInput {
            return Err(WizardError::Validation(
                "jobs can only be edited before tasks are generated".into(),
            ));
        }
        self.jobs.retain(|j| j.id != id);
        Ok(())
    }

    /// Rate a task. Only permitted in TASK_RATING, and only for ids that
    /// belong to the generated task set; overwrites any prior rating.
    pub fn set_rating(&mut self, task_id: &str, rating: Rating) -> Result<(), WizardError> {
        if self.step != Step::TaskRating {
            return Err(WizardError::Validation(
                "ratings can only be set while rating tasks".into(),
            ));
        }
        if !self.tasks.iter().any(|t| t.id == task_id) {
            return Err(WizardError::Validation(format!(
                "unknown task id: {task_id}"
            )));
        }
        self.ratings.insert(task_id.to_string(), rating);
        Ok(())
    }

    /// Whether every generated task has a rating entry (N/A counts).
    pub fn all_tasks_rated(&self) -> bool {
        self.tasks.iter().all(|t| self.ratings.contains_key(&t.id))
    }

    /// Number of tasks that have a rating entry.
    pub fn rated_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| self.ratings.contains_key(&t.id))
            .count()
    }

    /// Join each task with its rating, in task order. Tasks without a rating
    /// are skipped, so callers should check `all_tasks_rated` first.
    pub fn task_ratings(&self) -> Vec<TaskRating> {
        self.tasks
            .iter()
            .filter_map(|t| {
                self.ratings.get(&t.id).map(|r| TaskRating {
                    task_id: t.id.clone(),
                    task_description: t.description.clone(),
                    rating: *r,
                })
            })
            .collect()
    }

    /// Store the generated tasks and advance to TASK_RATING.
    ///
    /// Any stale ratings from a previous task set are cleared, keeping the
    /// invariant that rating keys always belong to the current tasks.
    pub fn apply_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.ratings.clear();
        self.step = Step::TaskRating;
    }

    /// Store the report and advance to REPORT.
    pub fn apply_report(&mut self, report: CareerReport) {
        self.report = Some(report);
        self.step = Step::Report;
    }

    /// Clear all accumulated data and return to JOB_INPUT. The session keeps
    /// its identity (`id`, `created_at`).
    pub fn reset(&mut self) {
        self.step = Step::JobInput;
        self.jobs.clear();
        self.tasks.clear();
        self.ratings.clear();
        self.report = None;
        self.is_loading = false;
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::types::{Archetype, EnvironmentFit, SessionRecord};

    fn task(id: &str, description: &str) -> Task {
        Task {
            id: id.into(),
            description: description.into(),
            category: "Technical".into(),
        }
    }

    fn sample_report() -> CareerReport {
        CareerReport {
            archetype: Archetype {
                name: "The Connector".into(),
                description: "People-first operator".into(),
                power_move: "Run the room".into(),
            },
            environment: EnvironmentFit {
                culture_type: "Agency".into(),
                ideal_setup: "Hybrid".into(),
                warning_signs: vec!["Siloed teams".into()],
            },
            top_tasks: vec![],
            recommendations: vec![],
            summary: "Summary".into(),
        }
    }

    #[test]
    fn new_session_starts_empty_in_job_input() {
        let session = WizardSession::new();
        assert_eq!(session.step, Step::JobInput);
        assert!(session.jobs.is_empty());
        assert!(session.tasks.is_empty());
        assert!(session.ratings.is_empty());
        assert!(session.report.is_none());
        assert!(!session.is_loading);
        assert!(!session.id.is_empty());
    }

    #[test]
    fn add_job_trims_whitespace() {
        let mut session = WizardSession::new();
        let job = session.add_job("  Nurse  ").unwrap();
        assert_eq!(job.title, "Nurse");
    }

    #[test]
    fn add_job_rejects_blank_titles() {
        let mut session = WizardSession::new();
        assert!(session.add_job("").is_err());
        assert!(session.add_job("   ").is_err());
        assert!(session.jobs.is_empty());
    }

    #[test]
    fn add_job_allows_duplicate_titles() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.add_job("Nurse").unwrap();
        assert_eq!(session.jobs.len(), 2);
        assert_ne!(session.jobs[0].id, session.jobs[1].id);
    }

    #[test]
    fn add_job_rejected_after_job_input() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);

        let result = session.add_job("Teacher");
        assert!(matches!(result, Err(WizardError::Validation(_))));
        assert_eq!(session.jobs.len(), 1);
    }

    #[test]
    fn remove_job_drops_matching_id_only() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.add_job("Teacher").unwrap();
        let id = session.jobs[0].id.clone();

        session.remove_job(&id).unwrap();
        assert_eq!(session.jobs.len(), 1);
        assert_eq!(session.jobs[0].title, "Teacher");

        // Unknown id is a no-op.
        session.remove_job("missing").unwrap();
        assert_eq!(session.jobs.len(), 1);
    }

    #[test]
    fn remove_job_rejected_after_job_input() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        let id = session.jobs[0].id.clone();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);

        assert!(session.remove_job(&id).is_err());
        assert_eq!(session.jobs.len(), 1);
    }

    #[test]
    fn set_rating_requires_task_rating_step() {
        let mut session = WizardSession::new();
        let result = session.set_rating("t1", Rating::Scored(5));
        assert!(matches!(result, Err(WizardError::Validation(_))));
    }

    #[test]
    fn set_rating_rejects_unknown_task_ids() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);

        assert!(session.set_rating("t2", Rating::Scored(3)).is_err());
        assert!(session.ratings.is_empty());
    }

    #[test]
    fn set_rating_overwrites_previous_value() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);

        session.set_rating("t1", Rating::Scored(2)).unwrap();
        session.set_rating("t1", Rating::Scored(5)).unwrap();
        assert_eq!(session.ratings["t1"], Rating::Scored(5));
        assert_eq!(session.ratings.len(), 1);
    }

    #[test]
    fn all_tasks_rated_counts_na_as_rated() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals"), task("t2", "File reports")]);

        assert!(!session.all_tasks_rated());
        session.set_rating("t1", Rating::Scored(5)).unwrap();
        assert!(!session.all_tasks_rated());
        assert_eq!(session.rated_count(), 1);
        session.set_rating("t2", Rating::NotApplicable).unwrap();
        assert!(session.all_tasks_rated());
    }

    #[test]
    fn task_ratings_projection_preserves_task_order() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals"), task("t2", "File reports")]);
        session.set_rating("t2", Rating::NotApplicable).unwrap();
        session.set_rating("t1", Rating::Scored(4)).unwrap();

        let ratings = session.task_ratings();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].task_id, "t1");
        assert_eq!(ratings[0].rating, Rating::Scored(4));
        assert_eq!(ratings[1].task_id, "t2");
        assert_eq!(ratings[1].rating, Rating::NotApplicable);
    }

    #[test]
    fn apply_tasks_clears_stale_ratings() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);
        session.set_rating("t1", Rating::Scored(5)).unwrap();

        session.apply_tasks(vec![task("t9", "Draft rosters")]);
        assert!(session.ratings.is_empty());
        assert_eq!(session.step, Step::TaskRating);
        assert_eq!(session.tasks[0].id, "t9");
    }

    #[test]
    fn apply_report_moves_to_report_step() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);
        session.set_rating("t1", Rating::Scored(5)).unwrap();

        session.apply_report(sample_report());
        assert_eq!(session.step, Step::Report);
        assert!(session.report.is_some());
    }

    #[test]
    fn report_is_absent_outside_report_step() {
        let mut session = WizardSession::new();
        assert!(session.report.is_none());
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);
        assert!(session.report.is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = WizardSession::new();
        let id = session.id.clone();
        session.add_job("Nurse").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals")]);
        session.set_rating("t1", Rating::Scored(3)).unwrap();
        session.apply_report(sample_report());

        session.reset();
        let after_once = format!("{:?}", session);
        session.reset();
        let after_twice = format!("{:?}", session);

        assert_eq!(after_once, after_twice);
        assert_eq!(session.step, Step::JobInput);
        assert!(session.jobs.is_empty());
        assert!(session.tasks.is_empty());
        assert!(session.ratings.is_empty());
        assert!(session.report.is_none());
        assert!(!session.is_loading);
        assert_eq!(session.id, id);
    }

    #[test]
    fn session_record_from_completed_session() {
        let mut session = WizardSession::new();
        session.add_job("Nurse").unwrap();
        session.add_job("Teacher").unwrap();
        session.apply_tasks(vec![task("t1", "Chart vitals"), task("t2", "File reports")]);
        session.set_rating("t1", Rating::Scored(5)).unwrap();
        session.set_rating("t2", Rating::NotApplicable).unwrap();
        session.apply_report(sample_report());

        let record = SessionRecord::from_session(&session).unwrap();
        assert_eq!(record.session_id, session.id);
        assert_eq!(record.job_titles, vec!["Nurse", "Teacher"]);
        assert_eq!(record.tasks_generated, 2);
        assert_eq!(record.tasks_scored, 1);
        assert_eq!(record.tasks_skipped, 1);
        assert_eq!(record.archetype, "The Connector");
        assert_eq!(record.recommendation_count, 0);
    }

    #[test]
    fn session_record_requires_a_report() {
        let session = WizardSession::new();
        assert!(SessionRecord::from_session(&session).is_none());
    }

    #[test]
    fn step_display() {
        assert_eq!(Step::JobInput.to_string(), "JOB_INPUT");
        assert_eq!(Step::TaskRating.to_string(), "TASK_RATING");
        assert_eq!(Step::Report.to_string(), "REPORT");
    }

    #[test]
    fn step_positions_are_one_based() {
        assert_eq!(Step::JobInput.position(), 1);
        assert_eq!(Step::TaskRating.position(), 2);
        assert_eq!(Step::Report.position(), 3);
    }
}
