use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::WizardSession;

/// A past job title entered by the user during the JOB_INPUT step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
}

impl Job {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
        }
    }
}

/// A candidate work task produced by the model from the user's job history.
///
/// Tasks are created only by the gateway and never mutated; the set is fixed
/// once the TASK_RATING step begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub category: String,
}

/// An enjoyment rating for a single task: a score of 1–5, or N/A for tasks
/// the user never performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Scored(u8),
    NotApplicable,
}

impl Rating {
    /// Checked constructor for a numeric rating. Only 1..=5 are valid.
    pub fn scored(value: u8) -> Option<Self> {
        (1..=5).contains(&value).then_some(Rating::Scored(value))
    }

    /// The numeric score, or `None` for N/A.
    pub fn score(&self) -> Option<u8> {
        match self {
            Rating::Scored(v) => Some(*v),
            Rating::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Rating::Scored(_))
    }

    /// Parses terminal input: "1"–"5" or "n"/"na"/"n/a" (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "n" | "na" | "n/a" => return Some(Rating::NotApplicable),
            _ => {}
        }
        trimmed.parse::<u8>().ok().and_then(Rating::scored)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Scored(v) => write!(f, "{v}/5"),
            Rating::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// A task joined with its rating, built at the moment the report is
/// requested. Not stored anywhere; it exists only to feed the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRating {
    pub task_id: String,
    pub task_description: String,
    pub rating: Rating,
}

/// The model's label for the user's inferred work-style preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub name: String,
    pub description: String,
    pub power_move: String,
}

/// Which working environments fit the user, and which to avoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFit {
    pub culture_type: String,
    pub ideal_setup: String,
    pub warning_signs: Vec<String>,
}

/// A task the model ranked among the user's most enjoyable ones.
///
/// The rating is an `f32` because the model emits JSON numbers and cannot be
/// trusted to produce integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTask {
    pub task_id: String,
    pub task_description: String,
    pub rating: f32,
}

/// A job title the model recommends, with its reasoning and a 0–100 fit
/// estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub job_title: String,
    pub reason: String,
    pub alignment_score: f32,
}

/// The full career report produced by the second model call. Opaque and
/// immutable once received; `top_tasks` is the model's own ranking choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerReport {
    pub archetype: Archetype,
    pub environment: EnvironmentFit,
    pub top_tasks: Vec<TopTask>,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
}

/// Structured summary record produced when a session reaches REPORT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub job_titles: Vec<String>,
    pub tasks_generated: usize,
    pub tasks_scored: usize,
    pub tasks_skipped: usize,
    pub archetype: String,
    pub recommendation_count: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl SessionRecord {
    /// Generate a record from a completed session. Returns `None` if the
    /// session has not produced a report yet.
    pub fn from_session(session: &WizardSession) -> Option<Self> {
        let report = session.report.as_ref()?;
        let now = Utc::now();
        let duration = now - session.created_at;
        let scored = session
            .ratings
            .values()
            .filter(|r| r.is_applicable())
            .count();

        Some(Self {
            session_id: session.id.clone(),
            job_titles: session.jobs.iter().map(|j| j.title.clone()).collect(),
            tasks_generated: session.tasks.len(),
            tasks_scored: scored,
            tasks_skipped: session.ratings.len() - scored,
            archetype: report.archetype.name.clone(),
            recommendation_count: report.recommendations.len(),
            started_at: session.created_at,
            completed_at: now,
            duration_ms: duration.num_milliseconds(),
        })
    }
}
