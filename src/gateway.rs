//! Model gateway: the two prompt/response contracts with the hosted model.
//!
//! [`generate_tasks`] turns a job-title list into candidate work tasks and
//! [`generate_report`] turns enjoyment ratings into a career report. Both
//! constrain the model to schema-shaped JSON output, parse it strictly, and
//! apply defensive caps on result size. Parse failures always surface as
//! [`GatewayError::SchemaParse`]; the gateway never degrades silently.

use serde_json::json;

use crate::error::GatewayError;
use crate::gemini::{GenerateContent, GenerateContentRequest, GenerateContentResponse};
use crate::wizard::{CareerReport, Job, Task, TaskRating};

/// Default cap on generated tasks; configurable via `max_tasks`.
pub const DEFAULT_MAX_TASKS: usize = 25;

/// Hard cap on report recommendations, regardless of what the model returns.
pub const MAX_RECOMMENDATIONS: usize = 10;

pub const DEFAULT_TASK_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_REPORT_MODEL: &str = "gemini-3-pro-preview";

/// Response schema for task generation: an array of task objects.
fn task_list_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "description": { "type": "STRING" },
                "category": { "type": "STRING" },
            },
            "required": ["id", "description", "category"],
        },
    })
}

/// Response schema for report generation: the full career report object.
fn report_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "archetype": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "powerMove": { "type": "STRING" },
                },
                "required": ["name", "description", "powerMove"],
            },
            "environment": {
                "type": "OBJECT",
                "properties": {
                    "cultureType": { "type": "STRING" },
                    "idealSetup": { "type": "STRING" },
                    "warningSigns": { "type": "ARRAY", "items": { "type": "STRING" } },
                },
                "required": ["cultureType", "idealSetup", "warningSigns"],
            },
            "topTasks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "taskId": { "type": "STRING" },
                        "taskDescription": { "type": "STRING" },
                        "rating": { "type": "NUMBER" },
                    },
                    "required": ["taskId", "taskDescription", "rating"],
                },
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "jobTitle": { "type": "STRING" },
                        "reason": { "type": "STRING" },
                        "alignmentScore": { "type": "NUMBER" },
                    },
                    "required": ["jobTitle", "reason", "alignmentScore"],
                },
            },
            "summary": { "type": "STRING" },
        },
        "required": ["archetype", "environment", "topTasks", "recommendations", "summary"],
    })
}

fn task_prompt(jobs: &[Job], max_tasks: usize) -> String {
    let titles = jobs
        .iter()
        .map(|j| j.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Based on this list of past job titles: [{titles}], generate up to {max_tasks} \
         common professional tasks that a person in these roles would typically perform. \
         Ensure the tasks are distinct and cover various aspects of work (technical, \
         interpersonal, administrative, creative, leadership). Focus on high-impact verbs."
    )
}

/// One context line per scored task; N/A entries never appear here.
fn ratings_context(ratings: &[TaskRating]) -> String {
    ratings
        .iter()
        .filter_map(|r| {
            r.rating.score().map(|score| {
                format!(
                    "Task: \"{}\", Enjoyment Level: {score}/5",
                    r.task_description
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_prompt(ratings: &[TaskRating]) -> String {
    format!(
        "Analyze these task enjoyment ratings.\n\
         Ratings data:\n\
         {}\n\
         \n\
         1. Identify the top most enjoyable tasks.\n\
         2. Recommend up to {MAX_RECOMMENDATIONS} job titles.\n\
         3. Assign a \"Career Archetype\".\n\
         4. Provide a \"Power Move\".\n\
         5. Analyze \"Environment Fit\" - based on what they enjoy, should they be in a \
         fast-paced startup, a stable corporation, a creative agency, or remote? What are \
         culture \"Warning Signs\" they should avoid?",
        ratings_context(ratings)
    )
}

/// Extract the candidate text or fail with a schema error.
fn response_text(resp: &GenerateContentResponse) -> Result<String, GatewayError> {
    resp.text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GatewayError::SchemaParse("response contained no text".into()))
}

/// Ask the model to synthesize candidate work tasks from the given job
/// titles.
///
/// The caller guarantees `jobs` is non-empty. The result is validated
/// (non-blank ids and descriptions), de-duplicated by id (first occurrence
/// wins), and truncated so that `result.len() <= max_tasks` holds no matter
/// what the model returned.
pub async fn generate_tasks(
    client: &impl GenerateContent,
    model: &str,
    jobs: &[Job],
    max_tasks: usize,
) -> Result<Vec<Task>, GatewayError> {
    let req =
        GenerateContentRequest::json_prompt(task_prompt(jobs, max_tasks), task_list_schema());
    let response = client.generate_content(model, &req).await?;
    let text = response_text(&response)?;

    let tasks: Vec<Task> = serde_json::from_str(&text)
        .map_err(|e| GatewayError::SchemaParse(format!("invalid task list: {e}")))?;

    if tasks.is_empty() {
        return Err(GatewayError::SchemaParse("model returned no tasks".into()));
    }
    if tasks
        .iter()
        .any(|t| t.id.trim().is_empty() || t.description.trim().is_empty())
    {
        return Err(GatewayError::SchemaParse(
            "task with blank id or description".into(),
        ));
    }

    // Drop duplicate ids so the ratings map stays well-keyed.
    let mut seen = std::collections::HashSet::new();
    let mut tasks: Vec<Task> = tasks
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect();
    tasks.truncate(max_tasks);
    Ok(tasks)
}

/// Ask the model for a career report from the given ratings.
///
/// N/A-rated entries are excluded from the analysis context before the
/// prompt is built. The returned report's `recommendations` list is
/// truncated to [`MAX_RECOMMENDATIONS`]; `top_tasks` is accepted as the
/// model's own ranking without local re-ranking.
pub async fn generate_report(
    client: &impl GenerateContent,
    model: &str,
    ratings: &[TaskRating],
) -> Result<CareerReport, GatewayError> {
    let req = GenerateContentRequest::json_prompt(report_prompt(ratings), report_schema());
    let response = client.generate_content(model, &req).await?;
    let text = response_text(&response)?;

    let mut report: CareerReport = serde_json::from_str(&text)
        .map_err(|e| GatewayError::SchemaParse(format!("invalid career report: {e}")))?;

    report.recommendations.truncate(MAX_RECOMMENDATIONS);
    Ok(report)
}
