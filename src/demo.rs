//! Offline stand-in for the hosted model.
//!
//! [`DemoModel`] implements [`GenerateContent`] with canned, schema-shaped
//! JSON so the full wizard flow can be exercised without a network or an API
//! key. Responses go through the exact same gateway parsing path as live
//! ones.

use serde_json::json;

use crate::gemini::client::GenerateContent;
use crate::gemini::error::GeminiError;
use crate::gemini::types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part,
};

pub struct DemoModel;

impl DemoModel {
    fn reply(text: String) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    role: Some("model".into()),
                    parts: vec![Part { text }],
                },
                finish_reason: Some("STOP".into()),
            }],
            usage_metadata: None,
        }
    }
}

impl GenerateContent for DemoModel {
    async fn generate_content(
        &self,
        _model: &str,
        req: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        // The schema root distinguishes the two calls: ARRAY asks for tasks,
        // OBJECT for the report.
        let text = match req.generation_config.response_schema["type"].as_str() {
            Some("ARRAY") => demo_tasks_json(),
            _ => demo_report_json(),
        };
        Ok(Self::reply(text))
    }
}

fn demo_tasks_json() -> String {
    json!([
        {"id": "t1", "description": "Coordinate schedules across multiple teams", "category": "Administrative"},
        {"id": "t2", "description": "Resolve escalated customer complaints", "category": "Interpersonal"},
        {"id": "t3", "description": "Draft status reports for leadership", "category": "Administrative"},
        {"id": "t4", "description": "Troubleshoot recurring process failures", "category": "Technical"},
        {"id": "t5", "description": "Design onboarding materials for new hires", "category": "Creative"},
        {"id": "t6", "description": "Mentor junior colleagues one-on-one", "category": "Leadership"},
        {"id": "t7", "description": "Negotiate timelines with external vendors", "category": "Interpersonal"},
        {"id": "t8", "description": "Analyze performance data to find bottlenecks", "category": "Technical"}
    ])
    .to_string()
}

fn demo_report_json() -> String {
    json!({
        "archetype": {
            "name": "The Orchestrator",
            "description": "You are happiest coordinating people and moving parts toward a shared deadline.",
            "powerMove": "Volunteer to run the next cross-team initiative end to end."
        },
        "environment": {
            "cultureType": "Collaborative mid-size company",
            "idealSetup": "Hybrid, with regular in-person planning days",
            "warningSigns": ["Hero culture", "No clear ownership of decisions"]
        },
        "topTasks": [
            {"taskId": "t1", "taskDescription": "Coordinate schedules across multiple teams", "rating": 5},
            {"taskId": "t6", "taskDescription": "Mentor junior colleagues one-on-one", "rating": 4}
        ],
        "recommendations": [
            {"jobTitle": "Program Manager", "reason": "Coordination is the core of the role.", "alignmentScore": 93},
            {"jobTitle": "Operations Lead", "reason": "Process ownership with people contact.", "alignmentScore": 88},
            {"jobTitle": "Customer Success Manager", "reason": "Relationship-driven problem solving.", "alignmentScore": 81}
        ],
        "summary": "Your ratings point to energy from orchestration and mentorship rather than solo deep work."
    })
    .to_string()
}
