use thiserror::Error;

use crate::gemini::GeminiError;

/// Failures produced by the model gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The network call to the model service failed (connectivity, non-2xx,
    /// timeout).
    #[error("model call failed: {0}")]
    Transport(#[from] GeminiError),

    /// The model's response body was not valid JSON or did not match the
    /// expected shape.
    #[error("model response did not match the expected shape: {0}")]
    SchemaParse(String),
}

/// Failures surfaced by wizard operations. All of them leave the session in
/// a previously-valid state.
#[derive(Debug, Error)]
pub enum WizardError {
    /// A local precondition was violated; no network call was made.
    #[error("{0}")]
    Validation(String),

    /// A gateway call failed; the pending transition was aborted.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl WizardError {
    /// Whether retrying the same transition could succeed. Validation errors
    /// need different input first; gateway failures are worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WizardError::Gateway(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_is_the_message() {
        let err = WizardError::Validation("add at least one job title".into());
        assert_eq!(err.to_string(), "add at least one job title");
        assert!(!err.is_retryable());
    }

    #[test]
    fn gateway_errors_are_retryable() {
        let err = WizardError::Gateway(GatewayError::SchemaParse("bad JSON".into()));
        assert!(err.is_retryable());
        assert_eq!(
            err.to_string(),
            "model response did not match the expected shape: bad JSON"
        );
    }

    #[test]
    fn transport_wraps_gemini_error() {
        let inner = GeminiError::ApiError {
            status: 500,
            message: "boom".into(),
        };
        let err = GatewayError::Transport(inner);
        assert_eq!(
            err.to_string(),
            "model call failed: API error (status 500): boom"
        );
    }
}
