//! Request and response contract of the `/check` endpoint
//!
//! Transport is left to the caller; this module validates what goes out and
//! classifies what comes back.

use crate::config::ParserConfig;
use crate::error::{InputError, ResponseError};
use crate::parser::{parse_report, Report};
use serde::{Deserialize, Serialize};

/// JSON body posted to `/check`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdeaRequest {
    pub idea: String,
}

impl IdeaRequest {
    /// Reject ideas that are blank after trimming; the text itself is sent as typed
    pub fn new(idea: impl Into<String>) -> Result<Self, InputError> {
        let idea = idea.into();
        if idea.trim().is_empty() {
            return Err(InputError::EmptyIdea);
        }
        Ok(Self { idea })
    }
}

/// Successful `/check` response body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

/// What the page shows once the single in-flight request settles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    Report { report: Report },
    NoSummary,
    Failed { error: String },
}

impl CheckOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckOutcome::Failed { .. })
    }
}

impl From<ResponseError> for CheckOutcome {
    fn from(err: ResponseError) -> Self {
        CheckOutcome::Failed {
            error: err.to_string(),
        }
    }
}

/// Decode a `/check` response body given its HTTP status
pub fn decode_response(status: u16, body: &str) -> Result<CheckResponse, ResponseError> {
    if !(200..300).contains(&status) {
        return Err(ResponseError::Status {
            status,
            message: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| ResponseError::Decode(e.to_string()))
}

/// Classify a `/check` response into a report, a missing summary or a failure
pub fn interpret_response(status: u16, body: &str, config: &ParserConfig) -> CheckOutcome {
    let response = match decode_response(status, body) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Check request failed: {}", e);
            return e.into();
        }
    };

    match response.summary.as_deref() {
        Some(summary) if !summary.is_empty() => {
            let report = parse_report(summary, config);
            if report.is_fallback() {
                tracing::debug!("Summary has no recognizable sections");
            }
            CheckOutcome::Report { report }
        }
        _ => {
            tracing::warn!("Response carried no summary");
            CheckOutcome::NoSummary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Verdict;

    fn interpret(status: u16, body: &str) -> CheckOutcome {
        interpret_response(status, body, &ParserConfig::default())
    }

    #[test]
    fn test_idea_request_rejects_blank() {
        assert_eq!(IdeaRequest::new("   \n"), Err(InputError::EmptyIdea));
        assert_eq!(IdeaRequest::new(""), Err(InputError::EmptyIdea));
    }

    #[test]
    fn test_idea_request_keeps_text() {
        let request = IdeaRequest::new("  solar kettle ").unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"idea":"  solar kettle "}"#
        );
    }

    #[test]
    fn test_success_with_summary() {
        let body = r#"{"summary": "**Verdict:** This idea already exists"}"#;
        match interpret(200, body) {
            CheckOutcome::Report { report } => {
                let verdict = report.as_structured().unwrap().verdict.clone().unwrap();
                assert_eq!(verdict.category, Verdict::Exists);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_summary_is_not_an_error() {
        assert_eq!(interpret(200, "{}"), CheckOutcome::NoSummary);
        assert_eq!(interpret(200, r#"{"summary": null}"#), CheckOutcome::NoSummary);
        assert_eq!(interpret(200, r#"{"summary": ""}"#), CheckOutcome::NoSummary);
        assert!(!CheckOutcome::NoSummary.is_failure());
    }

    #[test]
    fn test_http_failure() {
        let outcome = interpret(500, "Internal Server Error");
        assert_eq!(
            outcome,
            CheckOutcome::Failed {
                error: "HTTP error! status: 500, message: Internal Server Error".to_string()
            }
        );
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_undecodable_body() {
        assert!(interpret(200, "<html>oops</html>").is_failure());
    }

    #[test]
    fn test_plain_summary_falls_back() {
        let body = r#"{"summary": "The agent did not produce a final summary."}"#;
        match interpret(200, body) {
            CheckOutcome::Report { report } => assert!(report.is_fallback()),
            other => panic!("expected report, got {:?}", other),
        }
    }
}
