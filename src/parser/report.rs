use super::confidence::Confidence;
use super::finding::Finding;
use super::summary::Summary;
use super::verdict::Verdict;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerdictSection {
    pub category: Verdict,

    /// Verdict body as written in the report
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StructuredReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    /// `None` when there is no Top Findings header; an empty list when the
    /// header is present without any findings under it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<Finding>>,
}

/// Cleaned report text shown as-is when no section was recognized
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackBlock {
    pub text: String,
}

impl FallbackBlock {
    /// The text split at newlines; renderers join these with line breaks
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Structured(StructuredReport),
    Fallback(FallbackBlock),
}

impl Report {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Report::Fallback(_))
    }

    pub fn as_structured(&self) -> Option<&StructuredReport> {
        match self {
            Report::Structured(report) => Some(report),
            Report::Fallback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_lines() {
        let block = FallbackBlock {
            text: "one\ntwo\n\nthree".to_string(),
        };
        assert_eq!(block.lines().collect::<Vec<_>>(), vec!["one", "two", "", "three"]);
    }

    #[test]
    fn test_json_shape() {
        let report = Report::Structured(StructuredReport {
            confidence: Some(Confidence::new(82)),
            findings: Some(Vec::new()),
            ..StructuredReport::default()
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "structured");
        assert_eq!(json["confidence"], 82);
        assert!(json["findings"].as_array().unwrap().is_empty());
        assert!(json.get("verdict").is_none());
    }

    #[test]
    fn test_fallback_json_shape() {
        let report = Report::Fallback(FallbackBlock {
            text: "raw".to_string(),
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "fallback");
        assert_eq!(json["text"], "raw");
    }
}
