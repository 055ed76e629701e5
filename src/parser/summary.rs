use serde::{Deserialize, Serialize};

/// Summary section, split into its first sentence and the remainder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Summary {
    pub text: String,

    pub key_insight: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

impl Summary {
    pub fn from_text(text: &str) -> Self {
        let (key_insight, rest) = match text.split_once(". ") {
            Some((first, rest)) => (format!("{}.", first), rest),
            None => (text.to_string(), ""),
        };

        Self {
            text: text.to_string(),
            key_insight,
            rest: (!rest.is_empty()).then(|| rest.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        let summary = Summary::from_text("Great idea.");
        assert_eq!(summary.key_insight, "Great idea.");
        assert!(summary.rest.is_none());
    }

    #[test]
    fn test_key_insight_split() {
        let summary = Summary::from_text("Similar chargers exist. Most use coils. Yours differs.");
        assert_eq!(summary.key_insight, "Similar chargers exist.");
        assert_eq!(
            summary.rest.as_deref(),
            Some("Most use coils. Yours differs.")
        );
    }

    #[test]
    fn test_decimal_point_is_not_a_boundary() {
        let summary = Summary::from_text("Version 2.0 is close");
        assert_eq!(summary.key_insight, "Version 2.0 is close");
        assert!(summary.rest.is_none());
    }

    #[test]
    fn test_empty() {
        let summary = Summary::from_text("");
        assert_eq!(summary.key_insight, "");
        assert!(summary.rest.is_none());
    }
}
