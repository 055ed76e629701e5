use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CONFIDENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)%\s*(?:confidence|match|similarity)")
        .expect("confidence pattern is valid")
});

/// Percentage match with existing inventions, capped at 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 100;

    pub fn new(percent: u32) -> Self {
        Self(percent.min(Self::MAX as u32) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Find the first "<n>% confidence|match|similarity" figure in the text
pub fn extract_confidence(text: &str) -> Option<Confidence> {
    let caps = CONFIDENCE.captures(text)?;
    let digits = caps.get(1)?.as_str();

    // Digit strings too long for u32 are still "more than 100"
    let percent = digits.parse::<u32>().unwrap_or(u32::MAX);
    if percent > Confidence::MAX as u32 {
        tracing::debug!("Confidence figure {} exceeds 100, capping", digits);
    }

    Some(Confidence::new(percent))
}
