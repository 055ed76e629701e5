use serde::{Deserialize, Serialize};

/// Outcome category of an idea check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Original,
    Exists,
    Overlapping,
}

/// How a verdict is presented: icon, style class and headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerdictDisplay {
    pub icon: &'static str,
    pub style: &'static str,
    pub title: &'static str,
}

impl Verdict {
    pub fn display(self) -> VerdictDisplay {
        match self {
            Verdict::Original => VerdictDisplay {
                icon: "check-circle",
                style: "verdict-original",
                title: "Likely Original",
            },
            Verdict::Exists => VerdictDisplay {
                icon: "times-circle",
                style: "verdict-exists",
                title: "Already Exists",
            },
            Verdict::Overlapping => VerdictDisplay {
                icon: "exclamation-triangle",
                style: "verdict-overlapping",
                title: "Possibly Overlapping",
            },
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display().title)
    }
}

enum Predicate {
    ContainsAny(&'static [&'static str]),
    Always,
}

impl Predicate {
    fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::ContainsAny(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            Predicate::Always => true,
        }
    }
}

/// Evaluated top to bottom; the last rule always matches
const RULES: &[(Predicate, Verdict)] = &[
    (
        Predicate::ContainsAny(&["likely original", "original"]),
        Verdict::Original,
    ),
    (
        Predicate::ContainsAny(&["already exists", "exists"]),
        Verdict::Exists,
    ),
    (Predicate::Always, Verdict::Overlapping),
];

/// Map verdict text to a category by case-insensitive keyword match
pub fn classify_verdict(text: &str) -> Verdict {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(predicate, _)| predicate.matches(&lowered))
        .map(|(_, verdict)| *verdict)
        .unwrap_or(Verdict::Overlapping)
}
