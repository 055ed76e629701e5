use regex::Regex;
use std::sync::LazyLock;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```markdown\s*").expect("opening fence pattern is valid"));

static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*$").expect("closing fence pattern is valid"));

/// Strip a "```markdown" wrapper around the whole report, then trim
///
/// Only a fence at the very start and one at the very end are removed; fenced
/// blocks inside the report are left alone.
pub fn strip_code_fences(raw: &str) -> String {
    let without_opening = OPENING_FENCE.replace(raw, "");
    let without_closing = CLOSING_FENCE.replace(&without_opening, "");
    without_closing.trim().to_string()
}
