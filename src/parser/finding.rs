use super::split::split_retaining;
use crate::config::ParserConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Newline, optional whitespace, then a `- **` bullet that opens the next finding
static BULLET_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*(?P<next>-\s*\*\*)").expect("bullet boundary pattern is valid")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    pub title: String,

    pub link_text: String,

    pub link_url: String,

    #[serde(default)]
    pub snippet: String,
}

impl Finding {
    /// Build a finding from one bullet block
    ///
    /// Only the first bold span and the first link are lifted out of the
    /// snippet; any further bold text or links stay in it verbatim.
    pub fn from_block(block: &str, config: &ParserConfig) -> Self {
        let block = strip_bullet(block.trim()).trim();

        let title = BOLD
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| config.untitled_title.clone());

        let link = LINK.captures(block);
        let (link_text, link_url) = match &link {
            Some(caps) => (
                caps.get(1).map_or("", |m| m.as_str()).to_string(),
                caps.get(2).map_or("", |m| m.as_str()).to_string(),
            ),
            None => (
                config.default_link_text.clone(),
                config.default_link_url.clone(),
            ),
        };

        let mut snippet = BOLD.replace(block, "").into_owned();
        if let Some(whole) = link.as_ref().and_then(|caps| caps.get(0)) {
            snippet = snippet.replacen(whole.as_str(), "", 1);
        }

        Self {
            title,
            link_text,
            link_url,
            snippet: truncate_snippet(snippet.trim(), config.snippet_limit, &config.ellipsis),
        }
    }
}

/// Split the Top Findings body into findings, in order of appearance
pub fn decompose_findings(body: &str, config: &ParserConfig) -> Vec<Finding> {
    split_retaining(body.trim(), &BULLET_BOUNDARY)
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .map(|block| Finding::from_block(block, config))
        .collect()
}

/// Cut `snippet` to `limit` characters, appending `ellipsis` when anything was cut
pub fn truncate_snippet(snippet: &str, limit: usize, ellipsis: &str) -> String {
    match snippet.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &snippet[..cut], ellipsis),
        None => snippet.to_string(),
    }
}

/// Drop the two leading characters of a bullet ("- "), whatever they are
fn strip_bullet(block: &str) -> &str {
    match block.char_indices().nth(2) {
        Some((idx, _)) => &block[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ParserConfig {
        ParserConfig::default()
    }

    #[test]
    fn test_decompose_single_finding() {
        let findings = decompose_findings(
            "- **Wireless Charger** [Patent US123](http://example.com) A device for charging.",
            &config(),
        );
        assert_eq!(
            findings,
            vec![Finding {
                title: "Wireless Charger".to_string(),
                link_text: "Patent US123".to_string(),
                link_url: "http://example.com".to_string(),
                snippet: "A device for charging.".to_string(),
            }]
        );
    }

    #[test]
    fn test_decompose_keeps_order() {
        let body = "- **First** [a](http://a) one\n\n- **Second** [b](http://b) two\n  - **Third** three";
        let titles: Vec<_> = decompose_findings(body, &config())
            .into_iter()
            .map(|f| f.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_defaults_when_missing() {
        let finding = Finding::from_block("- just some prose", &config());
        assert_eq!(finding.title, "Untitled Finding");
        assert_eq!(finding.link_text, "Read more");
        assert_eq!(finding.link_url, "#");
        assert_eq!(finding.snippet, "just some prose");
    }

    #[test]
    fn test_custom_defaults() {
        let config = ParserConfig {
            untitled_title: "No Title".to_string(),
            ..ParserConfig::default()
        };
        let finding = Finding::from_block("- [Link](http://x)", &config);
        assert_eq!(finding.title, "No Title");
        assert_eq!(finding.link_text, "Link");
        assert_eq!(finding.snippet, "");
    }

    #[test]
    fn test_only_first_bold_and_link_removed() {
        let finding = Finding::from_block(
            "- **Title** [one](http://1) uses **bold** and [two](http://2)",
            &config(),
        );
        assert_eq!(finding.title, "Title");
        assert_eq!(finding.link_url, "http://1");
        assert_eq!(finding.snippet, "uses **bold** and [two](http://2)");
    }

    #[test]
    fn test_multiline_block_continuation() {
        let body = "- **A** [l](http://u)\n  continues here\n- **B** next";
        let findings = decompose_findings(body, &config());
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].snippet, "continues here");
        assert_eq!(findings[1].snippet, "next");
    }

    #[test]
    fn test_long_snippet_truncated() {
        let long = "x".repeat(250);
        let finding = Finding::from_block(&format!("- **T** {}", long), &config());
        assert_eq!(finding.snippet.chars().count(), 203);
        assert_eq!(finding.snippet, format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn test_exact_limit_not_truncated() {
        let exact = "y".repeat(200);
        assert_eq!(truncate_snippet(&exact, 200, "..."), exact);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "é".repeat(5);
        assert_eq!(truncate_snippet(&text, 3, "…"), "ééé…");
    }

    #[test]
    fn test_leading_two_chars_always_dropped() {
        // Intro prose before the first bullet loses its first two characters
        let findings = decompose_findings("Intro text\n- **A** body", &config());
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].snippet, "tro text");
        assert_eq!(findings[0].title, "Untitled Finding");
    }

    #[test]
    fn test_empty_body() {
        assert!(decompose_findings("   \n ", &config()).is_empty());
    }

    #[test]
    fn test_malformed_bullets_tolerated() {
        let finding = Finding::from_block("- **Unclosed [link(http://x) text", &config());
        assert_eq!(finding.title, "Untitled Finding");
        assert_eq!(finding.link_url, "#");
        assert_eq!(finding.snippet, "**Unclosed [link(http://x) text");
    }
}
