mod confidence;
mod finding;
mod preprocess;
mod report;
mod sections;
mod split;
mod summary;
mod verdict;

pub use confidence::Confidence;
pub use finding::Finding;
pub use report::{FallbackBlock, Report, StructuredReport, VerdictSection};
pub use summary::Summary;
pub use verdict::Verdict;

use crate::config::ParserConfig;
use tracing::debug;

/// Parse a raw report returned by the idea checker into a structured report
///
/// Never fails: text without any recognized section comes back as a
/// fallback block holding the cleaned text.
pub fn parse_report(raw: &str, config: &ParserConfig) -> Report {
    let text = preprocess::strip_code_fences(raw);
    if text.len() != raw.trim().len() {
        debug!("Stripped code fence wrapper from report");
    }

    let confidence = confidence::extract_confidence(&text);
    let sections = sections::segment(&text);

    if sections.is_empty() {
        debug!("No report sections recognized, using fallback block");
        return Report::Fallback(FallbackBlock { text });
    }

    let verdict = sections.verdict.map(|body| VerdictSection {
        category: verdict::classify_verdict(body),
        text: body.to_string(),
    });
    let summary = sections.summary.map(Summary::from_text);
    let findings = sections
        .top_findings
        .map(|body| finding::decompose_findings(body, config));

    debug!(
        verdict = ?verdict.as_ref().map(|v| v.category),
        confidence = ?confidence.map(Confidence::percent),
        has_summary = summary.is_some(),
        findings = findings.as_ref().map_or(0, Vec::len),
        "Parsed report"
    );

    Report::Structured(StructuredReport {
        verdict,
        confidence,
        summary,
        findings,
    })
}
