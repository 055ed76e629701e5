use crate::check::CheckOutcome;
use crate::parser::{Confidence, FallbackBlock, Finding, Report, StructuredReport, Summary, VerdictSection};

pub const NO_SUMMARY_MESSAGE: &str = "The agent did not produce a final summary.";

/// Render a report as the result markup of the idea checker page
pub fn render_report(report: &Report) -> String {
    match report {
        Report::Structured(structured) => render_structured(structured),
        Report::Fallback(block) => render_fallback(block),
    }
}

/// Render whatever the page shows after a check settles
pub fn render_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Report { report } => render_report(report),
        CheckOutcome::NoSummary => format!("<p>{}</p>", NO_SUMMARY_MESSAGE),
        CheckOutcome::Failed { error } => format!(
            "<div class=\"error\"><strong>Error:</strong> {}</div>",
            escape(error)
        ),
    }
}

fn render_structured(report: &StructuredReport) -> String {
    let mut html = String::new();

    if let Some(verdict) = &report.verdict {
        render_verdict(&mut html, verdict);
    }
    if let Some(confidence) = report.confidence {
        render_confidence(&mut html, confidence);
    }
    if let Some(summary) = &report.summary {
        render_summary(&mut html, summary);
    }
    if let Some(findings) = &report.findings {
        render_findings(&mut html, findings);
    }

    html
}

fn render_verdict(html: &mut String, verdict: &VerdictSection) {
    let display = verdict.category.display();
    html.push_str("<div class=\"verdict-section\">\n");
    html.push_str("  <div class=\"verdict-header\">\n");
    html.push_str(&format!(
        "    <i class=\"fas fa-{} verdict-icon {}\"></i>\n",
        display.icon, display.style
    ));
    html.push_str(&format!(
        "    <h2 class=\"verdict-title\">Result: {}</h2>\n",
        display.title
    ));
    html.push_str("  </div>\n");
    html.push_str("</div>\n");
}

fn render_confidence(html: &mut String, confidence: Confidence) {
    let percent = confidence.percent();
    html.push_str("<div class=\"confidence-indicator\">\n");
    html.push_str("  <div class=\"confidence-label\">Confidence Level</div>\n");
    html.push_str("  <div class=\"confidence-bar\">\n");
    html.push_str(&format!(
        "    <div class=\"confidence-fill\" style=\"width: {}%\"></div>\n",
        percent
    ));
    html.push_str("  </div>\n");
    html.push_str(&format!(
        "  <div class=\"confidence-text\">{}% match with existing inventions</div>\n",
        percent
    ));
    html.push_str("</div>\n");
}

fn render_summary(html: &mut String, summary: &Summary) {
    html.push_str("<div class=\"summary-card\">\n");
    html.push_str("  <h3>Summary</h3>\n");
    html.push_str(&format!(
        "  <p><span class=\"summary-insight\">{}</span>",
        escape(&summary.key_insight)
    ));
    if let Some(rest) = &summary.rest {
        html.push(' ');
        html.push_str(&escape(rest));
    }
    html.push_str("</p>\n");
    html.push_str("</div>\n");
}

fn render_findings(html: &mut String, findings: &[Finding]) {
    html.push_str("<div class=\"findings-section\">\n");
    html.push_str("  <h3>Top Findings</h3>\n");
    html.push_str("  <ul class=\"findings-list\">\n");
    for finding in findings {
        html.push_str("    <li class=\"finding-card\">\n");
        html.push_str(&format!(
            "      <div class=\"finding-title\">{}</div>\n",
            escape(&finding.title)
        ));
        html.push_str(&format!(
            "      <p class=\"finding-snippet\">{}</p>\n",
            escape(&finding.snippet)
        ));
        html.push_str(&format!(
            "      <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"finding-link\">{}</a>\n",
            escape(&finding.link_url),
            escape(&finding.link_text)
        ));
        html.push_str("    </li>\n");
    }
    html.push_str("  </ul>\n");
    html.push_str("</div>\n");
}

fn render_fallback(block: &FallbackBlock) -> String {
    let body = block
        .lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>");
    format!("<div class=\"summary-card\"><p>{}</p></div>", body)
}

/// Escape text for use in element content and quoted attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
