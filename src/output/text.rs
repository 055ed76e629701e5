use super::html::NO_SUMMARY_MESSAGE;
use crate::check::CheckOutcome;
use crate::parser::{Report, StructuredReport, Verdict};

/// Plain-text rendering for terminals
pub fn render_report(report: &Report) -> String {
    match report {
        Report::Structured(structured) => render_structured(structured),
        Report::Fallback(block) => {
            let mut content = block.lines().collect::<Vec<_>>().join("\n");
            content.push('\n');
            content
        }
    }
}

pub fn render_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Report { report } => render_report(report),
        CheckOutcome::NoSummary => format!("{}\n", NO_SUMMARY_MESSAGE),
        CheckOutcome::Failed { error } => format!("Error: {}\n", error),
    }
}

fn render_structured(report: &StructuredReport) -> String {
    let mut content = String::new();

    if let Some(verdict) = &report.verdict {
        let marker = match verdict.category {
            Verdict::Original => "✅",
            Verdict::Exists => "❌",
            Verdict::Overlapping => "⚠️",
        };
        content.push_str(&format!("{} Result: {}\n\n", marker, verdict.category));
    }

    if let Some(confidence) = report.confidence {
        content.push_str(&format!(
            "Confidence Level: {} match with existing inventions\n",
            confidence
        ));
        content.push_str(&format!("{}\n\n", confidence_bar(confidence.percent())));
    }

    if let Some(summary) = &report.summary {
        content.push_str("## Summary\n\n");
        content.push_str(&summary.key_insight);
        if let Some(rest) = &summary.rest {
            content.push(' ');
            content.push_str(rest);
        }
        content.push_str("\n\n");
    }

    if let Some(findings) = &report.findings {
        content.push_str("## Top Findings\n\n");
        if findings.is_empty() {
            content.push_str("*No findings*\n");
        }
        for (i, finding) in findings.iter().enumerate() {
            content.push_str(&format!("{}. {}\n", i + 1, finding.title));
            if !finding.snippet.is_empty() {
                content.push_str(&format!("   {}\n", finding.snippet));
            }
            content.push_str(&format!(
                "   {} <{}>\n\n",
                finding.link_text, finding.link_url
            ));
        }
    }

    content
}

/// Twenty-cell bar, one cell per 5%
fn confidence_bar(percent: u8) -> String {
    let filled = usize::from(percent) / 5;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}
