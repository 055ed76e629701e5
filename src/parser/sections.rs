/// Report sections, in the order their headers are expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Verdict,
    Summary,
    TopFindings,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 3] = [
        SectionKind::Verdict,
        SectionKind::Summary,
        SectionKind::TopFindings,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            SectionKind::Verdict => "**Verdict:**",
            SectionKind::Summary => "**Summary:**",
            SectionKind::TopFindings => "**Top Findings:**",
        }
    }
}

/// Trimmed section bodies borrowed from the cleaned report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub verdict: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub top_findings: Option<&'a str>,
}

impl<'a> Sections<'a> {
    pub fn is_empty(&self) -> bool {
        self.verdict.is_none() && self.summary.is_none() && self.top_findings.is_none()
    }

    fn set(&mut self, kind: SectionKind, body: &'a str) {
        match kind {
            SectionKind::Verdict => self.verdict = Some(body),
            SectionKind::Summary => self.summary = Some(body),
            SectionKind::TopFindings => self.top_findings = Some(body),
        }
    }
}

struct Header {
    kind: SectionKind,
    start: usize,
    end: usize,
}

/// Locate the Verdict, Summary and Top Findings sections
///
/// Markers are consumed left to right: from the current position the earliest
/// marker among the kinds that may still follow (per `SectionKind::ORDER`) is
/// recognized, and kinds before it are no longer looked for. A header that
/// appears out of order is therefore treated as body text. A body runs up to
/// the next recognized header or the end of the text.
pub fn segment(text: &str) -> Sections<'_> {
    let mut headers = Vec::with_capacity(SectionKind::ORDER.len());
    let mut remaining: &[SectionKind] = &SectionKind::ORDER;
    let mut cursor = 0;

    while let Some((idx, kind, start)) = remaining
        .iter()
        .enumerate()
        .filter_map(|(idx, kind)| {
            text[cursor..]
                .find(kind.marker())
                .map(|offset| (idx, *kind, cursor + offset))
        })
        .min_by_key(|&(_, _, start)| start)
    {
        let end = start + kind.marker().len();
        headers.push(Header { kind, start, end });
        cursor = end;
        remaining = &remaining[idx + 1..];
    }

    let mut sections = Sections::default();
    for (i, header) in headers.iter().enumerate() {
        let body_end = headers.get(i + 1).map_or(text.len(), |next| next.start);
        sections.set(header.kind, text[header.end..body_end].trim());
    }

    sections
}
