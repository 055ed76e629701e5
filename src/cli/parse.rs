use crate::cli::{load_config, read_input, ParseArgs};
use crate::output::{render_report, write_rendered};
use crate::parser::parse_report;
use std::path::Path;
use tracing::{info, warn};

pub fn execute(args: ParseArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let format = args.format.unwrap_or(config.output.format);

    let raw = read_input(args.input.as_deref())?;
    info!("Parsing report ({} bytes) as {}", raw.len(), format);

    let report = parse_report(&raw, &config.parser);
    match report.as_structured() {
        Some(structured) => info!(
            "Recognized {} findings",
            structured.findings.as_ref().map_or(0, Vec::len)
        ),
        None => warn!("No Verdict, Summary or Top Findings section found; showing raw text"),
    }

    let rendered = render_report(&report, format)?;
    write_rendered(args.output.as_deref(), &rendered)?;
    Ok(())
}
