use crate::check::interpret_response;
use crate::cli::{load_config, read_input, ResponseArgs};
use crate::output::{render_outcome, write_rendered};
use std::path::Path;
use tracing::info;

pub fn execute(args: ResponseArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let format = args.format.unwrap_or(config.output.format);

    let body = read_input(args.input.as_deref())?;
    info!("Interpreting response with status {}", args.status);

    let outcome = interpret_response(args.status, &body, &config.parser);
    let rendered = render_outcome(&outcome, format)?;
    write_rendered(args.output.as_deref(), &rendered)?;

    if outcome.is_failure() {
        anyhow::bail!("Check request failed (status {})", args.status);
    }
    Ok(())
}
