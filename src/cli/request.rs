use crate::check::IdeaRequest;
use crate::cli::RequestArgs;

pub fn execute(args: RequestArgs) -> anyhow::Result<()> {
    let request = IdeaRequest::new(args.idea)?;
    println!("{}", serde_json::to_string(&request)?);
    Ok(())
}
