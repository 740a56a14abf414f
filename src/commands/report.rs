use clap::Args;

use raygun_deployment::deployment::{self, DeploymentReport};
use raygun_deployment::git::ShellRunner;
use raygun_deployment::http::HttpTransport;

use super::CmdResult;

#[derive(Args)]
pub struct ReportArgs {
    /// Repository directory to resolve the tag and revision in
    #[arg(long, default_value = ".")]
    pub repo: String,
}

pub fn run(args: ReportArgs) -> CmdResult<DeploymentReport> {
    let runner = ShellRunner::new(args.repo);
    let transport = HttpTransport::new();

    let report = deployment::run(&runner, &transport)?;
    Ok((report, 0))
}
