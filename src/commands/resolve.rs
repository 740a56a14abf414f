use clap::Args;
use serde::Serialize;

use raygun_deployment::git::{self, ShellRunner};

use super::CmdResult;

#[derive(Args)]
pub struct ResolveArgs {
    /// Repository directory to resolve the tag and revision in
    #[arg(long, default_value = ".")]
    pub repo: String,
}

/// What `report` would send, without sending it. No credentials needed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    pub version: String,
    pub scm_identifier: String,
}

pub fn run(args: ResolveArgs) -> CmdResult<ResolveOutput> {
    let runner = ShellRunner::new(args.repo);

    let version = git::resolve_version(&runner)?;
    let scm_identifier = git::resolve_revision(&runner, &version)?;

    Ok((
        ResolveOutput {
            version,
            scm_identifier,
        },
        0,
    ))
}
