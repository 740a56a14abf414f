//! Deployment reporting pipeline.
//!
//! Strictly forward: credentials, then version, then revision, then one
//! POST to the deployments endpoint. Any failure is terminal; nothing is
//! retried or re-entered.

use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::git::{self, CommandRunner};
use crate::http::DeploymentTransport;

pub const DEPLOYMENTS_URL: &str = "https://app.raygun.io/deployments";

/// Wire payload for the deployments endpoint. Exactly these three fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPayload {
    pub api_key: String,
    pub version: String,
    pub scm_identifier: String,
}

/// What was reported, returned on success for the CLI envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentReport {
    pub version: String,
    pub scm_identifier: String,
}

/// POST one deployment record and interpret the response status.
pub fn report(
    transport: &dyn DeploymentTransport,
    credentials: &Credentials,
    version: &str,
    scm_identifier: &str,
) -> Result<()> {
    let payload = DeploymentPayload {
        api_key: credentials.key.clone(),
        version: version.to_string(),
        scm_identifier: scm_identifier.to_string(),
    };
    let body = serde_json::to_value(&payload)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize payload".to_string())))?;

    let url = format!("{}?authToken={}", DEPLOYMENTS_URL, credentials.token);
    let status = transport.post_json(&url, &body)?;
    interpret_status(status)
}

/// The four-way branch: success, forbidden, unauthorized, other-error.
fn interpret_status(status: u16) -> Result<()> {
    match status {
        200 => Ok(()),
        403 => Err(Error::deploy_api_key_invalid()),
        401 => Err(Error::deploy_auth_token_invalid()),
        other => Err(Error::deploy_api_error(other)),
    }
}

/// Full pipeline: read credentials from the environment, resolve, report.
///
/// Credentials are checked before any subprocess runs, so a missing
/// variable short-circuits the whole run.
pub fn run(
    runner: &dyn CommandRunner,
    transport: &dyn DeploymentTransport,
) -> Result<DeploymentReport> {
    let credentials = Credentials::from_env()?;
    run_with(&credentials, runner, transport)
}

/// Pipeline after credential loading; lets tests supply credentials
/// without touching the process environment.
pub fn run_with(
    credentials: &Credentials,
    runner: &dyn CommandRunner,
    transport: &dyn DeploymentTransport,
) -> Result<DeploymentReport> {
    let version = git::resolve_version(runner)?;
    log_status!("deploy", "Resolved version {}", version);

    let scm_identifier = git::resolve_revision(runner, &version)?;
    log_status!("deploy", "Resolved revision {}", scm_identifier);

    report(transport, credentials, &version, &scm_identifier)?;
    log_status!("deploy", "Sent deployment info to Raygun.io");

    Ok(DeploymentReport {
        version,
        scm_identifier,
    })
}
