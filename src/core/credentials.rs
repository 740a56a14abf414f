//! Deployment credentials sourced from the process environment.
//!
//! Both variables are required. They are read once per invocation and
//! never written anywhere.

use crate::error::{Error, Result};

pub const ENV_DEPLOY_TOKEN: &str = "RAYGUN_DEPLOY_TOKEN";
pub const ENV_DEPLOY_KEY: &str = "RAYGUN_DEPLOY_KEY";

#[derive(Debug, Clone)]
pub struct Credentials {
    /// Auth token passed as the authToken query parameter.
    pub token: String,
    /// Application API key sent in the request body.
    pub key: String,
}

impl Credentials {
    /// Read both credentials, failing on the first one that is absent.
    ///
    /// An unset variable and a whitespace-only value are both treated as
    /// missing; the error names the offending variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: require_env(ENV_DEPLOY_TOKEN)?,
            key: require_env(ENV_DEPLOY_KEY)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::env_missing_variable(name)),
    }
}
