use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EnvMissingVariable,

    GitCommandFailed,
    GitNoOutput,

    DeployTransportFailed,
    DeployAuthTokenInvalid,
    DeployApiKeyInvalid,
    DeployApiError,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EnvMissingVariable => "env.missing_variable",

            ErrorCode::GitCommandFailed => "git.command_failed",
            ErrorCode::GitNoOutput => "git.no_output",

            ErrorCode::DeployTransportFailed => "deploy.transport_failed",
            ErrorCode::DeployAuthTokenInvalid => "deploy.auth_token_invalid",
            ErrorCode::DeployApiKeyInvalid => "deploy.api_key_invalid",
            ErrorCode::DeployApiError => "deploy.api_error",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingVariableDetails {
    pub variable: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoOutputDetails {
    pub command: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetails {
    pub status: u16,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn env_missing_variable(variable: impl Into<String>) -> Self {
        let variable = variable.into();
        let details = serde_json::to_value(MissingVariableDetails {
            variable: variable.clone(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::EnvMissingVariable,
            format!("Required environment variable {} is missing", variable),
            details,
        )
        .with_hint(format!(
            "Export {} from your Raygun application settings before running the task",
            variable
        ))
    }

    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::GitCommandFailed,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn git_no_output(command: impl Into<String>) -> Self {
        let details = serde_json::to_value(NoOutputDetails {
            command: command.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::GitNoOutput,
            "Command produced no output",
            details,
        )
    }

    pub fn deploy_transport_failed(error: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(
            ErrorCode::DeployTransportFailed,
            format!("Could not send deployment info to Raygun: {}", error),
            serde_json::json!({ "error": error }),
        )
    }

    pub fn deploy_auth_token_invalid() -> Self {
        Self::new(
            ErrorCode::DeployAuthTokenInvalid,
            "Could not send deployment info to Raygun: your deploy token is wrong",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Check RAYGUN_DEPLOY_TOKEN against your Raygun account settings")
    }

    pub fn deploy_api_key_invalid() -> Self {
        Self::new(
            ErrorCode::DeployApiKeyInvalid,
            "Could not send deployment info to Raygun: your API key is either wrong or you don't have access to that application",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Check RAYGUN_DEPLOY_KEY against the application's settings in Raygun")
    }

    pub fn deploy_api_error(status: u16) -> Self {
        let details = serde_json::to_value(ApiErrorDetails { status })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::DeployApiError,
            format!(
                "Could not send deployment info to Raygun: got a {} response code",
                status
            ),
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            serde_json::json!({ "error": error.into(), "context": context }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
