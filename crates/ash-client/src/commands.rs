use ash_api::{ApiError, AshClient, WaitPolicy, wait_until_healthy};
use tracing::debug;

use crate::cli::{Cli, Mode, USAGE};

pub const SUCCESS_MARKER: &str = "✅";
pub const FAILURE_MARKER: &str = "❌";

/// Terminal failure of an invocation. `Display` is the line shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}", USAGE)]
    Usage,
    #[error("Invalid server URL: {0}")]
    InvalidServer(String),
    #[error("Ping failed: {0}")]
    PingFailed(String),
    #[error("Server responded with status code: {0}")]
    HealthStatus(String),
    #[error("ash server is not running or unreachable!")]
    Unreachable,
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("Failed to read response")]
    ReadFailed,
    #[error("Failed to parse response")]
    ParseFailed,
    #[error("Timed out waiting for ash server to come alive ({seconds} seconds)")]
    TimedOut { seconds: u64 },
}

impl CommandError {
    fn from_health(err: ApiError) -> Self {
        debug!(error = %err, "health request failed");
        match err {
            ApiError::InvalidUrl(e) => Self::InvalidServer(e.to_string()),
            ApiError::Request(e) => Self::PingFailed(e.to_string()),
            ApiError::ApiResponse { status, .. } => Self::HealthStatus(status.to_string()),
            ApiError::Body(_) => Self::ReadFailed,
            ApiError::Decode(_) => Self::ParseFailed,
        }
    }

    fn from_generate(err: ApiError) -> Self {
        debug!(error = %err, "generate request failed");
        match err {
            ApiError::InvalidUrl(e) => Self::InvalidServer(e.to_string()),
            ApiError::Request(_) => Self::Unreachable,
            ApiError::ApiResponse { status, .. } => Self::ServerError(status.to_string()),
            ApiError::Body(_) => Self::ReadFailed,
            ApiError::Decode(_) => Self::ParseFailed,
        }
    }
}

/// Run the action selected by `cli` and return the line to print on stdout.
pub async fn execute(cli: &Cli) -> Result<String, CommandError> {
    match cli.mode() {
        Mode::Wait(policy) => wait(&cli.server, policy).await,
        Mode::Ping => ping(&cli.server).await,
        Mode::Query { text, quiet } => query(&cli.server, &text, quiet).await,
        Mode::Usage => Err(CommandError::Usage),
    }
}

/// Single health check.
pub async fn ping(server: &str) -> Result<String, CommandError> {
    let client = AshClient::new(server).map_err(CommandError::from_health)?;
    let health = client.health().await.map_err(CommandError::from_health)?;
    Ok(format!(
        "{SUCCESS_MARKER} Pong! Server is running (model: {})",
        health.model
    ))
}

/// Poll the health endpoint until it answers 200 or `policy.timeout` elapses.
pub async fn wait(server: &str, policy: WaitPolicy) -> Result<String, CommandError> {
    let client = AshClient::new(server).map_err(CommandError::from_health)?;
    match wait_until_healthy(&client, policy).await {
        Ok(_) => Ok(format!("{SUCCESS_MARKER} ash server is alive!")),
        Err(e) => {
            debug!(attempts = e.attempts, "gave up waiting for server");
            Err(CommandError::TimedOut {
                seconds: e.timeout.as_secs(),
            })
        }
    }
}

/// Ask the server to turn `text` into a command.
pub async fn query(server: &str, text: &str, quiet: bool) -> Result<String, CommandError> {
    let client = AshClient::new(server).map_err(CommandError::from_generate)?;
    let resp = client
        .generate(text)
        .await
        .map_err(CommandError::from_generate)?;
    if quiet {
        Ok(resp.command)
    } else {
        Ok(format!("{SUCCESS_MARKER} Command: {}", resp.command))
    }
}
