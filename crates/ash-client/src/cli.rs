use std::time::Duration;

use ash_api::{DEFAULT_WAIT_TIMEOUT, WaitPolicy};
use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8765";

pub const USAGE: &str =
    "Usage: ash-client [--quiet] [--ping] [--wait] [--timeout SECONDS] [--server URL] <query>";

#[derive(Debug, Parser)]
#[command(
    name = "ash-client",
    version,
    about = "ash client: turn a natural-language request into a shell command"
)]
pub struct Cli {
    /// Print only the generated command.
    #[arg(long)]
    pub quiet: bool,

    /// Ping the server to test connectivity.
    #[arg(long)]
    pub ping: bool,

    /// Wait for the server to come alive before proceeding.
    #[arg(long)]
    pub wait: bool,

    /// How long `--wait` keeps polling, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_WAIT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// ash server URL.
    #[arg(long, value_name = "URL", env = "ASH_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Natural-language request; several words are joined with spaces.
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,
}

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Wait(WaitPolicy),
    Ping,
    Query { text: String, quiet: bool },
    Usage,
}

impl Cli {
    /// Resolve flags to one action: wait beats ping, ping beats a query.
    pub fn mode(&self) -> Mode {
        if self.wait {
            return Mode::Wait(WaitPolicy::with_timeout(Duration::from_secs(self.timeout)));
        }
        if self.ping {
            return Mode::Ping;
        }
        match self.query_text() {
            Some(text) => Mode::Query {
                text,
                quiet: self.quiet,
            },
            None => Mode::Usage,
        }
    }

    fn query_text(&self) -> Option<String> {
        let text = self.query.join(" ");
        (!text.trim().is_empty()).then_some(text)
    }
}
