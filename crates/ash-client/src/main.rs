use std::process::ExitCode;

use ash_client::cli::{Cli, USAGE};
use ash_client::commands::{self, CommandError, FAILURE_MARKER};
use ash_client::telemetry;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures; everything else exits 1.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    match commands::execute(&cli).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(CommandError::Usage) => {
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{FAILURE_MARKER} {e}");
            ExitCode::FAILURE
        }
    }
}
