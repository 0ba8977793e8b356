use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Logs go to stderr; stdout carries only
/// command output. `ASH_LOG_FORMAT=json` selects the JSON formatter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ash_client=warn,ash_api=warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn json_requested() -> bool {
    std::env::var("ASH_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"))
}
