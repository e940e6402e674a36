use tracing_subscriber::EnvFilter;

/// Initialize stderr logging.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when the runner
/// has step debugging enabled and `info` elsewhere.
pub fn init() {
    let default = default_directive(std::env::var("RUNNER_DEBUG").ok().as_deref());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_directive(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "debug",
        _ => "info",
    }
}
