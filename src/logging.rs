use tracing_subscriber::EnvFilter;

/// Sends `agecalc` events to stderr, keeping stdout for the JSON report.
///
/// `-v` adds the config file and reference instant, `-vv` validation
/// rejections and computed ages. `RUST_LOG` wins when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("agecalc={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
