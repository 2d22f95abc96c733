use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Install a stderr subscriber so stdout carries only command output.
///
/// `--verbose` wins over the `LOG_LEVEL` environment variable.
pub(crate) fn init(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = select_level(verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

pub(crate) fn select_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (Level, Option<String>) {
    if verbose {
        return (Level::DEBUG, None);
    }

    match env_val.map(str::trim) {
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(val) => match val.to_ascii_lowercase().as_str() {
            "debug" | "verbose" => (Level::DEBUG, None),
            "error" => (Level::ERROR, None),
            "info" => (Level::INFO, None),
            "trace" => (Level::TRACE, None),
            "warn" => (Level::WARN, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{val}`")),
            ),
        },
    }
}
