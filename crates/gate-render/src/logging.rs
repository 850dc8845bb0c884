use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directive used when `RUST_LOG` is unset or cannot be parsed.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Initialize a tracing subscriber for hosts that do not install their own.
///
/// Uses the `RUST_LOG` environment variable to determine the log level,
/// defaulting to "info" if not set. Block decisions are logged at `debug`,
/// so `RUST_LOG=gate_blocks=debug` shows why each block was kept or dropped.
///
/// Returns an error instead of panicking if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref())?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build the filter for `directives`, falling back to [`DEFAULT_DIRECTIVE`].
fn env_filter(
    directives: Option<&str>,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => EnvFilter::try_new(DEFAULT_DIRECTIVE),
    }
}
