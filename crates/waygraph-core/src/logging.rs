//! Structured logging setup
//!
//! The engine emits `tracing` spans and events; nothing is printed unless the
//! embedding program installs a subscriber. [`init_tracing`] is the one the
//! CLI uses.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG` for a filter override
pub const LOG_ENV_VAR: &str = "WAYGRAPH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "search");
/// // Or with additional fields:
/// trace_time!(start, "search", vertices = graph.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "waygraph=debug,waygraph_core=debug",
        (false, None) => "waygraph=warn,waygraph_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Expand a bare level (`debug`) into a filter covering both crates.
/// Directives that already name a target are passed through untouched.
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("waygraph={level},waygraph_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_expands_to_both_crates() {
        assert_eq!(
            filter_directive("trace"),
            "waygraph=trace,waygraph_core=trace"
        );
    }

    #[test]
    fn test_targeted_directive_passes_through() {
        assert_eq!(filter_directive("waygraph_core=info"), "waygraph_core=info");
    }
}
