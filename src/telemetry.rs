//! Structured logging for the library spans (`trace` feature).
//!
//! Enabled when `FLIGHTSCRIPT_LOG` or `RUST_LOG` is set, or when `-v` is
//! passed. Output goes to stderr so stdout stays a clean script or JSON stream.

#[cfg(feature = "trace")]
use once_cell::sync::OnceCell;

pub const LOG_ENV: &str = "FLIGHTSCRIPT_LOG";

/// Returned by [`telemetry_init`]; dropping it flushes nothing today but marks
/// the lifetime over which spans are recorded.
#[derive(Debug)]
pub struct TelemetryGuard {
    _private: (),
}

#[cfg(feature = "trace")]
static INIT: OnceCell<()> = OnceCell::new();

/// Filter directive for `-v` repetitions when no env filter is set.
pub fn verbosity_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("flightscript=info"),
        2 => Some("flightscript=debug"),
        _ => Some("flightscript=trace"),
    }
}

fn env_directive() -> Option<String> {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|k| std::env::var(k).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

#[cfg(feature = "trace")]
pub fn telemetry_init(verbosity: u8) -> Option<TelemetryGuard> {
    use tracing_subscriber::prelude::*;

    if INIT.get().is_some() {
        return None;
    }
    let directive = env_directive().or_else(|| verbosity_directive(verbosity).map(String::from))?;
    let filter = tracing_subscriber::EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("flightscript: ignoring invalid log filter '{directive}': {e}");
        tracing_subscriber::EnvFilter::new("warn")
    });
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("flightscript: logging init skipped (global subscriber already set)");
        return None;
    }
    let _ = INIT.set(());
    Some(TelemetryGuard { _private: () })
}

/// Without the `trace` feature there are no spans to record.
#[cfg(not(feature = "trace"))]
pub fn telemetry_init(verbosity: u8) -> Option<TelemetryGuard> {
    if verbosity > 0 || env_directive().is_some() {
        eprintln!("flightscript: built without the 'trace' feature; logging is unavailable");
    }
    None
}
