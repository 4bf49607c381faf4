//! Opt-in log output for the graph engine.
//!
//! The engine only emits `tracing` events: lifecycle passes at `debug`,
//! per-pass geometry and throttled pointer events at `trace`, settings
//! fallbacks and marker rollbacks at `warn`. Nothing is printed until a
//! subscriber is installed, either by the host or through
//! [`init_default_tracing`].

/// Default directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "line_graph=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
